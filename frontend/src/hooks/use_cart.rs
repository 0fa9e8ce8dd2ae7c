use std::rc::Rc;

use shared::{cart, compute_totals, CartLine, CartTotals};
use yew::prelude::*;

use super::use_seed_data::{use_seed_data, LoadStatus};
use crate::services::api::MockApi;
use crate::services::logging::Logger;

const COMPONENT: &str = "cart";

pub enum CartAction {
    Loaded(Vec<CartLine>),
    UpdateQuantity { id: String, quantity: u32 },
    Remove(String),
    /// Freeze the lines while the order is being placed
    BeginCheckout,
    Clear,
}

#[derive(Clone, PartialEq, Default)]
pub struct CartState {
    pub lines: Vec<CartLine>,
    pub checkout_pending: bool,
}

impl Reducible for CartState {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (lines, checkout_pending) = match action {
            CartAction::Loaded(lines) => (lines, self.checkout_pending),
            CartAction::UpdateQuantity { .. } | CartAction::Remove(_) if self.checkout_pending => {
                return self;
            }
            CartAction::UpdateQuantity { id, quantity } => {
                (cart::update_quantity(&self.lines, &id, quantity), false)
            }
            CartAction::Remove(id) => (cart::remove_line(&self.lines, &id), false),
            CartAction::BeginCheckout => (self.lines.clone(), true),
            CartAction::Clear => (Vec::new(), false),
        };

        if lines == self.lines && checkout_pending == self.checkout_pending {
            self
        } else {
            Rc::new(Self {
                lines,
                checkout_pending,
            })
        }
    }
}

pub struct UseCartResult {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub item_count: u32,
    pub status: LoadStatus,
    pub actions: UseCartActions,
}

#[derive(Clone, PartialEq)]
pub struct UseCartActions {
    pub update_quantity: Callback<(String, u32)>,
    pub remove: Callback<String>,
    pub begin_checkout: Callback<()>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_cart(api: &MockApi) -> UseCartResult {
    let state = use_reducer(CartState::default);

    let on_loaded = {
        let dispatcher = state.dispatcher();
        Callback::from(move |lines| dispatcher.dispatch(CartAction::Loaded(lines)))
    };
    let status = {
        let api = api.clone();
        use_seed_data(
            COMPONENT,
            api.config().loading_delay_ms,
            move || api.get_cart(),
            on_loaded,
        )
    };

    let update_quantity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(id, quantity): (String, u32)| {
            if quantity < 1 {
                Logger::debug_with_component(COMPONENT, "Ignoring quantity below 1");
            }
            dispatcher.dispatch(CartAction::UpdateQuantity { id, quantity });
        })
    };

    let remove = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| {
            Logger::info_with_component(COMPONENT, &format!("Removing line {}", id));
            dispatcher.dispatch(CartAction::Remove(id));
        })
    };

    let begin_checkout = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CartAction::BeginCheckout))
    };

    let clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CartAction::Clear))
    };

    UseCartResult {
        totals: compute_totals(&state.lines, api.config().tax_rate),
        item_count: cart::item_count(&state.lines),
        lines: state.lines.clone(),
        status,
        actions: UseCartActions {
            update_quantity,
            remove,
            begin_checkout,
            clear,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, unit_price: f64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            unit_price,
            quantity,
        }
    }

    fn loaded() -> Rc<CartState> {
        Rc::new(CartState::default()).reduce(CartAction::Loaded(vec![
            line("com-ga", 50000.0, 1),
            line("tra-dao", 35000.0, 1),
            line("banh-mi", 40000.0, 2),
        ]))
    }

    #[test]
    fn test_quantity_update_replaces_quantity() {
        let state = loaded().reduce(CartAction::UpdateQuantity {
            id: "com-ga".to_string(),
            quantity: 3,
        });
        assert_eq!(state.lines[0].quantity, 3);
        assert_eq!(state.lines.len(), 3);
    }

    #[test]
    fn test_noop_keeps_same_state() {
        let state = loaded();

        let next = state.clone().reduce(CartAction::UpdateQuantity {
            id: "com-ga".to_string(),
            quantity: 0,
        });
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(CartAction::Remove("missing".to_string()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_remove_and_clear() {
        let state = loaded().reduce(CartAction::Remove("tra-dao".to_string()));
        let ids: Vec<&str> = state.lines.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, vec!["com-ga", "banh-mi"]);

        let state = state.reduce(CartAction::Clear);
        assert!(state.lines.is_empty());
    }

    #[test]
    fn test_lines_frozen_during_checkout() {
        let pending = loaded().reduce(CartAction::BeginCheckout);
        assert!(pending.checkout_pending);

        let next = pending.clone().reduce(CartAction::UpdateQuantity {
            id: "com-ga".to_string(),
            quantity: 2,
        });
        assert!(Rc::ptr_eq(&pending, &next));

        let next = pending.clone().reduce(CartAction::Remove("banh-mi".to_string()));
        assert!(Rc::ptr_eq(&pending, &next));
        assert_eq!(next.lines.len(), 3);

        let cleared = next.reduce(CartAction::Clear);
        assert!(cleared.lines.is_empty());
        assert!(!cleared.checkout_pending);
    }
}
