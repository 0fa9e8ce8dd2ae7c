use std::rc::Rc;

use shared::voucher::{category_options, tab_count};
use shared::{filter_vouchers, toggle_saved, Voucher, VoucherTab, WILDCARD_CATEGORY};
use yew::prelude::*;

use super::use_seed_data::{use_seed_data, LoadStatus};
use crate::services::api::MockApi;

const COMPONENT: &str = "vouchers";

pub enum VoucherAction {
    Loaded(Vec<Voucher>),
    ToggleSaved(String),
    SelectTab(VoucherTab),
    Search(String),
    SelectCategory(String),
    ToggleDropdown,
    CloseDropdown,
}

#[derive(Clone, PartialEq)]
pub struct VoucherState {
    pub vouchers: Vec<Voucher>,
    pub tab: VoucherTab,
    pub search_term: String,
    pub category: String,
    pub dropdown_open: bool,
}

impl Default for VoucherState {
    fn default() -> Self {
        Self {
            vouchers: Vec::new(),
            tab: VoucherTab::default(),
            search_term: String::new(),
            category: WILDCARD_CATEGORY.to_string(),
            dropdown_open: false,
        }
    }
}

impl Reducible for VoucherState {
    type Action = VoucherAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            VoucherAction::Loaded(vouchers) => next.vouchers = vouchers,
            VoucherAction::ToggleSaved(id) => next.vouchers = toggle_saved(&self.vouchers, &id),
            VoucherAction::SelectTab(tab) => next.tab = tab,
            VoucherAction::Search(term) => next.search_term = term,
            VoucherAction::SelectCategory(category) => {
                next.category = category;
                next.dropdown_open = false;
            }
            VoucherAction::ToggleDropdown => next.dropdown_open = !self.dropdown_open,
            VoucherAction::CloseDropdown => next.dropdown_open = false,
        }
        Rc::new(next)
    }
}

pub struct UseVouchersResult {
    pub state: VoucherState,
    pub filtered: Vec<Voucher>,
    pub categories: Rc<Vec<String>>,
    pub available_count: usize,
    pub saved_count: usize,
    pub status: LoadStatus,
    pub actions: UseVouchersActions,
}

#[derive(Clone, PartialEq)]
pub struct UseVouchersActions {
    pub toggle_saved: Callback<String>,
    pub select_tab: Callback<VoucherTab>,
    pub search: Callback<String>,
    pub select_category: Callback<String>,
    pub toggle_dropdown: Callback<()>,
    pub close_dropdown: Callback<()>,
}

#[hook]
pub fn use_vouchers(api: &MockApi) -> UseVouchersResult {
    let state = use_reducer(VoucherState::default);

    let on_loaded = {
        let dispatcher = state.dispatcher();
        Callback::from(move |vouchers| dispatcher.dispatch(VoucherAction::Loaded(vouchers)))
    };
    let status = {
        let api = api.clone();
        use_seed_data(
            COMPONENT,
            api.config().loading_delay_ms,
            move || api.get_vouchers(),
            on_loaded,
        )
    };

    // Options only change when the voucher set does
    let categories = use_memo(state.vouchers.clone(), |vouchers| category_options(vouchers));

    let toggle_saved = {
        let dispatcher = state.dispatcher();
        let api = api.clone();
        let vouchers = state.vouchers.clone();
        Callback::from(move |id: String| {
            if let Some(voucher) = vouchers.iter().find(|voucher| voucher.id == id) {
                api.set_voucher_saved(&id, !voucher.saved);
            }
            dispatcher.dispatch(VoucherAction::ToggleSaved(id));
        })
    };

    let select_tab = {
        let dispatcher = state.dispatcher();
        Callback::from(move |tab| dispatcher.dispatch(VoucherAction::SelectTab(tab)))
    };

    let search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |term| dispatcher.dispatch(VoucherAction::Search(term)))
    };

    let select_category = {
        let dispatcher = state.dispatcher();
        Callback::from(move |category| dispatcher.dispatch(VoucherAction::SelectCategory(category)))
    };

    let toggle_dropdown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(VoucherAction::ToggleDropdown))
    };

    let close_dropdown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(VoucherAction::CloseDropdown))
    };

    UseVouchersResult {
        filtered: filter_vouchers(&state.vouchers, state.tab, &state.search_term, &state.category),
        categories,
        available_count: tab_count(&state.vouchers, VoucherTab::Available),
        saved_count: tab_count(&state.vouchers, VoucherTab::Saved),
        state: (*state).clone(),
        status,
        actions: UseVouchersActions {
            toggle_saved,
            select_tab,
            search,
            select_category,
            toggle_dropdown,
            close_dropdown,
        },
    }
}
