use shared::{format_vnd, CartLine};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CartLineItemProps {
    pub line: CartLine,
    pub on_quantity_change: Callback<(String, u32)>,
    pub on_remove: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(CartLineItem)]
pub fn cart_line_item(props: &CartLineItemProps) -> Html {
    let line = &props.line;

    let on_decrement = {
        let on_quantity_change = props.on_quantity_change.clone();
        let id = line.id.clone();
        // 1 -> 0 is rejected upstream, removal has its own button
        let quantity = line.quantity.saturating_sub(1);
        Callback::from(move |_: MouseEvent| on_quantity_change.emit((id.clone(), quantity)))
    };

    let on_increment = {
        let on_quantity_change = props.on_quantity_change.clone();
        let id = line.id.clone();
        let quantity = line.quantity.saturating_add(1);
        Callback::from(move |_: MouseEvent| on_quantity_change.emit((id.clone(), quantity)))
    };

    let on_remove_click = {
        let on_remove = props.on_remove.clone();
        let id = line.id.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
    };

    html! {
        <div class="cart-line">
            <div class="cart-line-info">
                <h4>{&line.name}</h4>
                <p class="cart-line-description">{&line.description}</p>
                <span class="cart-line-price">{format_vnd(line.unit_price)}</span>
            </div>
            <div class="cart-line-controls">
                <div class="quantity-control">
                    <button
                        type="button"
                        class="qty-btn"
                        onclick={on_decrement}
                        disabled={props.disabled || line.quantity <= 1}
                    >
                        {"−"}
                    </button>
                    <span class="qty-value">{line.quantity}</span>
                    <button
                        type="button"
                        class="qty-btn"
                        onclick={on_increment}
                        disabled={props.disabled}
                    >
                        {"+"}
                    </button>
                </div>
                <span class="cart-line-total">{format_vnd(line.line_total())}</span>
                <button
                    type="button"
                    class="remove-btn"
                    onclick={on_remove_click}
                    disabled={props.disabled}
                    title="Xóa"
                >
                    {"🗑"}
                </button>
            </div>
        </div>
    }
}
