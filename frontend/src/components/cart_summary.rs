use shared::{format_vnd, CartTotals};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CartSummaryProps {
    pub totals: CartTotals,
    pub tax_rate: f64,
}

#[function_component(CartSummary)]
pub fn cart_summary(props: &CartSummaryProps) -> Html {
    html! {
        <div class="cart-summary">
            <div class="summary-row">
                <span>{"Tạm tính"}</span>
                <span>{format_vnd(props.totals.subtotal)}</span>
            </div>
            <div class="summary-row">
                <span>{format!("Thuế VAT ({:.0}%)", props.tax_rate * 100.0)}</span>
                <span>{format_vnd(props.totals.tax)}</span>
            </div>
            <div class="summary-row summary-total">
                <span>{"Tổng cộng"}</span>
                <span>{format_vnd(props.totals.total)}</span>
            </div>
        </div>
    }
}
