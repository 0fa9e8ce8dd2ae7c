use shared::{format_vnd, OrderRecord};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderCardProps {
    pub order: OrderRecord,
    pub on_reorder: Callback<OrderRecord>,
}

#[function_component(OrderCard)]
pub fn order_card(props: &OrderCardProps) -> Html {
    let order = &props.order;

    let on_reorder_click = {
        let on_reorder = props.on_reorder.clone();
        let order = order.clone();
        Callback::from(move |_: MouseEvent| on_reorder.emit(order.clone()))
    };

    html! {
        <div class="order-card">
            <div class="order-card-header">
                <span class="order-code">{order.short_code()}</span>
                <span class={classes!("status-badge", order.status.css_class())}>
                    {order.status.label()}
                </span>
            </div>
            <p class="order-date">{order.formatted_date()}</p>
            <p class="order-items">{order.item_summary()}</p>
            <div class="order-card-footer">
                <span class="order-total">{format_vnd(order.total)}</span>
                <span class="order-payment">{order.payment_method.label()}</span>
                <button type="button" class="btn btn-secondary" onclick={on_reorder_click}>
                    {"Đặt lại"}
                </button>
            </div>
        </div>
    }
}
