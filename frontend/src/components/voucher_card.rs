use shared::{format_vnd, Voucher};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VoucherCardProps {
    pub voucher: Voucher,
    pub on_toggle_saved: Callback<String>,
}

#[function_component(VoucherCard)]
pub fn voucher_card(props: &VoucherCardProps) -> Html {
    let voucher = &props.voucher;

    let on_toggle_click = {
        let on_toggle_saved = props.on_toggle_saved.clone();
        let id = voucher.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle_saved.emit(id.clone()))
    };

    html! {
        <div class={classes!("voucher-card", voucher.saved.then_some("saved"))}>
            <div class="voucher-value">{&voucher.display_value}</div>
            <div class="voucher-body">
                <h4 class="voucher-title">{&voucher.title}</h4>
                <p class="voucher-description">{&voucher.description}</p>
                <div class="voucher-meta">
                    {if let Some(category) = &voucher.category {
                        html! { <span class="voucher-category">{category}</span> }
                    } else { html! {} }}
                    {if let Some(min_order) = voucher.min_order {
                        html! { <span>{format!("Đơn tối thiểu {}", format_vnd(min_order))}</span> }
                    } else { html! {} }}
                    {if let Some(expiry) = &voucher.expiry {
                        html! { <span>{format!("HSD: {}", expiry)}</span> }
                    } else { html! {} }}
                </div>
            </div>
            <button
                type="button"
                class={classes!("btn", if voucher.saved { "btn-secondary" } else { "btn-primary" })}
                onclick={on_toggle_click}
            >
                {if voucher.saved { "Bỏ lưu" } else { "Lưu" }}
            </button>
        </div>
    }
}
