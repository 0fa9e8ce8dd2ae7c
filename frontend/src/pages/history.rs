use shared::OrderRecord;
use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::components::order_card::OrderCard;
use crate::hooks::use_seed_data::use_seed_data;
use crate::services::api::MockApi;
use crate::services::logging::Logger;

const COMPONENT: &str = "history-page";

#[derive(Properties, PartialEq)]
pub struct HistoryPageProps {
    pub api: MockApi,
}

#[function_component(HistoryPage)]
pub fn history_page(props: &HistoryPageProps) -> Html {
    let orders = use_state(Vec::<OrderRecord>::new);

    let on_loaded = {
        let orders = orders.clone();
        Callback::from(move |loaded| orders.set(loaded))
    };
    let status = {
        let api = props.api.clone();
        use_seed_data(
            COMPONENT,
            api.config().loading_delay_ms,
            move || api.get_order_history(),
            on_loaded,
        )
    };

    // Reordering is client-only for now: confirm to the user and log it
    let on_reorder = Callback::from(|order: OrderRecord| {
        Logger::info_with_component(COMPONENT, &format!("Reorder requested for {}", order.id));
        gloo::dialogs::alert(&order.reorder_message());
    });

    html! {
        <div class="page history-page">
            <LoadStatusView {status}>
                {if orders.is_empty() {
                    html! { <p class="empty-state">{"Bạn chưa có đơn hàng nào"}</p> }
                } else {
                    html! {
                        <div class="order-list">
                            {for orders.iter().map(|order| html! {
                                <OrderCard
                                    key={order.id.clone()}
                                    order={order.clone()}
                                    on_reorder={on_reorder.clone()}
                                />
                            })}
                        </div>
                    }
                }}
            </LoadStatusView>
        </div>
    }
}
