use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::components::voucher_card::VoucherCard;
use crate::components::voucher_filters::VoucherFilters;
use crate::hooks::use_vouchers::use_vouchers;
use crate::services::api::MockApi;

#[derive(Properties, PartialEq)]
pub struct VouchersPageProps {
    pub api: MockApi,
}

#[function_component(VouchersPage)]
pub fn vouchers_page(props: &VouchersPageProps) -> Html {
    let vouchers = use_vouchers(&props.api);
    let state = &vouchers.state;

    // Any click that reaches the page closes the category dropdown
    let on_page_click = {
        let close_dropdown = vouchers.actions.close_dropdown.clone();
        let open = state.dropdown_open;
        Callback::from(move |_: MouseEvent| {
            if open {
                close_dropdown.emit(());
            }
        })
    };

    html! {
        <div class="page vouchers-page" onclick={on_page_click}>
            <LoadStatusView status={vouchers.status.clone()}>
                <VoucherFilters
                    tab={state.tab}
                    available_count={vouchers.available_count}
                    saved_count={vouchers.saved_count}
                    search_term={state.search_term.clone()}
                    category={state.category.clone()}
                    categories={vouchers.categories.clone()}
                    dropdown_open={state.dropdown_open}
                    on_select_tab={vouchers.actions.select_tab.clone()}
                    on_search={vouchers.actions.search.clone()}
                    on_select_category={vouchers.actions.select_category.clone()}
                    on_toggle_dropdown={vouchers.actions.toggle_dropdown.clone()}
                />

                {if vouchers.filtered.is_empty() {
                    html! { <p class="empty-state">{"Không tìm thấy voucher phù hợp"}</p> }
                } else {
                    html! {
                        <div class="voucher-list">
                            {for vouchers.filtered.iter().map(|voucher| html! {
                                <VoucherCard
                                    key={voucher.id.clone()}
                                    voucher={voucher.clone()}
                                    on_toggle_saved={vouchers.actions.toggle_saved.clone()}
                                />
                            })}
                        </div>
                    }
                }}
            </LoadStatusView>
        </div>
    }
}
