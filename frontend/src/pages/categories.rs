use shared::catalog::{product_categories, products_in_category};
use shared::{Product, WILDCARD_CATEGORY};
use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::components::product_card::product_cards;
use crate::components::toast::Toast;
use crate::hooks::use_products::use_products;
use crate::hooks::use_toast::use_toast;
use crate::services::api::MockApi;

#[derive(Properties, PartialEq)]
pub struct CategoriesPageProps {
    pub api: MockApi,
}

#[function_component(CategoriesPage)]
pub fn categories_page(props: &CategoriesPageProps) -> Html {
    let menu = use_products(&props.api, "categories-page");
    let toast = use_toast(props.api.config().toast_duration_ms);
    let selected = use_state(|| WILDCARD_CATEGORY.to_string());

    let categories = product_categories(&menu.products);
    let visible = products_in_category(&menu.products, &selected);

    let on_add = {
        let show = toast.show.clone();
        Callback::from(move |product: Product| {
            show.emit(format!("Đã thêm {} vào giỏ hàng", product.name));
        })
    };

    html! {
        <div class="page categories-page">
            <LoadStatusView status={menu.status.clone()}>
                <div class="category-chips">
                    {for categories.into_iter().map(|category| {
                        let active = category == *selected;
                        let onclick = {
                            let selected = selected.clone();
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| selected.set(category.clone()))
                        };
                        html! {
                            <button
                                type="button"
                                class={classes!("chip", active.then_some("active"))}
                                {onclick}
                            >
                                {category}
                            </button>
                        }
                    })}
                </div>

                {if visible.is_empty() {
                    html! { <p class="empty-state">{"Không có món nào trong danh mục này"}</p> }
                } else {
                    html! {
                        <div class="product-grid">
                            {product_cards(visible, &on_add, &menu.toggle_favorite)}
                        </div>
                    }
                }}
            </LoadStatusView>

            <Toast message={toast.message.clone()} />
        </div>
    }
}
