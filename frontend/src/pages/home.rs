use shared::catalog::{featured_products, popular_products};
use shared::Product;
use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::components::product_card::product_cards;
use crate::components::toast::Toast;
use crate::hooks::use_products::use_products;
use crate::hooks::use_toast::use_toast;
use crate::services::api::MockApi;
use crate::services::date_utils::{current_greeting, current_meal_suggestion};

use super::Page;

const POPULAR_LIMIT: usize = 4;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub api: MockApi,
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let menu = use_products(&props.api, "home-page");
    let toast = use_toast(props.api.config().toast_duration_ms);

    let on_add = {
        let show = toast.show.clone();
        Callback::from(move |product: Product| {
            show.emit(format!("Đã thêm {} vào giỏ hàng", product.name));
        })
    };

    let on_view_menu = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Categories))
    };

    let render_grid = |products: Vec<Product>| -> Html {
        html! {
            <div class="product-grid">
                {product_cards(products, &on_add, &menu.toggle_favorite)}
            </div>
        }
    };

    html! {
        <div class="page home-page">
            <section class="hero">
                <h2>{format!("{} 👋", current_greeting())}</h2>
                <p>{"Hôm nay bạn muốn ăn gì?"}</p>
                <button type="button" class="btn btn-primary" onclick={on_view_menu}>
                    {"Xem thực đơn"}
                </button>
            </section>

            <LoadStatusView status={menu.status.clone()}>
                <section>
                    <h3 class="section-title">{current_meal_suggestion()}</h3>
                    {render_grid(featured_products(&menu.products))}
                </section>
                <section>
                    <h3 class="section-title">{"Món phổ biến"}</h3>
                    {render_grid(popular_products(&menu.products, POPULAR_LIMIT))}
                </section>
            </LoadStatusView>

            <Toast message={toast.message.clone()} />
        </div>
    }
}
