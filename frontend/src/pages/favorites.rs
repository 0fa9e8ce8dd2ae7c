use shared::catalog::favorite_products;
use shared::Product;
use yew::prelude::*;

use crate::components::load_status_view::LoadStatusView;
use crate::components::product_card::product_cards;
use crate::components::toast::Toast;
use crate::hooks::use_products::use_products;
use crate::hooks::use_toast::use_toast;
use crate::services::api::MockApi;

use super::Page;

#[derive(Properties, PartialEq)]
pub struct FavoritesPageProps {
    pub api: MockApi,
    pub on_navigate: Callback<Page>,
}

#[function_component(FavoritesPage)]
pub fn favorites_page(props: &FavoritesPageProps) -> Html {
    let menu = use_products(&props.api, "favorites-page");
    let toast = use_toast(props.api.config().toast_duration_ms);
    let favorites = favorite_products(&menu.products);

    let on_add = {
        let show = toast.show.clone();
        Callback::from(move |product: Product| {
            show.emit(format!("Đã thêm {} vào giỏ hàng", product.name));
        })
    };

    let on_browse = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Categories))
    };

    html! {
        <div class="page favorites-page">
            <LoadStatusView status={menu.status.clone()}>
                {if favorites.is_empty() {
                    html! {
                        <div class="empty-state">
                            <p>{"Bạn chưa có món yêu thích nào"}</p>
                            <button type="button" class="btn btn-primary" onclick={on_browse}>
                                {"Khám phá thực đơn"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="product-grid">
                            {product_cards(favorites, &on_add, &menu.toggle_favorite)}
                        </div>
                    }
                }}
            </LoadStatusView>

            <Toast message={toast.message.clone()} />
        </div>
    }
}
