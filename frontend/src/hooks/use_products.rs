use shared::catalog::toggle_favorite;
use shared::Product;
use yew::prelude::*;

use super::use_seed_data::{use_seed_data, LoadStatus};
use crate::services::api::MockApi;

pub struct UseProductsResult {
    pub products: Vec<Product>,
    pub status: LoadStatus,
    pub toggle_favorite: Callback<String>,
}

/// Menu data for a single page. Favorite toggles stay local to that page.
#[hook]
pub fn use_products(api: &MockApi, component: &'static str) -> UseProductsResult {
    let products = use_state(Vec::<Product>::new);

    let on_loaded = {
        let products = products.clone();
        Callback::from(move |loaded| products.set(loaded))
    };
    let status = {
        let api = api.clone();
        use_seed_data(
            component,
            api.config().loading_delay_ms,
            move || api.get_products(),
            on_loaded,
        )
    };

    let on_toggle_favorite = {
        let products = products.clone();
        Callback::from(move |id: String| products.set(toggle_favorite(&products, &id)))
    };

    UseProductsResult {
        products: (*products).clone(),
        status,
        toggle_favorite: on_toggle_favorite,
    }
}
