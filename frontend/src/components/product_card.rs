use shared::{format_vnd, Product};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_add: Callback<Product>,
    pub on_toggle_favorite: Callback<String>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let on_add_click = {
        let on_add = props.on_add.clone();
        let product = product.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(product.clone()))
    };

    let on_favorite_click = {
        let on_toggle_favorite = props.on_toggle_favorite.clone();
        let id = product.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle_favorite.emit(id.clone()))
    };

    html! {
        <div class="product-card">
            <div class="product-card-header">
                <span class="product-category">{&product.category}</span>
                <button
                    type="button"
                    class={classes!("favorite-btn", product.favorite.then_some("active"))}
                    onclick={on_favorite_click}
                    title={if product.favorite { "Bỏ yêu thích" } else { "Yêu thích" }}
                >
                    {if product.favorite { "♥" } else { "♡" }}
                </button>
            </div>
            <h3 class="product-name">{&product.name}</h3>
            <p class="product-description">{&product.description}</p>
            <div class="product-card-footer">
                <div>
                    <span class="product-price">{format_vnd(product.price)}</span>
                    <span class="product-rating">{format!("★ {:.1}", product.rating)}</span>
                </div>
                <button type="button" class="btn btn-primary add-btn" onclick={on_add_click}>
                    {"+ Thêm"}
                </button>
            </div>
        </div>
    }
}

/// Keyed `ProductCard`s for a product grid.
pub fn product_cards(
    products: Vec<Product>,
    on_add: &Callback<Product>,
    on_toggle_favorite: &Callback<String>,
) -> Html {
    products
        .into_iter()
        .map(|product| {
            let key = product.id.clone();
            html! {
                <ProductCard
                    key={key}
                    product={product}
                    on_add={on_add.clone()}
                    on_toggle_favorite={on_toggle_favorite.clone()}
                />
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Món {}", id),
            description: String::new(),
            price: 35000.0,
            category: "Cơm".to_string(),
            rating: 4.5,
            favorite: false,
            featured: false,
        }
    }

    #[test]
    fn test_product_cards_are_keyed_by_product_id() {
        let html = product_cards(
            vec![product("p-1"), product("p-2"), product("p-3")],
            &Callback::noop(),
            &Callback::noop(),
        );

        let VNode::VList(list) = html else {
            panic!("expected a list of cards");
        };
        let keys: Vec<String> = list
            .iter()
            .map(|node| node.key().map(|key| key.to_string()).unwrap_or_default())
            .collect();
        assert_eq!(keys, vec!["p-1", "p-2", "p-3"]);
    }

    #[test]
    fn test_product_cards_empty() {
        let html = product_cards(Vec::new(), &Callback::noop(), &Callback::noop());
        let VNode::VList(list) = html else {
            panic!("expected a list of cards");
        };
        assert!(list.is_empty());
    }
}
