use serde::{Deserialize, Serialize};

use crate::voucher::{with_wildcard, WILDCARD_CATEGORY};

/// A dish or drink on the canteen menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in đồng
    pub price: f64,
    pub category: String,
    /// Average rating out of 5
    pub rating: f32,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Wildcard followed by each distinct product category, first-seen order.
pub fn product_categories(products: &[Product]) -> Vec<String> {
    with_wildcard(products.iter().map(|product| product.category.as_str()))
}

pub fn products_in_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| category == WILDCARD_CATEGORY || product.category == category)
        .cloned()
        .collect()
}

pub fn featured_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|product| product.featured).cloned().collect()
}

/// The `limit` best-rated products, highest first. Ties keep menu order.
pub fn popular_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked.truncate(limit);
    ranked
}

pub fn favorite_products(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|product| product.favorite).cloned().collect()
}

pub fn toggle_favorite(products: &[Product], id: &str) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            if product.id == id {
                Product {
                    favorite: !product.favorite,
                    ..product.clone()
                }
            } else {
                product.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, category: &str, rating: f32, favorite: bool) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Món {}", id),
            description: String::new(),
            price: 30000.0,
            category: category.to_string(),
            rating,
            favorite,
            featured: id == "1",
        }
    }

    fn menu() -> Vec<Product> {
        vec![
            product("1", "Cơm", 4.5, false),
            product("2", "Bún - Phở", 4.8, true),
            product("3", "Cơm", 4.2, false),
            product("4", "Đồ uống", 4.8, true),
        ]
    }

    #[test]
    fn test_product_categories() {
        assert_eq!(
            product_categories(&menu()),
            vec!["Tất cả", "Cơm", "Bún - Phở", "Đồ uống"]
        );
    }

    #[test]
    fn test_products_in_category() {
        let menu = menu();
        assert_eq!(products_in_category(&menu, WILDCARD_CATEGORY), menu);
        let rice: Vec<_> = products_in_category(&menu, "Cơm").into_iter().map(|p| p.id).collect();
        assert_eq!(rice, vec!["1", "3"]);
    }

    #[test]
    fn test_popular_products_ranked_with_stable_ties() {
        let ids: Vec<_> = popular_products(&menu(), 3).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "4", "1"]);
    }

    #[test]
    fn test_featured_and_favorites() {
        let menu = menu();
        assert_eq!(featured_products(&menu).len(), 1);
        let favorites: Vec<_> = favorite_products(&menu).into_iter().map(|p| p.id).collect();
        assert_eq!(favorites, vec!["2", "4"]);
    }

    #[test]
    fn test_toggle_favorite_is_involution() {
        let menu = menu();
        let toggled = toggle_favorite(&menu, "1");
        assert!(toggled[0].favorite);
        assert_eq!(toggled[1..], menu[1..]);
        assert_eq!(toggle_favorite(&toggled, "1"), menu);
    }
}
