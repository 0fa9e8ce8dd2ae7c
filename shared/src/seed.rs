//! Embedded mock datasets. These stand in for the `GET` endpoints a real
//! backend would serve (cart, vouchers, menu, order history, profile).

use serde::de::DeserializeOwned;

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::config::AppConfig;
use crate::error::SeedError;
use crate::orders::OrderRecord;
use crate::profile::UserProfile;
use crate::voucher::Voucher;

const CONFIG_JSON: &str = include_str!("../data/config.json");
const CART_JSON: &str = include_str!("../data/cart.json");
const VOUCHERS_JSON: &str = include_str!("../data/vouchers.json");
const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const ORDERS_JSON: &str = include_str!("../data/orders.json");
const PROFILE_JSON: &str = include_str!("../data/profile.json");

pub fn app_config() -> Result<AppConfig, SeedError> {
    decode("config", CONFIG_JSON)
}

pub fn cart_lines() -> Result<Vec<CartLine>, SeedError> {
    decode("cart", CART_JSON)
}

pub fn vouchers() -> Result<Vec<Voucher>, SeedError> {
    decode("vouchers", VOUCHERS_JSON)
}

pub fn products() -> Result<Vec<Product>, SeedError> {
    decode("products", PRODUCTS_JSON)
}

pub fn order_history() -> Result<Vec<OrderRecord>, SeedError> {
    decode("orders", ORDERS_JSON)
}

pub fn user_profile() -> Result<UserProfile, SeedError> {
    decode("profile", PROFILE_JSON)
}

pub fn decode<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Result<T, SeedError> {
    serde_json::from_str(raw).map_err(|source| SeedError::Decode { dataset, source })
}
