pub mod use_cart;
pub mod use_countdown;
pub mod use_delayed_task;
pub mod use_products;
pub mod use_seed_data;
pub mod use_toast;
pub mod use_vouchers;
