//! Domain types and pure state transitions for the canteen ordering app.
//!
//! Everything here is UI independent: the frontend keeps these values in
//! component state and replaces them with the results of these functions.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod orders;
pub mod profile;
pub mod seed;
pub mod timer;
pub mod validation;
pub mod voucher;

pub use cart::{compute_totals, item_count, remove_line, update_quantity, CartLine, CartTotals};
pub use catalog::Product;
pub use config::{AppConfig, LogLevel};
pub use error::SeedError;
pub use money::format_vnd;
pub use orders::{OrderItem, OrderRecord, OrderStatus};
pub use profile::{Language, Settings, UserProfile};
pub use timer::{CountdownTimer, TickOutcome};
pub use validation::{BankDetails, FieldErrors, PaymentMethod};
pub use voucher::{filter_vouchers, toggle_saved, Voucher, VoucherTab, WILDCARD_CATEGORY};
