use chrono::{DateTime, FixedOffset, Local};
use shared::{
    seed, AppConfig, CartLine, CartTotals, OrderRecord, PaymentMethod, Product, SeedError,
    UserProfile, Voucher,
};

use super::logging::Logger;

const COMPONENT: &str = "mock-api";

/// Stand-in for the backend. Reads come from the embedded seed data and
/// writes only log what a real request would carry.
#[derive(Clone, PartialEq)]
pub struct MockApi {
    config: AppConfig,
}

/// Read the embedded configuration, falling back to defaults if it does not decode
pub fn load_config() -> AppConfig {
    seed::app_config().unwrap_or_else(|e| {
        Logger::warn_with_component(COMPONENT, &format!("Falling back to default config: {}", e));
        AppConfig::default()
    })
}

impl MockApi {
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// GET current cart
    pub fn get_cart(&self) -> Result<Vec<CartLine>, SeedError> {
        seed::cart_lines()
    }

    /// GET vouchers
    pub fn get_vouchers(&self) -> Result<Vec<Voucher>, SeedError> {
        seed::vouchers()
    }

    /// GET menu
    pub fn get_products(&self) -> Result<Vec<Product>, SeedError> {
        seed::products()
    }

    /// GET order history, newest first
    pub fn get_order_history(&self) -> Result<Vec<OrderRecord>, SeedError> {
        let mut orders = seed::order_history()?;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }

    /// GET user profile
    pub fn get_profile(&self) -> Result<UserProfile, SeedError> {
        seed::user_profile()
    }

    /// PATCH voucher.saved
    pub fn set_voucher_saved(&self, voucher_id: &str, saved: bool) {
        Logger::info_with_component(
            COMPONENT,
            &format!("PATCH /vouchers/{} saved={}", voucher_id, saved),
        );
    }

    /// POST order
    pub fn place_order(
        &self,
        lines: &[CartLine],
        totals: &CartTotals,
        payment_method: PaymentMethod,
    ) -> OrderRecord {
        self.place_order_at(lines, totals, payment_method, Local::now().into())
    }

    fn place_order_at(
        &self,
        lines: &[CartLine],
        totals: &CartTotals,
        payment_method: PaymentMethod,
        placed_at: DateTime<FixedOffset>,
    ) -> OrderRecord {
        let order = OrderRecord::from_cart(lines, totals, payment_method, placed_at);
        Logger::info_with_component(
            COMPONENT,
            &format!(
                "POST /orders id={} items={} total={}",
                order.id,
                order.item_count(),
                order.total
            ),
        );
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{compute_totals, LogLevel, OrderStatus};

    fn quiet_api() -> MockApi {
        // Keep the console macros out of native test runs
        Logger::init(LogLevel::Error);
        MockApi::with_config(AppConfig::default())
    }

    #[test]
    fn test_load_config_reads_embedded_file() {
        Logger::init(LogLevel::Error);
        assert_eq!(load_config(), AppConfig::default());
    }

    #[test]
    fn test_order_history_newest_first() {
        let orders = quiet_api().get_order_history().unwrap();
        assert!(orders.windows(2).all(|pair| pair[0].placed_at >= pair[1].placed_at));
    }

    #[test]
    fn test_place_order_uses_cart_totals() {
        let api = quiet_api();
        let lines = api.get_cart().unwrap();
        let totals = compute_totals(&lines, api.config().tax_rate);
        let placed_at = DateTime::parse_from_rfc3339("2024-11-21T12:00:00+07:00").unwrap();

        let order = api.place_order_at(&lines, &totals, PaymentMethod::Cash, placed_at);
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items.len(), lines.len());
        assert_eq!(order.total, totals.total);
        assert_eq!(order.placed_at, placed_at);
    }
}
