use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{CartLine, CartTotals};
use crate::validation::PaymentMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Processing => "Đang xử lý",
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Cancelled => "Đã hủy",
        }
    }

    /// CSS modifier used by the status badge
    pub fn css_class(self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// A past (or just placed) order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    /// RFC 3339 on the wire
    pub placed_at: DateTime<FixedOffset>,
    pub items: Vec<OrderItem>,
    /// Grand total including tax
    pub total: f64,
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl OrderRecord {
    /// Build the order submitted from the cart at checkout.
    pub fn from_cart(
        lines: &[CartLine],
        totals: &CartTotals,
        payment_method: PaymentMethod,
        placed_at: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: Self::generate_id(),
            placed_at,
            items: lines
                .iter()
                .map(|line| OrderItem {
                    name: line.name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            total: totals.total,
            status: OrderStatus::Processing,
            payment_method,
        }
    }

    /// Generate an order ID in format: "order::<uuid v4>"
    pub fn generate_id() -> String {
        format!("order::{}", Uuid::new_v4())
    }

    /// Short code shown to the user, e.g. "#1A2B3C4D"
    pub fn short_code(&self) -> String {
        let raw = self.id.rsplit("::").next().unwrap_or(&self.id);
        let code: String = raw.chars().filter(|c| *c != '-').take(8).collect();
        format!("#{}", code.to_uppercase())
    }

    pub fn formatted_date(&self) -> String {
        self.placed_at.format("%d/%m/%Y %H:%M").to_string()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// One-line list of items, e.g. "Cơm gà x1, Trà đào x2"
    pub fn item_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn reorder_message(&self) -> String {
        format!(
            "Đã thêm {} món từ đơn {} vào giỏ hàng!",
            self.item_count(),
            self.short_code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{compute_totals, DEFAULT_TAX_RATE};

    fn placed_at() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-15T11:45:00+07:00").unwrap()
    }

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine {
                id: "1".to_string(),
                name: "Cơm gà".to_string(),
                description: String::new(),
                unit_price: 50000.0,
                quantity: 1,
            },
            CartLine {
                id: "2".to_string(),
                name: "Trà đào".to_string(),
                description: String::new(),
                unit_price: 20000.0,
                quantity: 2,
            },
        ]
    }

    #[test]
    fn test_from_cart_copies_lines_and_total() {
        let lines = lines();
        let totals = compute_totals(&lines, DEFAULT_TAX_RATE);
        let order = OrderRecord::from_cart(&lines, &totals, PaymentMethod::QrCode, placed_at());

        assert!(order.id.starts_with("order::"));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.total, totals.total);
        assert_eq!(order.item_summary(), "Cơm gà x1, Trà đào x2");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(OrderRecord::generate_id(), OrderRecord::generate_id());
    }

    #[test]
    fn test_short_code_and_date() {
        let order = OrderRecord {
            id: "order::1a2b3c4d-0000-4000-8000-000000000000".to_string(),
            placed_at: placed_at(),
            items: vec![],
            total: 0.0,
            status: OrderStatus::Completed,
            payment_method: PaymentMethod::Cash,
        };
        assert_eq!(order.short_code(), "#1A2B3C4D");
        assert_eq!(order.formatted_date(), "15/03/2024 11:45");
        assert_eq!(order.reorder_message(), "Đã thêm 0 món từ đơn #1A2B3C4D vào giỏ hàng!");
    }
}
