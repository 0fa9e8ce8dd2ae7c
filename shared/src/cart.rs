use serde::{Deserialize, Serialize};

/// Tax applied on top of the cart subtotal.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// One cart entry: a menu item and how many of it were ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in đồng (non-negative)
    pub unit_price: f64,
    /// Always at least 1 while the line is in the cart
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Derived money figures for the cart summary
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Compute subtotal, tax and grand total for the given lines.
///
/// An empty cart yields all zeros.
pub fn compute_totals(lines: &[CartLine], tax_rate: f64) -> CartTotals {
    let subtotal: f64 = lines.iter().map(CartLine::line_total).sum();
    let tax = subtotal * tax_rate;

    CartTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Replace the quantity of the line with `id`.
///
/// Quantities below 1 are rejected and the lines come back unchanged;
/// removing a line goes through [`remove_line`] instead.
pub fn update_quantity(lines: &[CartLine], id: &str, quantity: u32) -> Vec<CartLine> {
    if quantity < 1 {
        return lines.to_vec();
    }

    lines
        .iter()
        .map(|line| {
            if line.id == id {
                CartLine {
                    quantity,
                    ..line.clone()
                }
            } else {
                line.clone()
            }
        })
        .collect()
}

pub fn remove_line(lines: &[CartLine], id: &str) -> Vec<CartLine> {
    lines.iter().filter(|line| line.id != id).cloned().collect()
}

/// Total number of units across all lines
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, unit_price: f64, quantity: u32) -> CartLine {
        CartLine {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            unit_price,
            quantity,
        }
    }

    fn sample_cart() -> Vec<CartLine> {
        vec![
            line("1", 50000.0, 1),
            line("2", 35000.0, 1),
            line("3", 40000.0, 2),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_compute_totals_sample_cart() {
        let totals = compute_totals(&sample_cart(), DEFAULT_TAX_RATE);
        assert!(approx(totals.subtotal, 165000.0));
        assert!(approx(totals.tax, 13200.0));
        assert!(approx(totals.total, 178200.0));
    }

    #[test]
    fn test_compute_totals_empty_cart() {
        let totals = compute_totals(&[], DEFAULT_TAX_RATE);
        assert_eq!(totals, CartTotals::default());
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.total, 0.0);
    }

    #[test]
    fn test_totals_relationship_holds() {
        let carts = vec![
            vec![line("a", 12500.0, 3)],
            vec![line("a", 0.0, 1), line("b", 99999.0, 7)],
            sample_cart(),
            vec![line("a", 15000.5, 11), line("b", 1.25, 2), line("c", 42000.0, 1)],
        ];

        for cart in carts {
            let totals = compute_totals(&cart, DEFAULT_TAX_RATE);
            assert!(approx(totals.total, totals.subtotal + totals.tax));
            assert!(approx(totals.tax, totals.subtotal * 0.08));
        }
    }

    #[test]
    fn test_update_quantity_replaces_only_target() {
        let updated = update_quantity(&sample_cart(), "2", 4);
        assert_eq!(updated[0].quantity, 1);
        assert_eq!(updated[1].quantity, 4);
        assert_eq!(updated[2].quantity, 2);
    }

    #[test]
    fn test_update_quantity_below_one_is_noop() {
        let cart = sample_cart();
        assert_eq!(update_quantity(&cart, "1", 0), cart);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = sample_cart();
        assert_eq!(update_quantity(&cart, "missing", 3), cart);
    }

    #[test]
    fn test_remove_line() {
        let remaining = remove_line(&sample_cart(), "1");
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|line| line.id != "1"));

        let totals = compute_totals(&remaining, DEFAULT_TAX_RATE);
        assert!(approx(totals.subtotal, 115000.0));
    }

    #[test]
    fn test_item_count() {
        assert_eq!(item_count(&sample_cart()), 4);
        assert_eq!(item_count(&[]), 0);
    }
}
