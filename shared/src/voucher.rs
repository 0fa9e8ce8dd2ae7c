use serde::{Deserialize, Serialize};

/// Category option meaning "no category filter"
pub const WILDCARD_CATEGORY: &str = "Tất cả";

/// A discount or promotion the user can save for later
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human-facing discount label, e.g. "-20%" or "Freeship"
    pub display_value: String,
    #[serde(default)]
    pub expiry: Option<String>,
    /// Minimum order amount in đồng
    #[serde(default)]
    pub min_order: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub saved: bool,
}

/// The available/saved partition of the voucher list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VoucherTab {
    #[default]
    Available,
    Saved,
}

impl VoucherTab {
    pub const ALL: [VoucherTab; 2] = [VoucherTab::Available, VoucherTab::Saved];

    pub fn label(self) -> &'static str {
        match self {
            VoucherTab::Available => "Có sẵn",
            VoucherTab::Saved => "Đã lưu",
        }
    }

    /// Available holds unsaved vouchers, Saved holds saved ones.
    pub fn admits(self, voucher: &Voucher) -> bool {
        match self {
            VoucherTab::Available => !voucher.saved,
            VoucherTab::Saved => voucher.saved,
        }
    }
}

impl Voucher {
    /// Case-insensitive substring match on title or description.
    /// An empty term matches everything.
    pub fn matches_search(&self, search_term: &str) -> bool {
        if search_term.is_empty() {
            return true;
        }
        let needle = search_term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == WILDCARD_CATEGORY || self.category.as_deref() == Some(category)
    }
}

/// Vouchers that satisfy the tab, search and category predicates,
/// in their original order.
pub fn filter_vouchers(
    vouchers: &[Voucher],
    tab: VoucherTab,
    search_term: &str,
    category: &str,
) -> Vec<Voucher> {
    vouchers
        .iter()
        .filter(|voucher| {
            tab.admits(voucher)
                && voucher.matches_search(search_term)
                && voucher.matches_category(category)
        })
        .cloned()
        .collect()
}

/// Number of vouchers shown under `tab` before any search/category filter
pub fn tab_count(vouchers: &[Voucher], tab: VoucherTab) -> usize {
    vouchers.iter().filter(|voucher| tab.admits(voucher)).count()
}

/// Wildcard followed by each distinct voucher category, first-seen order.
pub fn category_options(vouchers: &[Voucher]) -> Vec<String> {
    with_wildcard(vouchers.iter().filter_map(|voucher| voucher.category.as_deref()))
}

/// Flip the saved flag of the voucher with `id`; every other voucher is
/// carried over unchanged.
pub fn toggle_saved(vouchers: &[Voucher], id: &str) -> Vec<Voucher> {
    vouchers
        .iter()
        .map(|voucher| {
            if voucher.id == id {
                Voucher {
                    saved: !voucher.saved,
                    ..voucher.clone()
                }
            } else {
                voucher.clone()
            }
        })
        .collect()
}

pub(crate) fn with_wildcard<'a>(categories: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options = vec![WILDCARD_CATEGORY.to_string()];
    for category in categories {
        if !options.iter().any(|existing| existing == category) {
            options.push(category.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voucher(id: &str, title: &str, category: Option<&str>, saved: bool) -> Voucher {
        Voucher {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("Mô tả cho {}", title),
            display_value: "-10%".to_string(),
            expiry: None,
            min_order: None,
            category: category.map(str::to_string),
            saved,
        }
    }

    fn sample() -> Vec<Voucher> {
        vec![
            voucher("1", "Giảm 20%", Some("Thời trang"), false),
            voucher("2", "Freeship", Some("Giao hàng"), true),
            voucher("3", "Combo trưa", Some("Đồ ăn"), false),
            voucher("4", "Giảm 50k", Some("Đồ ăn"), true),
            voucher("5", "Quà tặng", None, false),
        ]
    }

    #[test]
    fn test_available_tab_scenario() {
        let vouchers = vec![
            voucher("1", "Giảm 20%", Some("Thời trang"), false),
            voucher("2", "Freeship", Some("Giao hàng"), true),
        ];
        let result = filter_vouchers(&vouchers, VoucherTab::Available, "", WILDCARD_CATEGORY);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Giảm 20%");
    }

    #[test]
    fn test_results_respect_tab() {
        let vouchers = sample();
        for tab in VoucherTab::ALL {
            let result = filter_vouchers(&vouchers, tab, "", WILDCARD_CATEGORY);
            assert!(result.iter().all(|voucher| tab.admits(voucher)));
            assert_eq!(result.len(), tab_count(&vouchers, tab));
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let ids: Vec<_> = filter_vouchers(&sample(), VoucherTab::Available, "", WILDCARD_CATEGORY)
            .into_iter()
            .map(|voucher| voucher.id)
            .collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title_and_description() {
        let vouchers = sample();
        let by_title = filter_vouchers(&vouchers, VoucherTab::Saved, "FREESHIP", WILDCARD_CATEGORY);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "2");

        let by_description = filter_vouchers(&vouchers, VoucherTab::Available, "mô tả cho combo", WILDCARD_CATEGORY);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "3");

        assert!(filter_vouchers(&vouchers, VoucherTab::Available, "không có", WILDCARD_CATEGORY).is_empty());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let vouchers = sample();
        let result = filter_vouchers(&vouchers, VoucherTab::Saved, "", "Đồ ăn");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "4");

        // Vouchers without a category only show under the wildcard
        assert_eq!(filter_vouchers(&vouchers, VoucherTab::Available, "Quà", WILDCARD_CATEGORY).len(), 1);
        assert!(filter_vouchers(&vouchers, VoucherTab::Available, "Quà", "Đồ ăn").is_empty());

        // No partial matches on category names
        assert!(filter_vouchers(&vouchers, VoucherTab::Saved, "", "Đồ").is_empty());
    }

    #[test]
    fn test_wildcard_filter_is_idempotent() {
        let vouchers = sample();
        let once = filter_vouchers(&vouchers, VoucherTab::Available, "", WILDCARD_CATEGORY);
        let twice = filter_vouchers(&once, VoucherTab::Available, "", WILDCARD_CATEGORY);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let vouchers = sample();
        let before = vouchers.clone();
        let _ = filter_vouchers(&vouchers, VoucherTab::Saved, "giảm", "Đồ ăn");
        assert_eq!(vouchers, before);
    }

    #[test]
    fn test_category_options_deduplicated_with_wildcard_first() {
        assert_eq!(
            category_options(&sample()),
            vec!["Tất cả", "Thời trang", "Giao hàng", "Đồ ăn"]
        );
        assert_eq!(category_options(&[]), vec!["Tất cả"]);
    }

    #[test]
    fn test_toggle_saved_flips_only_target() {
        let vouchers = sample();
        let toggled = toggle_saved(&vouchers, "3");
        assert!(toggled[2].saved);
        for (before, after) in vouchers.iter().zip(&toggled).filter(|(v, _)| v.id != "3") {
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_toggle_saved_is_involution() {
        let vouchers = sample();
        for voucher in &vouchers {
            let restored = toggle_saved(&toggle_saved(&vouchers, &voucher.id), &voucher.id);
            assert_eq!(restored, vouchers);
        }
    }

    #[test]
    fn test_toggle_moves_voucher_between_tabs() {
        let toggled = toggle_saved(&sample(), "1");
        let saved = filter_vouchers(&toggled, VoucherTab::Saved, "", WILDCARD_CATEGORY);
        assert!(saved.iter().any(|voucher| voucher.id == "1"));
    }
}
