use serde::Serialize;

use pantry_core::Ingredient;

/// Inventory health counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total: usize,
    /// `low_stock` and `critical` together.
    pub low_stock_count: usize,
    pub overstocked_count: usize,
    /// Everything else, including unrecognized statuses.
    pub adequate_count: usize,
    pub low_stock_percentage: f64,
}

impl KpiSummary {
    pub fn empty() -> Self {
        Self {
            total: 0,
            low_stock_count: 0,
            overstocked_count: 0,
            adequate_count: 0,
            low_stock_percentage: 0.0,
        }
    }
}

/// Count ingredients per status.
///
/// `adequate_count` is derived by subtraction, so an unrecognized status lands
/// in the adequate bucket instead of being reported as an error.
pub fn summarize(ingredients: Option<&[Ingredient]>) -> KpiSummary {
    let Some(ingredients) = ingredients else {
        return KpiSummary::empty();
    };

    let total = ingredients.len();
    let low_stock_count = ingredients.iter().filter(|i| i.status.is_low_stock()).count();
    let overstocked_count = ingredients.iter().filter(|i| i.status.is_overstocked()).count();

    let low_stock_percentage = if total > 0 {
        low_stock_count as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    KpiSummary {
        total,
        low_stock_count,
        overstocked_count,
        adequate_count: total - low_stock_count - overstocked_count,
        low_stock_percentage,
    }
}
