use serde::Serialize;

use pantry_core::{Ingredient, IngredientId, StockStatus};

/// Maximum entries per alert category.
pub const ALERT_LIMIT: usize = 5;

/// One line of an alert list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEntry {
    pub ingredient_id: IngredientId,
    pub ingredient_name: String,
    pub unit: String,
    pub current_stock: f64,
    pub reorder_point: f64,
    pub status: StockStatus,
}

impl From<&Ingredient> for AlertEntry {
    fn from(ing: &Ingredient) -> Self {
        Self {
            ingredient_id: ing.id.clone(),
            ingredient_name: ing.name.clone(),
            unit: ing.unit.clone(),
            current_stock: ing.current_stock,
            reorder_point: ing.reorder_point,
            status: ing.status.clone(),
        }
    }
}

/// Alert panel contents.
///
/// `NoAlerts` is a valid terminal state: the inventory was inspected and
/// nothing needs attention.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Alerts {
    NoAlerts,
    Active {
        low_stock: Vec<AlertEntry>,
        overstocked: Vec<AlertEntry>,
    },
}

impl Alerts {
    pub fn low_stock(&self) -> &[AlertEntry] {
        match self {
            Alerts::NoAlerts => &[],
            Alerts::Active { low_stock, .. } => low_stock,
        }
    }

    pub fn overstocked(&self) -> &[AlertEntry] {
        match self {
            Alerts::NoAlerts => &[],
            Alerts::Active { overstocked, .. } => overstocked,
        }
    }
}

/// Partition into low-stock and overstocked lists, each capped at
/// [`ALERT_LIMIT`] entries in input order.
pub fn select(ingredients: Option<&[Ingredient]>) -> Alerts {
    let ingredients = ingredients.unwrap_or(&[]);

    let low_stock: Vec<AlertEntry> = ingredients
        .iter()
        .filter(|i| i.status.is_low_stock())
        .take(ALERT_LIMIT)
        .map(AlertEntry::from)
        .collect();

    let overstocked: Vec<AlertEntry> = ingredients
        .iter()
        .filter(|i| i.status.is_overstocked())
        .take(ALERT_LIMIT)
        .map(AlertEntry::from)
        .collect();

    if low_stock.is_empty() && overstocked.is_empty() {
        return Alerts::NoAlerts;
    }

    Alerts::Active {
        low_stock,
        overstocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ing(id: &str, status: StockStatus) -> Ingredient {
        Ingredient::new(id, id, status)
    }

    #[test]
    fn all_adequate_signals_no_alerts() {
        let items = vec![
            ing("rice", StockStatus::Adequate),
            ing("tofu", StockStatus::Unrecognized("seasonal".into())),
        ];
        assert_eq!(select(Some(items.as_slice())), Alerts::NoAlerts);
        assert_eq!(select(None), Alerts::NoAlerts);
    }

    #[test]
    fn keeps_input_order_and_truncates() {
        let mut items: Vec<Ingredient> = (0..8)
            .map(|i| ing(&format!("low{i}"), StockStatus::LowStock))
            .collect();
        items.insert(2, ing("egg", StockStatus::Critical));
        items.push(ing("rice", StockStatus::Overstocked));

        let alerts = select(Some(items.as_slice()));
        let ids: Vec<&str> = alerts
            .low_stock()
            .iter()
            .map(|a| a.ingredient_id.as_str())
            .collect();

        assert_eq!(ids, vec!["low0", "low1", "egg", "low2", "low3"]);
        assert_eq!(alerts.overstocked().len(), 1);
        assert_eq!(alerts.overstocked()[0].ingredient_id.as_str(), "rice");
    }

    #[test]
    fn serializes_with_state_tag() {
        assert_eq!(
            serde_json::to_value(Alerts::NoAlerts).unwrap(),
            json!({"state": "no_alerts"})
        );

        let items = vec![ing("rice", StockStatus::Overstocked)];
        let v = serde_json::to_value(select(Some(items.as_slice()))).unwrap();
        assert_eq!(v["state"], json!("active"));
        assert_eq!(v["overstocked"][0]["status"], json!("overstocked"));
        assert_eq!(v["low_stock"], json!([]));
    }

    fn status_strategy() -> impl Strategy<Value = StockStatus> {
        prop_oneof![
            Just(StockStatus::Adequate),
            Just(StockStatus::LowStock),
            Just(StockStatus::Critical),
            Just(StockStatus::Overstocked),
        ]
    }

    proptest! {
        /// Property: neither list ever exceeds the cap, whatever the input size.
        #[test]
        fn never_more_than_limit(statuses in prop::collection::vec(status_strategy(), 0..200)) {
            let items: Vec<Ingredient> = statuses
                .into_iter()
                .enumerate()
                .map(|(i, s)| ing(&format!("i{i}"), s))
                .collect();

            let alerts = select(Some(items.as_slice()));
            prop_assert!(alerts.low_stock().len() <= ALERT_LIMIT);
            prop_assert!(alerts.overstocked().len() <= ALERT_LIMIT);
        }
    }
}
