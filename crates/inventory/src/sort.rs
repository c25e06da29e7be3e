//! Inventory table ordering.
//!
//! The comparator is a proper three-way comparison and the sort is stable:
//! rows with equal keys keep their input order in both directions. This
//! replaces an older "greater → 1, else → -1" comparator that reported equal
//! keys as less-than and so gave no ordering guarantee for ties.
//!
//! Numbers compare with `f64::total_cmp`, which places the not-a-number marker
//! after every number in ascending order. Text compares lexicographically.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, Ingredient};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    IngredientId,
    #[default]
    IngredientName,
    Unit,
    CurrentStock,
    ReorderPoint,
    SafetyStock,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::IngredientId,
        SortField::IngredientName,
        SortField::Unit,
        SortField::CurrentStock,
        SortField::ReorderPoint,
        SortField::SafetyStock,
        SortField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::IngredientId => "ingredient_id",
            SortField::IngredientName => "ingredient_name",
            SortField::Unit => "unit",
            SortField::CurrentStock => "current_stock",
            SortField::ReorderPoint => "reorder_point",
            SortField::SafetyStock => "safety_stock",
            SortField::Status => "status",
        }
    }

    /// Ascending three-way comparison on this column.
    pub fn compare(&self, a: &Ingredient, b: &Ingredient) -> Ordering {
        match self {
            SortField::IngredientId => a.id.as_str().cmp(b.id.as_str()),
            SortField::IngredientName => a.name.cmp(&b.name),
            SortField::Unit => a.unit.cmp(&b.unit),
            SortField::CurrentStock => a.current_stock.total_cmp(&b.current_stock),
            SortField::ReorderPoint => a.reorder_point.total_cmp(&b.reorder_point),
            SortField::SafetyStock => a.safety_stock.total_cmp(&b.safety_stock),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == s.trim())
            .ok_or_else(|| DomainError::unknown_field(s.trim()))
    }
}

impl core::fmt::Display for SortField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::validation(format!(
                "sort direction must be asc or desc, got {other:?}"
            ))),
        }
    }
}

/// Active column and direction of the inventory table.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips direction, another column starts
    /// ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &Ingredient, b: &Ingredient) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Sorted copy of the ingredient rows; the input is left untouched.
pub fn sort_rows(ingredients: Option<&[Ingredient]>, state: SortState) -> Vec<Ingredient> {
    let mut rows = ingredients.map(<[Ingredient]>::to_vec).unwrap_or_default();
    rows.sort_by(|a, b| state.compare(a, b));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::StockStatus;
    use proptest::prelude::*;

    fn row(id: &str, name: &str, stock: f64) -> Ingredient {
        Ingredient::new(id, name, StockStatus::Adequate).with_stock(stock)
    }

    fn ids(rows: &[Ingredient]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn numeric_column_sorts_both_ways() {
        let items = vec![row("a", "A", 3.0), row("b", "B", 1.0), row("c", "C", 2.0)];

        let asc = sort_rows(
            Some(items.as_slice()),
            SortState::new(SortField::CurrentStock, SortDirection::Asc),
        );
        let stocks: Vec<f64> = asc.iter().map(|r| r.current_stock).collect();
        assert_eq!(stocks, vec![1.0, 2.0, 3.0]);

        let desc = sort_rows(
            Some(items.as_slice()),
            SortState::new(SortField::CurrentStock, SortDirection::Desc),
        );
        let stocks: Vec<f64> = desc.iter().map(|r| r.current_stock).collect();
        assert_eq!(stocks, vec![3.0, 2.0, 1.0]);

        // Input untouched.
        assert_eq!(ids(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn text_column_is_lexicographic() {
        let items = vec![
            row("1", "Rice", 0.0),
            row("2", "Egg", 0.0),
            row("3", "Braised Pork", 0.0),
        ];
        let sorted = sort_rows(Some(items.as_slice()), SortState::default());
        assert_eq!(ids(&sorted), vec!["3", "2", "1"]);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let items = vec![
            row("first", "X", 5.0),
            row("low", "Y", 1.0),
            row("second", "Z", 5.0),
            row("third", "W", 5.0),
        ];

        let asc = sort_rows(
            Some(items.as_slice()),
            SortState::new(SortField::CurrentStock, SortDirection::Asc),
        );
        assert_eq!(ids(&asc), vec!["low", "first", "second", "third"]);

        let desc = sort_rows(
            Some(items.as_slice()),
            SortState::new(SortField::CurrentStock, SortDirection::Desc),
        );
        assert_eq!(ids(&desc), vec!["first", "second", "third", "low"]);
    }

    #[test]
    fn not_a_number_sorts_last_ascending() {
        let items = vec![row("nan", "N", f64::NAN), row("one", "O", 1.0)];
        let asc = sort_rows(
            Some(items.as_slice()),
            SortState::new(SortField::CurrentStock, SortDirection::Asc),
        );
        assert_eq!(ids(&asc), vec!["one", "nan"]);
    }

    #[test]
    fn toggle_flips_active_column_and_resets_others() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::IngredientName);
        assert_eq!(state.direction, SortDirection::Asc);

        let state = state.toggle(SortField::IngredientName);
        assert_eq!(state.direction, SortDirection::Desc);

        let state = state.toggle(SortField::CurrentStock);
        assert_eq!(state, SortState::new(SortField::CurrentStock, SortDirection::Asc));
    }

    #[test]
    fn parses_field_and_direction_names() {
        assert_eq!("current_stock".parse::<SortField>().unwrap(), SortField::CurrentStock);
        assert_eq!(" DESC ".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!(matches!(
            "price".parse::<SortField>(),
            Err(DomainError::UnknownField(name)) if name == "price"
        ));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn missing_collection_sorts_to_empty() {
        assert!(sort_rows(None, SortState::default()).is_empty());
    }

    proptest! {
        /// Property: ascending output is an ordered permutation of the input,
        /// and rows with equal stock keep their input order.
        #[test]
        fn ascending_output_is_ordered_and_stable(stocks in prop::collection::vec(0i32..5, 0..50)) {
            let items: Vec<Ingredient> = stocks
                .iter()
                .enumerate()
                .map(|(i, s)| row(&format!("r{i}"), "n", f64::from(*s)))
                .collect();
            let position = |r: &Ingredient| r.id.as_str()[1..].parse::<usize>().unwrap();

            let sorted = sort_rows(
                Some(items.as_slice()),
                SortState::new(SortField::CurrentStock, SortDirection::Asc),
            );

            let mut seen: Vec<usize> = sorted.iter().map(position).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..items.len()).collect::<Vec<_>>());

            for pair in sorted.windows(2) {
                prop_assert!(pair[0].current_stock <= pair[1].current_stock);
                if pair[0].current_stock == pair[1].current_stock {
                    prop_assert!(position(&pair[0]) < position(&pair[1]));
                }
            }
        }
    }
}
