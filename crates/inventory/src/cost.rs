//! Cost distribution: per-item inventory value, percent share and the top
//! cost drivers (80/20 view).
//!
//! Model:
//! - Select items with a [`SelectionPolicy`] (first-N or canonical name order).
//! - `value = current_stock × unit_cost`, unit cost from a [`UnitCostSource`].
//! - `percent = value / total × 100`, forced to 0 when `total <= 0`.
//! - Top drivers = the 3 largest values, ties kept in selection order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, Ingredient};

/// Number of items reported as top cost drivers.
pub const TOP_DRIVER_COUNT: usize = 3;

/// Default number of items taken by the first-N policy.
pub const DEFAULT_FIRST_N: usize = 5;

/// Brand palette, assigned by position under the first-N policy.
pub const DEFAULT_PALETTE: [&str; 5] = ["#E10600", "#FFC72C", "#00A878", "#0B2747", "#8B5CF6"];

/// How the unit cost of a selected item is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum UnitCostSource {
    /// `base + position × step`, position being the item's index in the
    /// selection. Used when no cost data has been uploaded.
    Ladder { base: f64, step: f64 },
    /// The ingredient's own `unit_cost`, or `fallback` when it has none.
    Record { fallback: f64 },
}

impl Default for UnitCostSource {
    fn default() -> Self {
        UnitCostSource::Ladder {
            base: 10.0,
            step: 2.0,
        }
    }
}

impl UnitCostSource {
    fn unit_cost(&self, position: usize, ingredient: &Ingredient) -> f64 {
        match self {
            UnitCostSource::Ladder { base, step } => base + position as f64 * step,
            UnitCostSource::Record { fallback } => ingredient.unit_cost.unwrap_or(*fallback),
        }
    }

    fn validate(&self) -> DomainResult<()> {
        let finite = match self {
            UnitCostSource::Ladder { base, step } => base.is_finite() && step.is_finite(),
            UnitCostSource::Record { fallback } => fallback.is_finite(),
        };
        if !finite {
            return Err(DomainError::invalid_config("unit cost parameters must be finite"));
        }
        Ok(())
    }
}

/// A canonical item name bound to its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEntry {
    pub name: String,
    pub color: String,
}

impl CanonicalEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Default canonical list: the signature braised items and staples.
pub fn default_canonical() -> Vec<CanonicalEntry> {
    ["Braised Beef", "Braised Chicken", "Braised Pork", "Egg", "Rice"]
        .into_iter()
        .zip(DEFAULT_PALETTE)
        .map(|(name, color)| CanonicalEntry::new(name, color))
        .collect()
}

/// Which ingredients enter the distribution, and which color each gets.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionPolicy {
    /// The first `limit` ingredients in input order; colors cycle through
    /// `palette` by position.
    FirstN { limit: usize, palette: Vec<String> },
    /// Ingredients whose name matches an entry, in list order. Names not in
    /// the list are excluded; for a repeated name the first ingredient wins.
    CanonicalOrder { entries: Vec<CanonicalEntry> },
}

impl SelectionPolicy {
    fn select<'a>(&self, ingredients: &'a [Ingredient]) -> Vec<(&'a Ingredient, String)> {
        match self {
            SelectionPolicy::FirstN { limit, palette } => ingredients
                .iter()
                .take(*limit)
                .enumerate()
                .map(|(i, ing)| (ing, palette[i % palette.len()].clone()))
                .collect(),
            SelectionPolicy::CanonicalOrder { entries } => entries
                .iter()
                .filter_map(|entry| {
                    ingredients
                        .iter()
                        .find(|ing| ing.name == entry.name)
                        .map(|ing| (ing, entry.color.clone()))
                })
                .collect(),
        }
    }
}

/// Validated cost engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CostPolicy {
    selection: SelectionPolicy,
    unit_cost: UnitCostSource,
}

impl Default for CostPolicy {
    fn default() -> Self {
        Self::first_n(DEFAULT_FIRST_N)
    }
}

impl CostPolicy {
    pub fn first_n(limit: usize) -> Self {
        Self {
            selection: SelectionPolicy::FirstN {
                limit,
                palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            },
            unit_cost: UnitCostSource::default(),
        }
    }

    pub fn canonical(entries: Vec<CanonicalEntry>) -> DomainResult<Self> {
        Self::new(
            SelectionPolicy::CanonicalOrder { entries },
            UnitCostSource::default(),
        )
    }

    pub fn new(selection: SelectionPolicy, unit_cost: UnitCostSource) -> DomainResult<Self> {
        match &selection {
            SelectionPolicy::FirstN { palette, .. } => {
                if palette.is_empty() {
                    return Err(DomainError::invalid_config("first_n palette cannot be empty"));
                }
            }
            SelectionPolicy::CanonicalOrder { entries } => {
                if entries.is_empty() {
                    return Err(DomainError::invalid_config("canonical list cannot be empty"));
                }
                let mut seen = HashSet::new();
                for entry in entries {
                    if !seen.insert(entry.name.as_str()) {
                        return Err(DomainError::invalid_config(format!(
                            "canonical name listed twice: {}",
                            entry.name
                        )));
                    }
                }
            }
        }
        unit_cost.validate()?;
        Ok(Self {
            selection,
            unit_cost,
        })
    }

    pub fn with_unit_cost(mut self, unit_cost: UnitCostSource) -> DomainResult<Self> {
        unit_cost.validate()?;
        self.unit_cost = unit_cost;
        Ok(self)
    }

    pub fn selection(&self) -> &SelectionPolicy {
        &self.selection
    }
}

/// Policy name as written in configuration.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    FirstN,
    CanonicalOrder,
}

/// `[cost]` configuration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    pub policy: PolicyKind,
    pub limit: usize,
    pub palette: Vec<String>,
    pub canonical: Vec<CanonicalEntry>,
    pub unit_cost: UnitCostSource,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::FirstN,
            limit: DEFAULT_FIRST_N,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            canonical: default_canonical(),
            unit_cost: UnitCostSource::default(),
        }
    }
}

impl TryFrom<&CostConfig> for CostPolicy {
    type Error = DomainError;

    fn try_from(config: &CostConfig) -> Result<Self, Self::Error> {
        let selection = match config.policy {
            PolicyKind::FirstN => SelectionPolicy::FirstN {
                limit: config.limit,
                palette: config.palette.clone(),
            },
            PolicyKind::CanonicalOrder => SelectionPolicy::CanonicalOrder {
                entries: config.canonical.clone(),
            },
        };
        CostPolicy::new(selection, config.unit_cost.clone())
    }
}

/// One slice of the distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostItem {
    pub name: String,
    pub unit_cost: f64,
    /// `NaN` when stock or unit cost is not a number.
    pub value: f64,
    pub percent_share: f64,
    pub color: String,
}

impl CostItem {
    /// Percent share rounded for display, e.g. `"57.1%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent_share)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostDistribution {
    pub items: Vec<CostItem>,
    /// Sum over items with a finite value.
    pub total_value: f64,
    pub top_drivers: Vec<CostItem>,
}

impl CostDistribution {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_value: 0.0,
            top_drivers: Vec::new(),
        }
    }

    pub fn has_invalid_numbers(&self) -> bool {
        self.items.iter().any(|i| i.value.is_nan())
    }
}

pub fn distribute(ingredients: Option<&[Ingredient]>, policy: &CostPolicy) -> CostDistribution {
    let Some(ingredients) = ingredients else {
        return CostDistribution::empty();
    };

    let mut items: Vec<CostItem> = policy
        .selection
        .select(ingredients)
        .into_iter()
        .enumerate()
        .map(|(position, (ing, color))| {
            let unit_cost = policy.unit_cost.unit_cost(position, ing);
            CostItem {
                name: ing.name.clone(),
                unit_cost,
                value: item_value(ing.current_stock, unit_cost),
                percent_share: 0.0,
                color,
            }
        })
        .collect();

    let total_value: f64 = items
        .iter()
        .map(|i| i.value)
        .filter(|v| v.is_finite())
        .sum();

    for item in &mut items {
        item.percent_share = percent_share(item.value, total_value);
    }

    let top_drivers = top_drivers(&items, TOP_DRIVER_COUNT);

    CostDistribution {
        items,
        total_value,
        top_drivers,
    }
}

fn item_value(stock: f64, unit_cost: f64) -> f64 {
    let value = stock * unit_cost;
    if value.is_finite() { value } else { f64::NAN }
}

fn percent_share(value: f64, total: f64) -> f64 {
    // Checked first: a zero total forces 0 even for NaN items.
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }
    if value.is_nan() {
        return f64::NAN;
    }
    value / total * 100.0
}

/// Largest values first; `sort_by` is stable so equal values keep selection
/// order. Items without a finite value are never ranked.
fn top_drivers(items: &[CostItem], n: usize) -> Vec<CostItem> {
    let mut ranked: Vec<&CostItem> = items.iter().filter(|i| i.value.is_finite()).collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.into_iter().take(n).cloned().collect()
}
