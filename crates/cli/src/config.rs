//! `pantry.toml` loading.
//!
//! Every table and key is optional; an empty file (or no file) yields the
//! defaults below.
//!
//! ```toml
//! [presentation]
//! language = "en"       # en | zh
//! theme = "light"       # light | dark
//!
//! [cost]
//! policy = "first_n"    # first_n | canonical_order
//! limit = 5
//!
//! [cost.unit_cost]
//! source = "ladder"     # ladder | record
//! base = 10.0
//! step = 2.0
//!
//! [table]
//! sort_field = "ingredient_name"
//! sort_direction = "asc"
//!
//! [forecast]
//! cards = 3
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use pantry_core::DomainResult;
use pantry_inventory::cost::CostConfig;
use pantry_inventory::forecast::DEFAULT_FORECAST_CARDS;
use pantry_inventory::{CostPolicy, DashboardOptions, SortDirection, SortField, SortState};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Language and theme for the presentation layer.
///
/// Passed alongside the derived view-model; the analytics crates never read it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationSettings {
    pub language: Language,
    pub theme: Theme,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub cards: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            cards: DEFAULT_FORECAST_CARDS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub presentation: PresentationSettings,
    pub cost: CostConfig,
    pub table: TableConfig,
    pub forecast: ForecastConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(raw).context("failed to parse TOML")?;
        // Surface policy errors at load time rather than on first render.
        config.dashboard_options()?;
        Ok(config)
    }

    /// Command-line flags win over the file.
    pub fn with_sort_overrides(
        mut self,
        field: Option<SortField>,
        direction: Option<SortDirection>,
    ) -> Self {
        if let Some(field) = field {
            self.table.sort_field = field;
        }
        if let Some(direction) = direction {
            self.table.sort_direction = direction;
        }
        self
    }

    pub fn dashboard_options(&self) -> DomainResult<DashboardOptions> {
        Ok(DashboardOptions {
            cost: CostPolicy::try_from(&self.cost)?,
            sort: SortState::new(self.table.sort_field, self.table.sort_direction),
            forecast_cards: self.forecast.cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_inventory::{PolicyKind, SelectionPolicy, UnitCostSource};

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());

        let options = config.dashboard_options().unwrap();
        assert_eq!(options.sort, SortState::default());
        assert_eq!(options.forecast_cards, 3);
        assert!(matches!(
            options.cost.selection(),
            SelectionPolicy::FirstN { limit: 5, .. }
        ));
    }

    #[test]
    fn parses_every_table() {
        let config = AppConfig::from_toml_str(
            r##"
            [presentation]
            language = "zh"
            theme = "dark"

            [cost]
            policy = "canonical_order"

            [cost.unit_cost]
            source = "record"
            fallback = 3.5

            [[cost.canonical]]
            name = "Rice"
            color = "#0B2747"

            [[cost.canonical]]
            name = "Egg"
            color = "#FFC72C"

            [table]
            sort_field = "current_stock"
            sort_direction = "desc"

            [forecast]
            cards = 5
            "##,
        )
        .unwrap();

        assert_eq!(config.presentation.language, Language::Zh);
        assert_eq!(config.presentation.theme, Theme::Dark);
        assert_eq!(config.cost.policy, PolicyKind::CanonicalOrder);
        assert_eq!(config.cost.unit_cost, UnitCostSource::Record { fallback: 3.5 });
        assert_eq!(config.cost.canonical.len(), 2);
        assert_eq!(config.table.sort_field, SortField::CurrentStock);
        assert_eq!(config.table.sort_direction, SortDirection::Desc);
        assert_eq!(config.forecast.cards, 5);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = AppConfig::from_toml_str("[table]\nsort_field = \"price\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn inconsistent_cost_table_is_rejected_at_load() {
        let err = AppConfig::from_toml_str("[cost]\npalette = []\n");
        assert!(err.is_err());
    }

    #[test]
    fn flags_override_file() {
        let config = AppConfig::default()
            .with_sort_overrides(Some(SortField::Status), None);
        assert_eq!(config.table.sort_field, SortField::Status);
        assert_eq!(config.table.sort_direction, SortDirection::Asc);
    }
}
