use serde::Serialize;

use pantry_core::{Ingredient, Snapshot};

use crate::alerts::{self, Alerts};
use crate::cost::{self, CostDistribution, CostPolicy};
use crate::forecast::{self, DEFAULT_FORECAST_CARDS, ForecastSummary};
use crate::kpi::{self, KpiSummary};
use crate::shipments::{self, ShipmentSummary};
use crate::sort::{self, SortState};

/// Caller-chosen knobs for one dashboard derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOptions {
    pub cost: CostPolicy,
    pub sort: SortState,
    pub forecast_cards: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            cost: CostPolicy::default(),
            sort: SortState::default(),
            forecast_cards: DEFAULT_FORECAST_CARDS,
        }
    }
}

/// Every view-model derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: KpiSummary,
    pub alerts: Alerts,
    pub table: TableView,
    pub cost: CostDistribution,
    pub shipments: ShipmentSummary,
    pub forecasts: Vec<ForecastSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub sort: SortState,
    pub rows: Vec<Ingredient>,
}

impl DashboardView {
    /// Count of sections carrying a not-a-number marker somewhere.
    pub fn invalid_number_sections(&self) -> usize {
        [
            self.table.rows.iter().any(Ingredient::has_invalid_numbers),
            self.cost.has_invalid_numbers(),
            self.shipments.has_invalid_numbers(),
            self.forecasts.iter().any(ForecastSummary::has_invalid_numbers),
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

/// Run every aggregator over the snapshot.
pub fn build(snapshot: &Snapshot, options: &DashboardOptions) -> DashboardView {
    let ingredients = snapshot.ingredients();

    DashboardView {
        kpis: kpi::summarize(ingredients),
        alerts: alerts::select(ingredients),
        table: TableView {
            sort: options.sort,
            rows: sort::sort_rows(ingredients, options.sort),
        },
        cost: cost::distribute(ingredients, &options.cost),
        shipments: shipments::summarize(snapshot.shipment_feed()),
        forecasts: forecast::summarize_all(snapshot.forecasts(), options.forecast_cards),
    }
}
