//! Inventory analytics derivation layer.
//!
//! This crate turns raw ingredient/shipment/forecast records into dashboard
//! view-models, implemented purely as deterministic functions (no IO, no
//! shared state). Inputs are borrowed snapshots and are never mutated.

pub mod alerts;
pub mod cost;
pub mod dashboard;
pub mod forecast;
pub mod kpi;
pub mod shipments;
pub mod sort;

pub use alerts::{ALERT_LIMIT, AlertEntry, Alerts};
pub use cost::{
    CanonicalEntry, CostConfig, CostDistribution, CostItem, CostPolicy, PolicyKind,
    SelectionPolicy, UnitCostSource,
};
pub use dashboard::{DashboardOptions, DashboardView, TableView};
pub use forecast::{ForecastSummary, NEAR_TERM_DAYS};
pub use kpi::KpiSummary;
pub use shipments::{LeadTimeBar, ShipmentRow, ShipmentSummary};
pub use sort::{SortDirection, SortField, SortState};
