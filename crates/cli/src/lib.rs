//! `pantry` command-line front end.
//!
//! Reads a JSON snapshot of the upstream feeds, derives the dashboard
//! view-model and renders it as JSON. The binary in `main.rs` only handles
//! arguments and stdio.

pub mod config;

use anyhow::Context;
use serde::Serialize;

use pantry_core::Snapshot;
use pantry_inventory::{DashboardView, SelectionPolicy, dashboard};

pub use config::{AppConfig, Language, PresentationSettings, Theme};

/// Output document: the view-model plus the settings it should be shown with.
#[derive(Debug, Serialize)]
pub struct DashboardDocument {
    pub presentation: PresentationSettings,
    pub dashboard: DashboardView,
}

pub fn parse_snapshot(raw: &str) -> anyhow::Result<Snapshot> {
    serde_json::from_str(raw).context("snapshot does not match the upstream feed contracts")
}

pub fn derive(config: &AppConfig, snapshot: &Snapshot) -> anyhow::Result<DashboardDocument> {
    let options = config.dashboard_options()?;

    let policy = match options.cost.selection() {
        SelectionPolicy::FirstN { .. } => "first_n",
        SelectionPolicy::CanonicalOrder { .. } => "canonical_order",
    };
    tracing::debug!(
        ingredients = snapshot.ingredients().map_or(0, <[_]>::len),
        forecasts = snapshot.forecasts().map_or(0, <[_]>::len),
        cost_policy = policy,
        sort_field = %options.sort.field,
        "deriving dashboard"
    );

    let view = dashboard::build(snapshot, &options);

    let invalid = view.invalid_number_sections();
    if invalid > 0 {
        tracing::warn!(
            sections = invalid,
            "non-numeric input fields were carried as not-a-number markers"
        );
    }

    Ok(DashboardDocument {
        presentation: config.presentation,
        dashboard: view,
    })
}

pub fn render(document: &DashboardDocument, pretty: bool) -> anyhow::Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    };
    out.context("failed to serialize dashboard")
}
