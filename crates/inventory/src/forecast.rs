use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use pantry_core::{Forecast, ForecastPoint, IngredientId, Reported};

/// Days summed into the near-term demand figure.
pub const NEAR_TERM_DAYS: usize = 7;

/// Forecast cards shown on the dashboard by default.
pub const DEFAULT_FORECAST_CARDS: usize = 3;

/// Forecast card view-model for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    pub ingredient_id: IngredientId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon: Option<u64>,
    pub next_7_days_demand: f64,
    /// Upstream value, unmodified.
    pub reorder_date: Reported<String>,
    pub reorder_date_label: Reported<String>,
    /// Upstream value, unmodified.
    pub reorder_quantity: Reported<f64>,
}

impl ForecastSummary {
    pub fn has_invalid_numbers(&self) -> bool {
        self.next_7_days_demand.is_nan()
            || self.reorder_quantity.as_option().is_some_and(|q| q.is_nan())
    }
}

/// Sum of predicted demand over the first [`NEAR_TERM_DAYS`] points, in the
/// order given. A point without a prediction contributes 0.
pub fn near_term_demand(points: &[ForecastPoint]) -> f64 {
    points
        .iter()
        .take(NEAR_TERM_DAYS)
        .map(|p| p.predicted_demand.unwrap_or(0.0))
        .sum()
}

pub fn summarize(forecast: &Forecast) -> ForecastSummary {
    ForecastSummary {
        ingredient_id: forecast.ingredient_id.clone(),
        title: title_case(forecast.ingredient_id.as_str()),
        horizon: forecast.horizon,
        next_7_days_demand: near_term_demand(&forecast.points),
        reorder_date: forecast.reorder_date.clone().into(),
        reorder_date_label: forecast
            .reorder_date
            .as_deref()
            .map(format_reorder_date)
            .into(),
        reorder_quantity: forecast.reorder_quantity.into(),
    }
}

/// Summaries for the first `limit` forecasts, in input order.
pub fn summarize_all(forecasts: Option<&[Forecast]>, limit: usize) -> Vec<ForecastSummary> {
    forecasts
        .unwrap_or(&[])
        .iter()
        .take(limit)
        .map(summarize)
        .collect()
}

/// `braised_beef` -> `Braised Beef`.
pub fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_word_start = true;
    for ch in id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_ascii_alphanumeric() {
            if at_word_start {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Render an upstream reorder date as `Oct 26, 2026`.
///
/// Accepts RFC 3339 timestamps, naive ISO timestamps (what the forecast
/// service emits) and plain ISO dates. Anything else is returned unchanged.
pub fn format_reorder_date(raw: &str) -> String {
    const LABEL: &str = "%b %d, %Y";
    let raw_trimmed = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw_trimmed) {
        return ts.format(LABEL).to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw_trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.format(LABEL).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw_trimmed, "%Y-%m-%d") {
        return date.format(LABEL).to_string();
    }
    raw.to_string()
}
