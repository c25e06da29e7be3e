use serde::Serialize;

use pantry_core::{NOT_AVAILABLE, Shipment, ShipmentFeed, ShipmentId, ShipmentStatistics};

/// Shipments shown in the recent list.
pub const DISPLAY_LIMIT: usize = 5;

/// Characters kept from the ingredient id for chart labels.
pub const NAME_WIDTH: usize = 10;

/// A delivered shipment counts as on time up to this lead time.
pub const ON_TIME_MAX_LEAD_DAYS: f64 = 7.0;

/// Lead-time chart point for one shipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTimeBar {
    pub name: String,
    pub lead_time_days: f64,
    pub status: String,
}

/// Row of the recent shipments list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentRow {
    pub shipment_id: ShipmentId,
    pub ingredient_id: String,
    pub vendor: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_time_days: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipmentSummary {
    pub total_shipments: u64,
    /// Rounded to one decimal.
    pub average_lead_time: f64,
    /// `average_lead_time` as display text, e.g. `"5.5"`.
    pub average_lead_time_label: String,
    pub delayed_count: u64,
    pub on_time_count: u64,
    pub lead_times: Vec<LeadTimeBar>,
    pub recent: Vec<ShipmentRow>,
}

impl ShipmentSummary {
    pub fn has_invalid_numbers(&self) -> bool {
        self.average_lead_time.is_nan() || self.lead_times.iter().any(|b| b.lead_time_days.is_nan())
    }
}

/// Summarize the shipments feed.
///
/// Precomputed statistics win when the feed carries them: a missing total or
/// average reads as 0, a missing delayed/on-time count is derived from the raw
/// list. Without statistics every figure is derived. The chart series and the
/// recent list always come from the raw list.
pub fn summarize(feed: Option<&ShipmentFeed>) -> ShipmentSummary {
    let shipments: &[Shipment] = feed
        .and_then(|f| f.shipments.as_deref())
        .unwrap_or(&[]);

    let stats = match feed.and_then(|f| f.statistics.as_ref()) {
        Some(precomputed) => passthrough(precomputed, shipments),
        None => derive(shipments),
    };

    ShipmentSummary {
        total_shipments: stats.total_shipments,
        average_lead_time: round_tenth(stats.average_lead_time),
        average_lead_time_label: format!("{:.1}", stats.average_lead_time),
        delayed_count: stats.delayed_count,
        on_time_count: stats.on_time_count,
        lead_times: shipments.iter().map(lead_time_bar).collect(),
        recent: shipments.iter().take(DISPLAY_LIMIT).map(row).collect(),
    }
}

struct Figures {
    total_shipments: u64,
    average_lead_time: f64,
    delayed_count: u64,
    on_time_count: u64,
}

fn passthrough(stats: &ShipmentStatistics, shipments: &[Shipment]) -> Figures {
    Figures {
        total_shipments: stats.total_shipments.unwrap_or(0),
        average_lead_time: stats.average_lead_time.unwrap_or(0.0),
        delayed_count: stats
            .delayed_count
            .unwrap_or_else(|| delayed_count(shipments)),
        on_time_count: stats
            .on_time_count
            .unwrap_or_else(|| on_time_count(shipments)),
    }
}

fn derive(shipments: &[Shipment]) -> Figures {
    let total = shipments.len();
    let average_lead_time = if total > 0 {
        shipments.iter().map(lead_time).sum::<f64>() / total as f64
    } else {
        0.0
    };

    Figures {
        total_shipments: total as u64,
        average_lead_time,
        delayed_count: delayed_count(shipments),
        on_time_count: on_time_count(shipments),
    }
}

fn delayed_count(shipments: &[Shipment]) -> u64 {
    shipments.iter().filter(|s| s.status == "delayed").count() as u64
}

fn on_time_count(shipments: &[Shipment]) -> u64 {
    shipments
        .iter()
        .filter(|s| s.status == "delivered" && lead_time(s) <= ON_TIME_MAX_LEAD_DAYS)
        .count() as u64
}

/// Lead time with the in-transit default of 0.
fn lead_time(shipment: &Shipment) -> f64 {
    shipment.lead_time_days.unwrap_or(0.0)
}

fn display_name(shipment: &Shipment) -> String {
    match &shipment.ingredient_id {
        Some(id) if !id.as_str().is_empty() => id.as_str().chars().take(NAME_WIDTH).collect(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn lead_time_bar(shipment: &Shipment) -> LeadTimeBar {
    LeadTimeBar {
        name: display_name(shipment),
        lead_time_days: lead_time(shipment),
        status: shipment.status.clone(),
    }
}

fn row(shipment: &Shipment) -> ShipmentRow {
    ShipmentRow {
        shipment_id: shipment.id.clone(),
        ingredient_id: shipment
            .ingredient_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
        vendor: shipment.vendor.clone(),
        status: shipment.status.clone(),
        lead_time_days: shipment.lead_time_days,
    }
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Shipment> {
        vec![
            Shipment::new("SH001", "delivered")
                .with_ingredient("green_onion")
                .with_vendor("Fresh Produce Co.")
                .with_lead_time(3.0),
            Shipment::new("SH002", "in_transit")
                .with_ingredient("braised_beef")
                .with_vendor("Meat Distributors Inc."),
            Shipment::new("SH003", "delayed")
                .with_ingredient("rice")
                .with_vendor("Grain Suppliers")
                .with_lead_time(8.0),
        ]
    }

    #[test]
    fn empty_list_yields_zero_statistics() {
        let summary = summarize(Some(&ShipmentFeed::from_shipments(Vec::new())));
        assert_eq!(summary.total_shipments, 0);
        assert_eq!(summary.average_lead_time, 0.0);
        assert_eq!(summary.average_lead_time_label, "0.0");
        assert!(summary.recent.is_empty());

        let missing = summarize(None);
        assert_eq!(missing.total_shipments, 0);
        assert_eq!(missing.average_lead_time, 0.0);
    }

    #[test]
    fn derives_statistics_from_raw_list() {
        let summary = summarize(Some(&ShipmentFeed::from_shipments(sample())));

        assert_eq!(summary.total_shipments, 3);
        // (3 + 0 + 8) / 3
        assert_eq!(summary.average_lead_time, 3.7);
        assert_eq!(summary.average_lead_time_label, "3.7");
        assert_eq!(summary.delayed_count, 1);
        assert_eq!(summary.on_time_count, 1);
        assert_eq!(summary.lead_times[1].lead_time_days, 0.0);
    }

    #[test]
    fn precomputed_statistics_pass_through() {
        let feed = ShipmentFeed {
            shipments: Some(sample()),
            statistics: Some(ShipmentStatistics {
                total_shipments: Some(3),
                average_lead_time: Some(5.5),
                delayed_count: Some(1),
                on_time_count: None,
            }),
        };

        let summary = summarize(Some(&feed));
        assert_eq!(summary.total_shipments, 3);
        assert_eq!(summary.average_lead_time_label, "5.5");
        assert_eq!(summary.delayed_count, 1);
        // Not precomputed: SH001 was delivered in 3 days.
        assert_eq!(summary.on_time_count, 1);
        assert_eq!(summary.lead_times.len(), 3);
    }

    #[test]
    fn precomputed_statistics_without_total_or_average_read_as_zero() {
        let feed = ShipmentFeed {
            shipments: Some(sample()),
            statistics: Some(ShipmentStatistics {
                total_shipments: None,
                average_lead_time: None,
                delayed_count: Some(2),
                on_time_count: None,
            }),
        };

        let summary = summarize(Some(&feed));
        // Not derived from the three listed shipments.
        assert_eq!(summary.total_shipments, 0);
        assert_eq!(summary.average_lead_time, 0.0);
        assert_eq!(summary.average_lead_time_label, "0.0");
        assert_eq!(summary.delayed_count, 2);
        assert_eq!(summary.on_time_count, 1);
        assert_eq!(summary.recent.len(), 3);
    }

    #[test]
    fn names_are_truncated_and_list_is_bounded() {
        let mut shipments: Vec<Shipment> = (0..7)
            .map(|i| Shipment::new(format!("SH{i}"), "delivered").with_ingredient("pickle_cabbage"))
            .collect();
        shipments.push(Shipment::new("SH9", "delivered"));

        let summary = summarize(Some(&ShipmentFeed::from_shipments(shipments)));
        assert_eq!(summary.lead_times[0].name, "pickle_cab");
        assert_eq!(summary.lead_times[7].name, "N/A");
        assert_eq!(summary.recent.len(), DISPLAY_LIMIT);
        assert_eq!(summary.recent[0].shipment_id.as_str(), "SH0");
    }

    #[test]
    fn non_numeric_lead_time_marks_average() {
        let shipments = vec![Shipment::new("SH1", "delivered").with_lead_time(f64::NAN)];
        let summary = summarize(Some(&ShipmentFeed::from_shipments(shipments)));
        assert!(summary.has_invalid_numbers());
        assert_eq!(summary.delayed_count, 0);
    }
}
