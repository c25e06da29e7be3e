//! Per-render input envelope: the three upstream feeds as one read-only value.
//!
//! Every level is optional. A missing feed is the MissingData case and each
//! aggregator answers it with its own empty result.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::records::{Forecast, Ingredient, Shipment};

/// Inventory levels feed (`/inventory/levels` shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryLevels {
    #[serde(default)]
    pub ingredients: Option<Vec<Ingredient>>,
}

/// Shipment statistics as precomputed by the shipment service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentStatistics {
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub total_shipments: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub average_lead_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub delayed_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub on_time_count: Option<u64>,
}

/// Shipments feed (`/shipments` shape).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentFeed {
    #[serde(default)]
    pub shipments: Option<Vec<Shipment>>,
    #[serde(default)]
    pub statistics: Option<ShipmentStatistics>,
}

impl ShipmentFeed {
    pub fn from_shipments(shipments: Vec<Shipment>) -> Self {
        Self {
            shipments: Some(shipments),
            statistics: None,
        }
    }
}

/// Everything fetched for one render cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub inventory: Option<InventoryLevels>,
    #[serde(default)]
    pub shipments: Option<ShipmentFeed>,
    #[serde(default)]
    pub forecasts: Option<Vec<Forecast>>,
}

impl Snapshot {
    pub fn ingredients(&self) -> Option<&[Ingredient]> {
        self.inventory.as_ref()?.ingredients.as_deref()
    }

    pub fn shipment_feed(&self) -> Option<&ShipmentFeed> {
        self.shipments.as_ref()
    }

    pub fn forecasts(&self) -> Option<&[Forecast]> {
        self.forecasts.as_deref()
    }
}
