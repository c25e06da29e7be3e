//! Tagged upstream records: ingredients, shipments and demand forecasts.
//!
//! Field names follow the upstream JSON contracts. Every field has an explicit
//! default policy (see [`crate::lenient`]), so decoding a record never fails on
//! a missing or malformed field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::id::{IngredientId, ShipmentId};
use crate::lenient;

/// Stock classification computed upstream.
///
/// The four recognized values come from the classifier. Anything else is kept
/// verbatim in `Unrecognized` (empty when upstream sent no status), written
/// back out unchanged, and counted as adequate by the KPI aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StockStatus {
    Adequate,
    LowStock,
    Critical,
    Overstocked,
    Unrecognized(String),
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::Unrecognized(String::new())
    }
}

impl StockStatus {
    /// Surrounding whitespace is ignored when matching; an unmatched value is
    /// kept as sent.
    pub fn from_wire(value: &str) -> Self {
        match value.trim() {
            "adequate" => StockStatus::Adequate,
            "low_stock" => StockStatus::LowStock,
            "critical" => StockStatus::Critical,
            "overstocked" => StockStatus::Overstocked,
            _ => StockStatus::Unrecognized(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::Adequate => "adequate",
            StockStatus::LowStock => "low_stock",
            StockStatus::Critical => "critical",
            StockStatus::Overstocked => "overstocked",
            StockStatus::Unrecognized(raw) => raw,
        }
    }

    /// Low-stock alerts cover both `low_stock` and `critical`.
    pub fn is_low_stock(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::Critical)
    }

    pub fn is_overstocked(&self) -> bool {
        matches!(self, StockStatus::Overstocked)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StockStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StockStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => StockStatus::default(),
            Some(Value::String(s)) => StockStatus::from_wire(&s),
            Some(other) => StockStatus::Unrecognized(other.to_string()),
        })
    }
}

/// One row of the inventory levels feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(rename = "ingredient_id", default)]
    pub id: IngredientId,
    #[serde(rename = "ingredient_name", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub unit: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub current_stock: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub reorder_point: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub safety_stock: f64,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub par_level: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_cost: Option<f64>,
    #[serde(default)]
    pub status: StockStatus,
}

impl Ingredient {
    /// Minimal constructor; numeric fields start at zero.
    pub fn new(id: impl Into<IngredientId>, name: impl Into<String>, status: StockStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: String::new(),
            current_stock: 0.0,
            reorder_point: 0.0,
            safety_stock: 0.0,
            par_level: None,
            unit_cost: None,
            status,
        }
    }

    pub fn with_stock(mut self, current_stock: f64) -> Self {
        self.current_stock = current_stock;
        self
    }

    pub fn with_reorder_point(mut self, reorder_point: f64) -> Self {
        self.reorder_point = reorder_point;
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }

    /// True when any stock figure carries the not-a-number marker.
    pub fn has_invalid_numbers(&self) -> bool {
        self.current_stock.is_nan() || self.reorder_point.is_nan() || self.safety_stock.is_nan()
    }
}

/// One row of the shipments feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    #[serde(rename = "shipment_id", default)]
    pub id: ShipmentId,
    #[serde(default)]
    pub ingredient_id: Option<IngredientId>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub vendor: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: f64,
    /// Absent while a shipment is still in transit.
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub lead_time_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipped_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub arrived_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tracking_id: Option<String>,
}

impl Shipment {
    pub fn new(id: impl Into<ShipmentId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ingredient_id: None,
            vendor: String::new(),
            quantity: 0.0,
            lead_time_days: None,
            status: status.into(),
            shipped_date: None,
            arrived_date: None,
            tracking_id: None,
        }
    }

    pub fn with_ingredient(mut self, ingredient_id: impl Into<IngredientId>) -> Self {
        self.ingredient_id = Some(ingredient_id.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_lead_time(mut self, days: f64) -> Self {
        self.lead_time_days = Some(days);
        self
    }
}

/// One day of predicted demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub predicted_demand: Option<f64>,
}

impl ForecastPoint {
    pub fn new(date: impl Into<String>, predicted_demand: f64) -> Self {
        Self {
            date: Some(date.into()),
            predicted_demand: Some(predicted_demand),
        }
    }
}

/// Demand forecast for one ingredient, produced by the upstream model.
///
/// `points` is chronological by upstream contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub ingredient_id: IngredientId,
    #[serde(
        default,
        deserialize_with = "lenient::optional_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub horizon: Option<u64>,
    #[serde(rename = "forecast", default, deserialize_with = "lenient::sequence")]
    pub points: Vec<ForecastPoint>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub reorder_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub reorder_quantity: Option<f64>,
}

impl Forecast {
    pub fn new(ingredient_id: impl Into<IngredientId>, points: Vec<ForecastPoint>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            horizon: None,
            points,
            reorder_date: None,
            reorder_quantity: None,
        }
    }

    pub fn with_reorder(mut self, date: impl Into<String>, quantity: f64) -> Self {
        self.reorder_date = Some(date.into());
        self.reorder_quantity = Some(quantity);
        self
    }
}
