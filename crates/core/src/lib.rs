//! `pantry-core`: record types shared by the inventory analytics layer.
//!
//! This crate contains **pure domain** primitives (no I/O): the tagged
//! upstream records, their typed identifiers, the lenient field decoders that
//! give every malformed field a defined value, and the `Reported` sentinel.

pub mod error;
pub mod id;
pub mod lenient;
pub mod records;
pub mod reported;
pub mod snapshot;

pub use error::{DomainError, DomainResult};
pub use id::{IngredientId, ShipmentId};
pub use records::{Forecast, ForecastPoint, Ingredient, Shipment, StockStatus};
pub use reported::{NOT_AVAILABLE, Reported};
pub use snapshot::{InventoryLevels, ShipmentFeed, ShipmentStatistics, Snapshot};
