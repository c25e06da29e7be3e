//! Explicit "not available" sentinel for optional upstream values.

use serde::{Serialize, Serializer};

/// Rendering of an absent value.
pub const NOT_AVAILABLE: &str = "N/A";

/// A value that upstream may or may not have reported.
///
/// Unlike `Option`, the absent case serializes as the [`NOT_AVAILABLE`]
/// sentinel string, so a consumer never sees a blank field.
#[derive(Debug, Clone, PartialEq)]
pub enum Reported<T> {
    Available(T),
    NotAvailable,
}

impl<T> Reported<T> {
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Reported::Available(v) => Some(v),
            Reported::NotAvailable => None,
        }
    }
}

impl<T> From<Option<T>> for Reported<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Reported::Available(v),
            None => Reported::NotAvailable,
        }
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reported::Available(v) => v.serialize(serializer),
            Reported::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Reported<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Reported::Available(v) => core::fmt::Display::fmt(v, f),
            Reported::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}
