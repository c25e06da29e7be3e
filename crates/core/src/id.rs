//! Strongly-typed identifiers used across the records.
//!
//! Upstream ids are opaque strings (`"braised_beef"`, `"SH001"`). Decoding is
//! lenient (numbers are stringified, `null` becomes the empty id) so that a
//! malformed id never rejects the whole record.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;
use crate::lenient;

/// Identifier of an ingredient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct IngredientId(String);

/// Identifier of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShipmentId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when upstream sent no usable id.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                lenient::string(deserializer).map(Self)
            }
        }
    };
}

impl_string_newtype!(IngredientId, "IngredientId");
impl_string_newtype!(ShipmentId, "ShipmentId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        assert!(matches!(
            "   ".parse::<IngredientId>(),
            Err(DomainError::InvalidId(_))
        ));
        assert_eq!("  rice ".parse::<IngredientId>().unwrap().as_str(), "rice");
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let id: ShipmentId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        let id: IngredientId = serde_json::from_str("null").unwrap();
        assert!(id.is_empty());
    }
}
