//! Filter criteria with lenient deserialization.
//!
//! Criteria originate from UI widgets (sliders, checkbox groups, free-text
//! boxes), so every dimension is optional and malformed values degrade to
//! "no constraint on this dimension" instead of failing the whole request.

use rust_decimal::Decimal;
use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Area, Furnishing, ListingStatus, Money, PropertyType};

/// BHK (bedroom count) constraint: an exact count or the open-ended "4+".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BhkFilter {
    Exactly(u32),
    FourPlus,
}

impl BhkFilter {
    pub fn matches(&self, beds: u32) -> bool {
        match self {
            BhkFilter::Exactly(n) => beds == *n,
            BhkFilter::FourPlus => beds >= 4,
        }
    }
}

impl Serialize for BhkFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BhkFilter::Exactly(n) => serializer.serialize_u32(*n),
            BhkFilter::FourPlus => serializer.serialize_str("4+"),
        }
    }
}

impl<'de> Deserialize<'de> for BhkFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Number(n) => n
                .as_u64()
                .map(|n| BhkFilter::Exactly(n as u32))
                .ok_or_else(|| DeError::custom("bhk must be a non-negative integer")),
            Value::String(s) if s.trim() == "4+" => Ok(BhkFilter::FourPlus),
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .map(BhkFilter::Exactly)
                .map_err(|_| DeError::custom(format!("unrecognised bhk value '{s}'"))),
            other => Err(DeError::custom(format!("unrecognised bhk value {other}"))),
        }
    }
}

/// A set of filter dimensions. Empty collections and `None` mean
/// "no constraint"; the default value matches every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Locality names, matched case-insensitively as substrings
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<PropertyType>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bhk: Option<BhkFilter>,
    /// Inclusive lower price bound, rupees
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub min_budget: Option<Money>,
    /// Inclusive upper price bound, rupees
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<Money>,
    /// Every requested amenity must match some tag (substring,
    /// case-insensitive)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,
    /// Free-text search over title and location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub min_area: Option<Area>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub max_area: Option<Area>,
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<Furnishing>,
}

impl FilterCriteria {
    /// True when no dimension constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.locations.is_empty()
            && self.types.is_empty()
            && self.bhk.is_none()
            && self.min_budget.is_none()
            && self.max_budget.is_none()
            && self.amenities.is_empty()
            && self.status.is_none()
            && self.query.is_none()
            && self.min_area.is_none()
            && self.max_area.is_none()
            && self.furnishing.is_none()
    }

    /// The budget range, if either bound is set
    pub fn budget_range(&self) -> Option<(Money, Money)> {
        if self.min_budget.is_none() && self.max_budget.is_none() {
            return None;
        }
        Some((
            self.min_budget.unwrap_or(Decimal::ZERO),
            self.max_budget.unwrap_or(Decimal::MAX),
        ))
    }
}

/// Deserialize a value, treating anything malformed as absent.
///
/// Budget sliders and similar widgets hand over numbers-as-strings; a value
/// that cannot be interpreted at all is dropped rather than failing the
/// whole criteria object.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| serde_json::from_value(v).ok()))
}
