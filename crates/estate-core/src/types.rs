use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values (prices, rents, installments), in rupees.
/// Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (8.5 = 8.5% p.a.), matching listing-portal
/// convention. Converted to decimal form inside the calculators.
pub type Rate = Decimal;

/// Floor or plot area in square feet
pub type Area = Decimal;

/// Listing category tag.
///
/// Unknown tags from upstream data sources are preserved as `Other` rather
/// than rejected, since records are externally supplied display data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Apartment,
    Villa,
    House,
    Plot,
    Office,
    Retail,
    Warehouse,
    Coworking,
    Industrial,
    Pg,
    Other(String),
}

impl PropertyType {
    pub fn as_tag(&self) -> &str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Villa => "villa",
            PropertyType::House => "house",
            PropertyType::Plot => "plot",
            PropertyType::Office => "office",
            PropertyType::Retail => "retail",
            PropertyType::Warehouse => "warehouse",
            PropertyType::Coworking => "coworking",
            PropertyType::Industrial => "industrial",
            PropertyType::Pg => "pg",
            PropertyType::Other(tag) => tag,
        }
    }
}

impl From<String> for PropertyType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "apartment" => PropertyType::Apartment,
            "villa" => PropertyType::Villa,
            "house" => PropertyType::House,
            "plot" => PropertyType::Plot,
            "office" => PropertyType::Office,
            "retail" => PropertyType::Retail,
            "warehouse" => PropertyType::Warehouse,
            "coworking" => PropertyType::Coworking,
            "industrial" => PropertyType::Industrial,
            "pg" => PropertyType::Pg,
            _ => PropertyType::Other(s),
        }
    }
}

impl From<PropertyType> for String {
    fn from(t: PropertyType) -> Self {
        t.as_tag().to_string()
    }
}

/// Project lifecycle tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ListingStatus {
    NewLaunch,
    PreLaunch,
    UnderConstruction,
    ReadyToMove,
    Other(String),
}

impl ListingStatus {
    pub fn as_tag(&self) -> &str {
        match self {
            ListingStatus::NewLaunch => "new-launch",
            ListingStatus::PreLaunch => "pre-launch",
            ListingStatus::UnderConstruction => "under-construction",
            ListingStatus::ReadyToMove => "ready-to-move",
            ListingStatus::Other(tag) => tag,
        }
    }
}

impl From<String> for ListingStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "new-launch" => ListingStatus::NewLaunch,
            "pre-launch" => ListingStatus::PreLaunch,
            "under-construction" => ListingStatus::UnderConstruction,
            "ready-to-move" => ListingStatus::ReadyToMove,
            _ => ListingStatus::Other(s),
        }
    }
}

impl From<ListingStatus> for String {
    fn from(s: ListingStatus) -> Self {
        s.as_tag().to_string()
    }
}

impl Default for ListingStatus {
    fn default() -> Self {
        ListingStatus::ReadyToMove
    }
}

/// Furnishing level for rental listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Furnishing {
    Furnished,
    SemiFurnished,
    Unfurnished,
}

/// A single property listing.
///
/// Records are externally supplied (fixture files or an API response) and
/// never mutated — the search engine always produces new collections.
/// Ids are monotonically increasing at creation time; "newest" ordering
/// falls back to them when no listing date is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: u64,
    pub title: String,
    pub location: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Sale price, or monthly rent for rental listings
    #[serde(alias = "rent")]
    pub price: Money,
    /// Bedroom count; 0 for non-residential
    #[serde(default)]
    pub beds: u32,
    pub area: Area,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    /// Security deposit (rental listings)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<Furnishing>,
    /// RERA registration identifier, carried as opaque display data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rera_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<NaiveDate>,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
