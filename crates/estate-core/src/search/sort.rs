use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::PropertyRecord;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    AreaLow,
    AreaHigh,
    Newest,
}

impl SortKey {
    pub fn parse(tag: &str) -> Option<SortKey> {
        match tag {
            "price-low" => Some(SortKey::PriceLow),
            "price-high" => Some(SortKey::PriceHigh),
            "area-low" => Some(SortKey::AreaLow),
            "area-high" => Some(SortKey::AreaHigh),
            "newest" => Some(SortKey::Newest),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::AreaLow => "area-low",
            SortKey::AreaHigh => "area-high",
            SortKey::Newest => "newest",
        }
    }
}

/// Sort records in place. All orderings are stable: equal keys keep their
/// original relative order.
///
/// `Newest` prefers the explicit listing date; records without one rank by
/// id, after all dated records. Ids are monotonically increasing at
/// creation, so higher id means more recently added — a legacy ordering
/// assumption, not a guarantee of any id-generation policy.
pub fn sort_properties(records: &mut [PropertyRecord], key: SortKey) {
    match key {
        SortKey::PriceLow => records.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::AreaLow => records.sort_by(|a, b| a.area.cmp(&b.area)),
        SortKey::AreaHigh => records.sort_by(|a, b| b.area.cmp(&a.area)),
        SortKey::Newest => records.sort_by(|a, b| recency_rank(b).cmp(&recency_rank(a))),
    }
}

fn recency_rank(record: &PropertyRecord) -> (Option<NaiveDate>, u64) {
    (record.listed_at, record.id)
}
