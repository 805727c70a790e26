//! The filter engine: pure predicates over property collections.
//!
//! Inclusion requires every active dimension to match (AND across
//! dimensions); within a set-valued dimension any one selection suffices
//! (OR), except amenities where each requested amenity must match. The
//! source collection is never mutated.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EstateError;
use crate::search::criteria::FilterCriteria;
use crate::search::sort::{sort_properties, SortKey};
use crate::types::{with_metadata, ComputationOutput, PropertyRecord};
use crate::EstateResult;

/// Results per page when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Filter a collection, producing a new one. Relative order is preserved;
/// empty criteria returns the input unchanged.
pub fn filter_properties(
    properties: &[PropertyRecord],
    criteria: &FilterCriteria,
) -> Vec<PropertyRecord> {
    if criteria.is_unconstrained() {
        return properties.to_vec();
    }

    properties
        .iter()
        .filter(|p| matches_criteria(p, criteria))
        .cloned()
        .collect()
}

/// Filter then optionally sort. With no sort key the source order is kept.
pub fn filter_and_sort(
    properties: &[PropertyRecord],
    criteria: &FilterCriteria,
    sort: Option<SortKey>,
) -> Vec<PropertyRecord> {
    let mut results = filter_properties(properties, criteria);
    if let Some(key) = sort {
        sort_properties(&mut results, key);
    }
    results
}

fn matches_criteria(property: &PropertyRecord, criteria: &FilterCriteria) -> bool {
    if let Some((min, max)) = criteria.budget_range() {
        if property.price < min || property.price > max {
            return false;
        }
    }

    if !criteria.locations.is_empty() {
        let location = property.location.to_lowercase();
        let hit = criteria
            .locations
            .iter()
            .any(|wanted| location.contains(&normalize_slug(wanted)));
        if !hit {
            return false;
        }
    }

    if !criteria.types.is_empty() && !criteria.types.contains(&property.property_type) {
        return false;
    }

    if let Some(bhk) = criteria.bhk {
        if !bhk.matches(property.beds) {
            return false;
        }
    }

    if !criteria.amenities.is_empty() {
        let tags: Vec<String> = property
            .amenities
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
        let all_present = criteria.amenities.iter().all(|wanted| {
            let wanted = wanted.to_lowercase();
            tags.iter().any(|tag| tag.contains(&wanted))
        });
        if !all_present {
            return false;
        }
    }

    if let Some(ref status) = criteria.status {
        if property.status != *status {
            return false;
        }
    }

    if let Some(ref query) = criteria.query {
        let needle = query.to_lowercase();
        if !needle.is_empty()
            && !property.title.to_lowercase().contains(&needle)
            && !property.location.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(min_area) = criteria.min_area {
        if property.area < min_area {
            return false;
        }
    }
    if let Some(max_area) = criteria.max_area {
        if property.area > max_area {
            return false;
        }
    }

    if let Some(furnishing) = criteria.furnishing {
        if property.furnishing != Some(furnishing) {
            return false;
        }
    }

    true
}

/// Checkbox values arrive in slug form ("jubilee-hills") while listing
/// locations are display text ("Jubilee Hills, Hyderabad").
fn normalize_slug(value: &str) -> String {
    value.to_lowercase().replace('-', " ")
}

// ---------------------------------------------------------------------------
// Envelope operation
// ---------------------------------------------------------------------------

/// Input for a full search request: collection, criteria, ordering, paging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    pub properties: Vec<PropertyRecord>,
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    /// Zero-based page number
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Search results plus paging bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutput {
    pub results: Vec<PropertyRecord>,
    /// Matches across all pages
    pub total_matches: usize,
    pub page: u32,
    pub page_count: u32,
}

/// Run a search request end to end: filter, sort, paginate.
///
/// Data-quality problems never fail the request — an inverted budget range
/// or an out-of-range page produce an empty result with a warning. Only a
/// contract violation (zero page size) returns an error.
pub fn search_properties(
    input: &SearchInput,
) -> EstateResult<ComputationOutput<SearchOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.page_size == 0 {
        return Err(EstateError::InvalidInput {
            field: "page_size".into(),
            reason: "Page size must be at least 1".into(),
        });
    }

    if let (Some(min), Some(max)) = (input.criteria.min_budget, input.criteria.max_budget) {
        if min > max {
            warnings.push(format!(
                "Budget range is inverted (min {min} > max {max}) — no record can match"
            ));
        }
    }

    let matched = filter_and_sort(&input.properties, &input.criteria, input.sort);
    let total_matches = matched.len();
    let page_count = total_matches.div_ceil(input.page_size as usize) as u32;

    if input.page >= page_count && total_matches > 0 {
        warnings.push(format!(
            "Page {} is beyond the last page ({})",
            input.page,
            page_count.saturating_sub(1)
        ));
    }

    let offset = input.page as usize * input.page_size as usize;
    let results: Vec<PropertyRecord> = matched
        .into_iter()
        .skip(offset)
        .take(input.page_size as usize)
        .collect();

    let output = SearchOutput {
        results,
        total_matches,
        page: input.page,
        page_count,
    };

    let assumptions = serde_json::json!({
        "criteria": input.criteria,
        "sort": input.sort.map(|s| s.as_tag()),
        "page": input.page,
        "page_size": input.page_size,
    });

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Property Search (conjunctive filter, stable sort)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::criteria::BhkFilter;
    use crate::types::{ListingStatus, PropertyType};
    use rust_decimal_macros::dec;

    fn fixtures() -> Vec<PropertyRecord> {
        serde_json::from_str(
            r#"[
                {
                    "id": 1,
                    "title": "Luxury 3BHK Apartment in Gachibowli",
                    "location": "Gachibowli, Hyderabad",
                    "type": "apartment",
                    "price": 8500000,
                    "beds": 3,
                    "area": 1850,
                    "amenities": ["Parking", "Gym", "Security"],
                    "status": "ready-to-move"
                },
                {
                    "id": 2,
                    "title": "Premium Villa in Jubilee Hills",
                    "location": "Jubilee Hills, Hyderabad",
                    "type": "villa",
                    "price": 25000000,
                    "beds": 4,
                    "area": 4200,
                    "amenities": ["Swimming Pool", "Garden", "Parking"],
                    "status": "ready-to-move"
                },
                {
                    "id": 3,
                    "title": "Affordable 2BHK in Miyapur",
                    "location": "Miyapur, Hyderabad",
                    "type": "apartment",
                    "price": 4500000,
                    "beds": 2,
                    "area": 1150,
                    "amenities": ["Lift", "Security", "Parking"],
                    "status": "under-construction"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_criteria_returns_input_unchanged() {
        let properties = fixtures();
        let result = filter_properties(&properties, &FilterCriteria::default());
        assert_eq!(result, properties);
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        let criteria = FilterCriteria {
            min_budget: Some(dec!(1000000)),
            ..Default::default()
        };
        assert!(filter_properties(&[], &criteria).is_empty());
    }

    #[test]
    fn test_location_slug_matches_display_text() {
        let criteria = FilterCriteria {
            locations: vec!["jubilee-hills".to_string()],
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let criteria = FilterCriteria {
            types: vec![PropertyType::Apartment],
            bhk: Some(BhkFilter::Exactly(3)),
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_budget_bounds_inclusive() {
        let criteria = FilterCriteria {
            min_budget: Some(dec!(4500000)),
            max_budget: Some(dec!(8500000)),
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_amenity_substring_case_insensitive() {
        let criteria = FilterCriteria {
            amenities: vec!["pool".to_string()],
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_all_requested_amenities_required() {
        let criteria = FilterCriteria {
            amenities: vec!["parking".to_string(), "gym".to_string()],
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn test_status_filter() {
        let criteria = FilterCriteria {
            status: Some(ListingStatus::UnderConstruction),
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn test_query_matches_title() {
        let criteria = FilterCriteria {
            query: Some("affordable".to_string()),
            ..Default::default()
        };
        let result = filter_properties(&fixtures(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn test_search_paginates() {
        let input = SearchInput {
            properties: fixtures(),
            criteria: FilterCriteria::default(),
            sort: Some(SortKey::PriceLow),
            page: 0,
            page_size: 2,
        };
        let output = search_properties(&input).unwrap();
        assert_eq!(output.result.total_matches, 3);
        assert_eq!(output.result.page_count, 2);
        assert_eq!(output.result.results.len(), 2);
        assert_eq!(output.result.results[0].id, 3);
    }

    #[test]
    fn test_search_rejects_zero_page_size() {
        let input = SearchInput {
            properties: fixtures(),
            criteria: FilterCriteria::default(),
            sort: None,
            page: 0,
            page_size: 0,
        };
        assert!(search_properties(&input).is_err());
    }

    #[test]
    fn test_inverted_budget_warns_and_matches_nothing() {
        let input = SearchInput {
            properties: fixtures(),
            criteria: FilterCriteria {
                min_budget: Some(dec!(9000000)),
                max_budget: Some(dec!(1000000)),
                ..Default::default()
            },
            sort: None,
            page: 0,
            page_size: 20,
        };
        let output = search_properties(&input).unwrap();
        assert_eq!(output.result.total_matches, 0);
        assert!(!output.warnings.is_empty());
    }
}
