use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use estate_core::search::{
    search_properties, FilterCriteria, SearchInput, SortKey, DEFAULT_PAGE_SIZE,
};
use estate_core::types::PropertyRecord;

use crate::input;

/// Arguments for property search
#[derive(Args)]
pub struct SearchArgs {
    /// Path to a JSON file: an array of listings, or a full search request
    /// object with `properties`, `criteria`, `sort` and paging fields
    #[arg(long)]
    pub input: Option<String>,

    /// Locality to match (repeat for OR across localities)
    #[arg(long = "location")]
    pub locations: Vec<String>,

    /// Property type tag, e.g. apartment, villa, plot (repeatable)
    #[arg(long = "property-type")]
    pub types: Vec<String>,

    /// Bedroom count: a number, or "4+" for four or more
    #[arg(long)]
    pub bhk: Option<String>,

    /// Inclusive lower price bound, rupees
    #[arg(long)]
    pub min_budget: Option<Decimal>,

    /// Inclusive upper price bound, rupees
    #[arg(long)]
    pub max_budget: Option<Decimal>,

    /// Required amenity, substring match (repeatable, all must match)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    /// Listing status tag, e.g. ready-to-move, new-launch
    #[arg(long)]
    pub status: Option<String>,

    /// Free-text search over title and location
    #[arg(long)]
    pub query: Option<String>,

    /// Inclusive lower area bound, sq ft
    #[arg(long)]
    pub min_area: Option<Decimal>,

    /// Inclusive upper area bound, sq ft
    #[arg(long)]
    pub max_area: Option<Decimal>,

    /// Furnishing level: furnished, semi-furnished, unfurnished
    #[arg(long)]
    pub furnishing: Option<String>,

    /// Sort key: price-low, price-high, area-low, area-high, newest
    #[arg(long)]
    pub sort: Option<String>,

    /// Zero-based page number (default 0)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (default 20)
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub fn run_search(args: SearchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let source: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("listings are required: provide --input or pipe JSON on stdin".into());
    };

    let request = build_request(source, &args)?;
    let output = search_properties(&request)?;
    Ok(serde_json::to_value(output)?)
}

/// A bare array of listings takes its criteria from the flags; a full
/// request object is used as-is, with flags overriding individual fields.
fn build_request(source: Value, args: &SearchArgs) -> Result<SearchInput, Box<dyn std::error::Error>> {
    let mut request = if source.is_array() {
        let properties: Vec<PropertyRecord> = serde_json::from_value(source)?;
        SearchInput {
            properties,
            criteria: FilterCriteria::default(),
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    } else {
        serde_json::from_value::<SearchInput>(source)?
    };

    if let Some(page) = args.page {
        request.page = page;
    }
    if let Some(page_size) = args.page_size {
        request.page_size = page_size;
    }

    apply_flags(&mut request.criteria, args)?;

    if let Some(ref tag) = args.sort {
        request.sort = Some(
            SortKey::parse(tag)
                .ok_or_else(|| format!("unrecognised sort key '{tag}'"))?,
        );
    }

    Ok(request)
}

fn apply_flags(
    criteria: &mut FilterCriteria,
    args: &SearchArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if !args.locations.is_empty() {
        criteria.locations = args.locations.clone();
    }
    if !args.types.is_empty() {
        criteria.types = args.types.iter().cloned().map(Into::into).collect();
    }
    if let Some(ref bhk) = args.bhk {
        // Reuse the criteria parser so "3" and "4+" both work
        criteria.bhk = serde_json::from_value(Value::String(bhk.clone()))
            .map_err(|_| format!("unrecognised bhk value '{bhk}'"))?;
    }
    if args.min_budget.is_some() {
        criteria.min_budget = args.min_budget;
    }
    if args.max_budget.is_some() {
        criteria.max_budget = args.max_budget;
    }
    if !args.amenities.is_empty() {
        criteria.amenities = args.amenities.clone();
    }
    if let Some(ref status) = args.status {
        criteria.status = Some(status.clone().into());
    }
    if args.query.is_some() {
        criteria.query = args.query.clone();
    }
    if args.min_area.is_some() {
        criteria.min_area = args.min_area;
    }
    if args.max_area.is_some() {
        criteria.max_area = args.max_area;
    }
    if let Some(ref furnishing) = args.furnishing {
        criteria.furnishing = Some(
            serde_json::from_value(Value::String(furnishing.clone()))
                .map_err(|_| format!("unrecognised furnishing level '{furnishing}'"))?,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn default_args() -> SearchArgs {
        SearchArgs {
            input: None,
            locations: vec![],
            types: vec![],
            bhk: None,
            min_budget: None,
            max_budget: None,
            amenities: vec![],
            status: None,
            query: None,
            min_area: None,
            max_area: None,
            furnishing: None,
            sort: None,
            page: None,
            page_size: None,
        }
    }

    #[test]
    fn test_request_object_paging_survives_without_flags() {
        let source = json!({"properties": [], "page": 3, "page_size": 5});
        let request = build_request(source, &default_args()).unwrap();
        assert_eq!(request.page, 3);
        assert_eq!(request.page_size, 5);
    }

    #[test]
    fn test_explicit_paging_flags_override_request_object() {
        let source = json!({"properties": [], "page": 3, "page_size": 5});
        let args = SearchArgs {
            page: Some(1),
            ..default_args()
        };
        let request = build_request(source, &args).unwrap();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, 5);
    }

    #[test]
    fn test_bare_array_gets_default_paging() {
        let request = build_request(json!([]), &default_args()).unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
    }
}
