use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[napi]
pub fn search_properties(input_json: String) -> NapiResult<String> {
    let input: estate_core::search::SearchInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = estate_core::search::search_properties(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn filter_and_sort(input_json: String) -> NapiResult<String> {
    #[derive(serde::Deserialize)]
    struct FilterBindingInput {
        properties: Vec<estate_core::types::PropertyRecord>,
        #[serde(default)]
        criteria: estate_core::search::FilterCriteria,
        #[serde(default)]
        sort: Option<estate_core::search::SortKey>,
    }

    let input: FilterBindingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let results =
        estate_core::search::filter_and_sort(&input.properties, &input.criteria, input.sort);
    serde_json::to_string(&results).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loan
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_loan(input_json: String) -> NapiResult<String> {
    let input: estate_core::loan::LoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = estate_core::loan::analyze_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
