//! Wire types for the Maps geocoding and places REST endpoints.
//!
//! ## Observed envelope shape
//!
//! Every endpoint wraps its payload in `{"status": "...", ...}`. `"OK"` and
//! `"ZERO_RESULTS"` are the two non-error statuses; anything else (e.g.
//! `"OVER_QUERY_LIMIT"`, `"REQUEST_DENIED"`, `"INVALID_REQUEST"`) comes with
//! an optional `error_message` and is surfaced as a typed error. Result
//! fields are sparsely populated; `#[serde(default)]` throughout, so a
//! record missing optional data still deserializes.

use serde::Deserialize;

use leadscout_core::types::BusinessStatus;

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One place from a text-search page.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    /// Wire values are SCREAMING_SNAKE; unrecognized ones become `Unknown`.
    #[serde(default)]
    pub business_status: Option<BusinessStatus>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Per-place detail fields requested on top of the search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Canonical maps URL for the place.
    #[serde(default)]
    pub url: Option<String>,
}
