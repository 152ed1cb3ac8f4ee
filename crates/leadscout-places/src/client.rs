//! HTTP client for the Maps geocoding and places REST endpoints.
//!
//! Wraps `reqwest` with API-key management, envelope status checking, and
//! typed response deserialization. Text search follows `next_page_token`
//! pagination with the upstream-mandated delay between pages.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{
    DetailsResponse, GeocodeResponse, PlaceDetails, PlaceResult, TextSearchResponse,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

/// Upstream hard limit: text search serves at most three pages of twenty
/// results, so following more cursors than this indicates a cycling token.
const MAX_SEARCH_PAGES: usize = 3;

/// Detail fields requested per place, on top of the search-result fields.
const DETAIL_FIELDS: &str = "formatted_phone_number,website,url";

/// Client for the places REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadscout/0.1 (lead-qualification)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined paths land under the root rather than replacing a segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text location to latitude/longitude.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::GeocodeNoResults`] — the API knows no such place.
    /// - [`PlacesError::ApiStatus`] — any other non-OK envelope status.
    /// - [`PlacesError::Http`] / [`PlacesError::HttpStatus`] /
    ///   [`PlacesError::Deserialize`] — transport or body-shape failures.
    pub async fn geocode(&self, location: &str) -> Result<(f64, f64), PlacesError> {
        let url = self.build_url("maps/api/geocode/json", &[("address", location)]);
        let response: GeocodeResponse = self
            .get_json(&url, &format!("geocode({location})"))
            .await?;

        match response.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Err(PlacesError::GeocodeNoResults(location.to_owned())),
            status => {
                return Err(PlacesError::ApiStatus {
                    status: status.to_owned(),
                    message: response.error_message.unwrap_or_default(),
                })
            }
        }

        let first = response
            .results
            .first()
            .ok_or_else(|| PlacesError::GeocodeNoResults(location.to_owned()))?;
        Ok((first.geometry.location.lat, first.geometry.location.lng))
    }

    /// Runs a text search around a point, following pagination cursors until
    /// `max_results` places are collected or the pages run out.
    ///
    /// The API requires a pause before a fresh `next_page_token` becomes
    /// valid; `page_delay_ms` controls it (tests pass 0).
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] — non-OK envelope status other than
    ///   `ZERO_RESULTS` (which yields an empty/short result instead).
    /// - [`PlacesError::Http`] / [`PlacesError::HttpStatus`] /
    ///   [`PlacesError::Deserialize`] — transport or body-shape failures.
    pub async fn text_search(
        &self,
        query: &str,
        lat: f64,
        lng: f64,
        radius_m: u32,
        max_results: usize,
        page_delay_ms: u64,
    ) -> Result<Vec<PlaceResult>, PlacesError> {
        let location = format!("{lat},{lng}");
        let radius = radius_m.to_string();

        let mut collected: Vec<PlaceResult> = Vec::new();
        let mut page_token: Option<String> = None;

        for page in 0..MAX_SEARCH_PAGES {
            if page > 0 && page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(page_delay_ms)).await;
            }

            let mut params = vec![
                ("query", query),
                ("location", location.as_str()),
                ("radius", radius.as_str()),
            ];
            if let Some(token) = page_token.as_deref() {
                params.push(("pagetoken", token));
            }

            let url = self.build_url("maps/api/place/textsearch/json", &params);
            let response: TextSearchResponse = self
                .get_json(&url, &format!("text_search(query={query}, page={page})"))
                .await?;

            match response.status.as_str() {
                "OK" => {}
                "ZERO_RESULTS" => break,
                status => {
                    return Err(PlacesError::ApiStatus {
                        status: status.to_owned(),
                        message: response.error_message.unwrap_or_default(),
                    })
                }
            }

            collected.extend(response.results);
            if collected.len() >= max_results {
                break;
            }

            match response.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        collected.truncate(max_results);
        Ok(collected)
    }

    /// Fetches the detail fields (phone, website, maps URL) for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiStatus`] — non-OK envelope status, or an OK
    ///   envelope missing its result payload.
    /// - [`PlacesError::Http`] / [`PlacesError::HttpStatus`] /
    ///   [`PlacesError::Deserialize`] — transport or body-shape failures.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = self.build_url(
            "maps/api/place/details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        );
        let response: DetailsResponse = self
            .get_json(&url, &format!("place_details({place_id})"))
            .await?;

        if response.status != "OK" {
            return Err(PlacesError::ApiStatus {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        response.result.ok_or_else(|| PlacesError::ApiStatus {
            status: "OK".to_owned(),
            message: format!("details response for {place_id} is missing its result"),
        })
    }

    /// Builds an endpoint URL with the API key and query parameters applied.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = self
            .base_url
            .join(path)
            .expect("endpoint path joins onto validated base URL");

        url.query_pairs_mut().append_pair("key", &self.api_key);
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }

        url.to_string()
    }

    async fn get_json<T>(&self, url: &str, context: &str) -> Result<T, PlacesError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlacesError::HttpStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
