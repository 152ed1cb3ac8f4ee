//! Discovery: text search plus per-place detail lookup, producing
//! [`BusinessRecord`]s for the enrichment stage.

use leadscout_core::types::{BusinessRecord, BusinessStatus};

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::PlaceResult;

/// Knobs for one discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Search radius in meters (upstream caps at 50000).
    pub radius_m: u32,
    /// Upper bound on returned records (upstream caps at 60).
    pub max_results: usize,
    /// Pause before consuming a pagination token.
    pub page_delay_ms: u64,
    /// Whether to fetch phone/website details per place.
    pub fetch_details: bool,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            radius_m: 50_000,
            max_results: 60,
            page_delay_ms: 2000,
            fetch_details: true,
        }
    }
}

/// Discovers businesses matching `query` around `location`.
///
/// Geocodes the location, pages through text search, and (optionally)
/// resolves per-place details. A failed detail lookup degrades that one
/// record (phone and website stay absent) and never aborts the run.
///
/// # Errors
///
/// Returns [`PlacesError`] when geocoding or the text search itself fails;
/// those happen before any record exists, so there is nothing to degrade to.
pub async fn discover(
    client: &PlacesClient,
    query: &str,
    location: &str,
    options: &DiscoverOptions,
) -> Result<Vec<BusinessRecord>, PlacesError> {
    let (lat, lng) = client.geocode(location).await?;
    tracing::debug!(location, lat, lng, "geocoded search location");

    let places = client
        .text_search(
            query,
            lat,
            lng,
            options.radius_m,
            options.max_results,
            options.page_delay_ms,
        )
        .await?;
    tracing::info!(count = places.len(), query, "text search complete");

    let mut records = Vec::with_capacity(places.len());
    for place in places {
        let mut record = place_to_record(&place);

        if options.fetch_details {
            match client.place_details(&place.place_id).await {
                Ok(details) => {
                    record.phone = details.formatted_phone_number;
                    record.website = details.website;
                    if let Some(url) = details.url {
                        record.maps_url = url;
                    }
                }
                Err(error) => {
                    tracing::warn!(
                        business = %record.name,
                        error = %error,
                        "place details lookup failed; keeping search-level fields"
                    );
                }
            }
        }

        records.push(record);
    }

    Ok(records)
}

/// Maps one search result onto a [`BusinessRecord`].
///
/// `maps_url` starts as the place-id lookup URL so the field is always
/// present even when the detail call is skipped or fails.
fn place_to_record(place: &PlaceResult) -> BusinessRecord {
    BusinessRecord {
        name: place.name.clone(),
        address: place.formatted_address.clone().unwrap_or_default(),
        phone: None,
        website: None,
        rating: place.rating,
        rating_count: place.user_ratings_total,
        business_status: place.business_status.unwrap_or_default(),
        categories: place.types.clone(),
        maps_url: format!(
            "https://www.google.com/maps/place/?q=place_id:{}",
            place.place_id
        ),
    }
}
