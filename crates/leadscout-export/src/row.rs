//! Flat-row rendering shared by every export sink.

use leadscout_core::types::EnrichedRecord;

/// Column layout for exported leads, in order. Both sinks emit exactly this
/// header row followed by one row per record, in discovery order.
pub const HEADERS: [&str; 11] = [
    "Name",
    "Address",
    "Phone",
    "Website",
    "Rating",
    "Total Ratings",
    "Business Status",
    "Types",
    "Google Maps URL",
    "Quality Score",
    "Ownership Label",
];

/// Renders one record as cell values matching [`HEADERS`]. Absent optionals
/// become empty cells.
#[must_use]
pub fn record_to_row(record: &EnrichedRecord) -> Vec<String> {
    let business = &record.business;
    vec![
        business.name.clone(),
        business.address.clone(),
        business.phone.clone().unwrap_or_default(),
        business.website.clone().unwrap_or_default(),
        business.rating.map(|r| r.to_string()).unwrap_or_default(),
        business
            .rating_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
        business.business_status.to_string(),
        business.categories.join(", "),
        business.maps_url.clone(),
        record.score.total.to_string(),
        record.ownership.to_string(),
    ]
}
