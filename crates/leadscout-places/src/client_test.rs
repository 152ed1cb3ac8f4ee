use super::*;

fn client() -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, "https://maps.googleapis.com")
        .expect("failed to build test PlacesClient")
}

#[test]
fn build_url_appends_key_then_params() {
    let url = client().build_url("maps/api/geocode/json", &[("address", "Austin, TX")]);
    assert_eq!(
        url,
        "https://maps.googleapis.com/maps/api/geocode/json?key=test-key&address=Austin%2C+TX"
    );
}

#[test]
fn build_url_with_no_params_still_carries_key() {
    let url = client().build_url("maps/api/place/textsearch/json", &[]);
    assert_eq!(
        url,
        "https://maps.googleapis.com/maps/api/place/textsearch/json?key=test-key"
    );
}

#[test]
fn with_base_url_tolerates_trailing_slash() {
    let client = PlacesClient::with_base_url("test-key", 5, "https://maps.googleapis.com/")
        .expect("trailing slash should be accepted");
    let url = client.build_url("maps/api/geocode/json", &[("address", "Austin")]);
    assert_eq!(
        url,
        "https://maps.googleapis.com/maps/api/geocode/json?key=test-key&address=Austin"
    );
}

#[test]
fn with_base_url_rejects_garbage() {
    let result = PlacesClient::with_base_url("test-key", 5, "not a url");
    assert!(
        matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got an Ok or different error"
    );
}
