//! Integration tests for the spreadsheet sink against wiremock.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use leadscout_core::types::{
    BusinessRecord, BusinessStatus, EnrichedRecord, OwnershipLabel, QualityScore, WebSignals,
};
use leadscout_export::{ExportError, SheetsClient};

fn record(name: &str) -> EnrichedRecord {
    EnrichedRecord {
        business: BusinessRecord {
            name: name.to_string(),
            address: "500 Congress Ave, Austin, TX".to_string(),
            phone: None,
            website: None,
            rating: Some(4.1),
            rating_count: Some(52),
            business_status: BusinessStatus::Operational,
            categories: vec!["dentist".to_string()],
            maps_url: "https://maps.google.com/?cid=7".to_string(),
        },
        signals: WebSignals::default(),
        score: QualityScore::default(),
        ownership: OwnershipLabel::Unknown,
    }
}

fn test_client(server: &MockServer) -> SheetsClient {
    SheetsClient::with_base_url("test-key", 5, &server.uri())
        .expect("failed to build test SheetsClient")
}

#[tokio::test]
async fn export_clears_then_updates_and_returns_sheet_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/spreadsheets/sheet-1/values/Sheet1:clear"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v4/spreadsheets/sheet-1/values/Sheet1!A1"))
        .and(query_param("valueInputOption", "RAW"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let url = test_client(&server)
        .export("sheet-1", "Sheet1", &[record("Smile Dental")])
        .await
        .unwrap();

    assert_eq!(url, "https://docs.google.com/spreadsheets/d/sheet-1");

    let requests = server.received_requests().await.unwrap();
    let update = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .expect("update request sent");
    let body: serde_json::Value = serde_json::from_slice(&update.body).unwrap();
    assert_eq!(body["range"], "Sheet1!A1");
    assert_eq!(body["values"][0][0], "Name");
    assert_eq!(body["values"][1][0], "Smile Dental");
}

#[tokio::test]
async fn export_surfaces_clear_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .export("sheet-1", "Sheet1", &[record("Smile Dental")])
        .await;

    assert!(
        matches!(result, Err(ExportError::HttpStatus { status: 403, .. })),
        "expected HttpStatus(403), got: {result:?}"
    );
}

#[tokio::test]
async fn export_surfaces_update_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .export("sheet-1", "Sheet1", &[record("Smile Dental")])
        .await;

    assert!(
        matches!(result, Err(ExportError::HttpStatus { status: 500, .. })),
        "expected HttpStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn empty_record_list_still_writes_header_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&serde_json::json!({})))
        .mount(&server)
        .await;

    test_client(&server)
        .export("sheet-1", "Sheet1", &[])
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let update = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .expect("update request sent");
    let body: serde_json::Value = serde_json::from_slice(&update.body).unwrap();
    assert_eq!(body["values"].as_array().unwrap().len(), 1);
}
