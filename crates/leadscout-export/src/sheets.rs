//! Remote spreadsheet export sink, via the Sheets values REST endpoints.

use std::time::Duration;

use reqwest::{Client, Url};

use leadscout_core::types::EnrichedRecord;

use crate::error::ExportError;
use crate::row::{record_to_row, HEADERS};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/";

/// Client for writing lead rows to a spreadsheet.
///
/// The export clears the worksheet, then writes the header plus one row per
/// record starting at `A1`. Use [`SheetsClient::with_base_url`] to point at
/// a mock server in tests.
pub struct SheetsClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl SheetsClient {
    /// Creates a new client pointed at the production spreadsheet API.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, ExportError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ExportError::InvalidBaseUrl`] if
    /// `base_url` does not parse as an absolute http(s) URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ExportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadscout/0.1 (lead-qualification)")
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| ExportError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ExportError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "not a base URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
        })
    }

    /// Replaces the worksheet's contents with the header and `records`.
    ///
    /// Returns the spreadsheet's browser URL.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] on transport failure or
    /// [`ExportError::HttpStatus`] when either the clear or the update call
    /// answers non-2xx.
    pub async fn export(
        &self,
        spreadsheet_id: &str,
        worksheet: &str,
        records: &[EnrichedRecord],
    ) -> Result<String, ExportError> {
        let clear_url = self.values_url(spreadsheet_id, &format!("{worksheet}:clear"), &[]);
        let response = self.client.post(clear_url.clone()).send().await?;
        check_status(&response, &clear_url)?;

        let mut values: Vec<Vec<String>> =
            vec![HEADERS.iter().map(ToString::to_string).collect()];
        values.extend(records.iter().map(record_to_row));

        let range = format!("{worksheet}!A1");
        let update_url = self.values_url(
            spreadsheet_id,
            &range,
            &[("valueInputOption", "RAW")],
        );
        let body = serde_json::json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": values,
        });

        let response = self.client.put(update_url.clone()).json(&body).send().await?;
        check_status(&response, &update_url)?;

        tracing::info!(rows = records.len(), spreadsheet_id, "wrote spreadsheet export");
        Ok(format!(
            "https://docs.google.com/spreadsheets/d/{spreadsheet_id}"
        ))
    }

    /// Builds `v4/spreadsheets/{id}/values/{range}` with key and params.
    fn values_url(&self, spreadsheet_id: &str, range: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .expect("base URL validated as http(s)")
            .pop_if_empty()
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);

        url.query_pairs_mut().append_pair("key", &self.api_key);
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }
        url
    }
}

fn check_status(response: &reqwest::Response, url: &Url) -> Result<(), ExportError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ExportError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
