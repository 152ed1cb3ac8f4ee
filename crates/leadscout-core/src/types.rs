//! Domain types shared across discovery, enrichment, and export.

use serde::{Deserialize, Serialize};

/// Operational status reported by the places API.
///
/// Deserialized from the wire's SCREAMING_SNAKE strings; anything
/// unrecognized maps to [`BusinessStatus::Unknown`] rather than failing the
/// whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessStatus::Operational => write!(f, "OPERATIONAL"),
            BusinessStatus::ClosedTemporarily => write!(f, "CLOSED_TEMPORARILY"),
            BusinessStatus::ClosedPermanently => write!(f, "CLOSED_PERMANENTLY"),
            BusinessStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One discovered business, as produced by the places search.
///
/// `name` and `maps_url` are always present (discovery guarantees a fallback
/// maps URL built from the place id); every other field may be absent when
/// the upstream source lacks data. Enrichment never mutates a record; it
/// produces an [`EnrichedRecord`] owning a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Average review rating in `[0, 5]`.
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
    pub business_status: BusinessStatus,
    pub categories: Vec<String>,
    pub maps_url: String,
}

/// Signals extracted from one website fetch attempt.
///
/// When `fetch_succeeded` is false every other field holds its default,
/// except `status_code`, which is recorded when a non-2xx response was
/// actually received. The record never claims signals it could not observe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSignals {
    pub fetch_succeeded: bool,
    pub status_code: Option<u16>,
    pub has_ssl: bool,
    pub has_contact_form: bool,
    pub has_mobile_viewport: bool,
    /// Distinct social platforms linked from the page.
    pub social_link_count: u32,
    /// Character length of the page title, 0 if absent.
    pub title_length: u32,
    pub response_time_ms: Option<u64>,
}

/// One itemized line of a [`QualityScore`]: which signal fired and for how
/// many points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContribution {
    pub signal: String,
    pub points: i32,
}

/// Bounded web-presence score plus the contributions that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    /// Composite score in `[0, 100]`.
    pub total: u8,
    /// Awarded deltas in evaluation order; empty when the fetch failed.
    pub contributions: Vec<ScoreContribution>,
}

/// Categorical ownership classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipLabel {
    IndependentSingleLocation,
    LocalChain,
    FranchiseOrBrand,
    #[default]
    Unknown,
}

impl std::fmt::Display for OwnershipLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwnershipLabel::IndependentSingleLocation => write!(f, "INDEPENDENT_SINGLE_LOCATION"),
            OwnershipLabel::LocalChain => write!(f, "LOCAL_CHAIN"),
            OwnershipLabel::FranchiseOrBrand => write!(f, "FRANCHISE_OR_BRAND"),
            OwnershipLabel::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A business together with its qualification results: the unit handed to
/// export. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub business: BusinessRecord,
    pub signals: WebSignals,
    pub score: QualityScore,
    pub ownership: OwnershipLabel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_status_deserializes_wire_strings() {
        let status: BusinessStatus = serde_yaml::from_str("OPERATIONAL").unwrap();
        assert_eq!(status, BusinessStatus::Operational);
        let status: BusinessStatus = serde_yaml::from_str("CLOSED_TEMPORARILY").unwrap();
        assert_eq!(status, BusinessStatus::ClosedTemporarily);
    }

    #[test]
    fn business_status_unknown_string_maps_to_unknown() {
        let status: BusinessStatus = serde_yaml::from_str("SOMETHING_NEW").unwrap();
        assert_eq!(status, BusinessStatus::Unknown);
    }

    #[test]
    fn business_status_display_round_trips_wire_form() {
        assert_eq!(
            BusinessStatus::ClosedPermanently.to_string(),
            "CLOSED_PERMANENTLY"
        );
        assert_eq!(BusinessStatus::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn ownership_label_display_wire_form() {
        assert_eq!(
            OwnershipLabel::IndependentSingleLocation.to_string(),
            "INDEPENDENT_SINGLE_LOCATION"
        );
        assert_eq!(OwnershipLabel::LocalChain.to_string(), "LOCAL_CHAIN");
        assert_eq!(
            OwnershipLabel::FranchiseOrBrand.to_string(),
            "FRANCHISE_OR_BRAND"
        );
    }

    #[test]
    fn default_signals_claim_nothing() {
        let signals = WebSignals::default();
        assert!(!signals.fetch_succeeded);
        assert!(!signals.has_ssl);
        assert!(!signals.has_contact_form);
        assert!(!signals.has_mobile_viewport);
        assert_eq!(signals.social_link_count, 0);
        assert_eq!(signals.title_length, 0);
        assert_eq!(signals.status_code, None);
        assert_eq!(signals.response_time_ms, None);
    }
}
