//! Per-record enrichment and the order-preserving batch runner.

use futures::stream::{self, StreamExt};
use leadscout_core::qualification::QualificationPolicy;
use leadscout_core::types::{BusinessRecord, EnrichedRecord};

use crate::classify::classify_ownership;
use crate::error::FetchError;
use crate::fetch::SiteFetcher;
use crate::score::score_signals;
use crate::signals::extract_signals;

/// Runs the full fetch → extract → score → classify chain for one business.
///
/// Infallible by design: a missing, unreachable, or broken website degrades
/// to default signals (score 0, possibly `UNKNOWN` ownership) and the record
/// still flows to export.
pub async fn enrich_business(
    fetcher: &SiteFetcher,
    policy: &QualificationPolicy,
    business: &BusinessRecord,
) -> EnrichedRecord {
    let outcome = match business.website.as_deref() {
        Some(url) => fetcher.fetch(url).await,
        None => Err(FetchError::NoWebsite),
    };

    if let Err(error) = &outcome {
        tracing::debug!(
            business = %business.name,
            error = %error,
            "website fetch failed; continuing with default signals"
        );
    }

    let signals = extract_signals(&outcome, &policy.signals);
    let score = score_signals(&signals, &policy.weights);
    let ownership = classify_ownership(business, &signals, &policy.classifier);

    EnrichedRecord {
        business: business.clone(),
        signals,
        score,
        ownership,
    }
}

/// Enriches a batch of businesses with at most `max_concurrent` fetches in
/// flight.
///
/// Uses `buffered` rather than `buffer_unordered`: export order must equal
/// discovery order, whatever the completion order of individual fetches.
/// Records are independent, so `max_concurrent` is purely a resource knob;
/// `1` gives the sequential baseline.
pub async fn enrich_all(
    fetcher: &SiteFetcher,
    policy: &QualificationPolicy,
    businesses: &[BusinessRecord],
    max_concurrent: usize,
) -> Vec<EnrichedRecord> {
    stream::iter(businesses)
        .map(|business| enrich_business(fetcher, policy, business))
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}
