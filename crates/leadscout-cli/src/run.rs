//! Pipeline handler: discover → qualify → summarize → export.
//!
//! Startup failures (missing key, bad policy file) surface before any
//! business is processed. Per-business failures never abort the run; a
//! business with no reachable website still appears in the export.

use leadscout_core::app_config::AppConfig;
use leadscout_core::types::{EnrichedRecord, OwnershipLabel};
use leadscout_enrich::SiteFetcher;
use leadscout_export::SheetsClient;
use leadscout_places::{discover, DiscoverOptions, PlacesClient};

use crate::Cli;

/// Upstream caps on the search surface.
const MAX_RADIUS_M: u32 = 50_000;
const MAX_RESULTS: usize = 60;

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    // Policy problems are fatal here, before any business is processed.
    let policy = leadscout_core::load_qualification(&config.qualification_path)?;
    tracing::debug!(?config, "configuration loaded");

    let places = PlacesClient::new(&config.google_maps_api_key, config.places_timeout_secs)?;
    let options = DiscoverOptions {
        radius_m: cli.radius.min(MAX_RADIUS_M),
        max_results: cli.max_results.min(MAX_RESULTS),
        page_delay_ms: config.places_page_delay_ms,
        fetch_details: !cli.no_details,
    };

    println!("Searching for '{}' near {}...", cli.query, cli.location);
    let businesses = discover(&places, &cli.query, &cli.location, &options).await?;
    println!("Found {} businesses.", businesses.len());

    if businesses.is_empty() {
        println!("No results found. Try broadening the search.");
        return Ok(());
    }

    let records: Vec<EnrichedRecord> = if cli.no_qualify {
        businesses.iter().map(unqualified_record).collect()
    } else {
        println!("Qualifying websites ({} businesses)...", businesses.len());
        let fetcher = SiteFetcher::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
        let records = leadscout_enrich::enrich_all(
            &fetcher,
            &policy,
            &businesses,
            config.max_concurrent_fetches,
        )
        .await;
        print_summary(&records);
        records
    };

    if let Some(sheet_id) = &cli.sheet_id {
        let key = config
            .sheets_api_key
            .as_deref()
            .unwrap_or(&config.google_maps_api_key);
        let sheets = SheetsClient::new(key, config.places_timeout_secs)?;
        let url = sheets.export(sheet_id, &cli.worksheet, &records).await?;
        println!("Done. {} businesses exported to {url}", records.len());
    } else {
        let path = leadscout_export::write_csv(&cli.output, &records)?;
        println!(
            "Done. {} businesses saved to {}",
            records.len(),
            path.display()
        );
    }

    Ok(())
}

/// Wraps a discovered business without qualification: default signals,
/// score 0, ownership `UNKNOWN`. Keeps the export columns stable when
/// `--no-qualify` is set.
fn unqualified_record(business: &leadscout_core::types::BusinessRecord) -> EnrichedRecord {
    EnrichedRecord {
        business: business.clone(),
        signals: leadscout_core::types::WebSignals::default(),
        score: leadscout_core::types::QualityScore::default(),
        ownership: OwnershipLabel::Unknown,
    }
}

fn print_summary(records: &[EnrichedRecord]) {
    let independent = count_label(records, OwnershipLabel::IndependentSingleLocation);
    let chain = count_label(records, OwnershipLabel::LocalChain);
    let franchise = count_label(records, OwnershipLabel::FranchiseOrBrand);
    let unknown = count_label(records, OwnershipLabel::Unknown);

    let scored: Vec<&EnrichedRecord> = records.iter().filter(|r| r.score.total > 0).collect();
    let high_quality = scored.iter().filter(|r| r.score.total >= 60).count();
    let avg_score = if scored.is_empty() {
        0.0
    } else {
        let sum: u32 = scored.iter().map(|r| u32::from(r.score.total)).sum();
        f64::from(sum) / scored.len() as f64
    };

    println!(
        "\n  Ownership: {independent} independent | {chain} local chain | {franchise} franchise/brand | {unknown} unknown"
    );
    println!("  Quality:   {high_quality} high-scoring leads (avg score: {avg_score:.0}/100)\n");
}

fn count_label(records: &[EnrichedRecord], label: OwnershipLabel) -> usize {
    records.iter().filter(|r| r.ownership == label).count()
}

#[cfg(test)]
mod tests {
    use leadscout_core::types::{BusinessRecord, BusinessStatus};

    use super::*;

    fn business(name: &str) -> BusinessRecord {
        BusinessRecord {
            name: name.to_string(),
            address: String::new(),
            phone: None,
            website: Some("https://example.com".to_string()),
            rating: None,
            rating_count: None,
            business_status: BusinessStatus::Unknown,
            categories: Vec::new(),
            maps_url: "https://maps.google.com/?cid=1".to_string(),
        }
    }

    #[test]
    fn unqualified_record_claims_no_signals() {
        let record = unqualified_record(&business("Joe's Pizza"));
        assert!(!record.signals.fetch_succeeded);
        assert_eq!(record.score.total, 0);
        assert!(record.score.contributions.is_empty());
        assert_eq!(record.ownership, OwnershipLabel::Unknown);
        assert_eq!(record.business.name, "Joe's Pizza");
    }

    #[test]
    fn count_label_counts_only_matching_records() {
        let records = vec![
            unqualified_record(&business("A")),
            unqualified_record(&business("B")),
        ];
        assert_eq!(count_label(&records, OwnershipLabel::Unknown), 2);
        assert_eq!(count_label(&records, OwnershipLabel::LocalChain), 0);
    }
}
