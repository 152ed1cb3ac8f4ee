use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Caps applied while extracting signals from fetched markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalPolicy {
    /// Maximum number of distinct social platforms recorded per page.
    #[serde(default = "default_social_link_cap")]
    pub social_link_cap: u32,
}

/// Point weights for the web-presence quality score.
///
/// Every field has a serde default matching the shipped
/// `config/qualification.yaml`, so a partial policy file only needs to name
/// the values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_ssl")]
    pub ssl: u32,
    #[serde(default = "default_mobile_viewport")]
    pub mobile_viewport: u32,
    #[serde(default = "default_contact_form")]
    pub contact_form: u32,
    /// Awarded when the title is non-empty and at most `title_max_len` chars.
    #[serde(default = "default_title")]
    pub title: u32,
    /// Partial credit for a title longer than `title_max_len`.
    #[serde(default = "default_title_overlong")]
    pub title_overlong: u32,
    #[serde(default = "default_title_max_len")]
    pub title_max_len: u32,
    #[serde(default = "default_social_per_platform")]
    pub social_per_platform: u32,
    /// Upper bound on the total social-link contribution.
    #[serde(default = "default_social_cap")]
    pub social_cap: u32,
    #[serde(default = "default_response_fast")]
    pub response_fast: u32,
    #[serde(default = "default_response_slow")]
    pub response_slow: u32,
    #[serde(default = "default_fast_threshold_ms")]
    pub fast_threshold_ms: u64,
    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: u64,
}

/// Thresholds and marker lists for the ownership rule cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierPolicy {
    /// Lowercased substring match against the business name.
    #[serde(default)]
    pub franchise_tokens: Vec<String>,
    /// Case-insensitive exact match against upstream category tags.
    #[serde(default)]
    pub franchise_categories: Vec<String>,
    /// Rating-count floor for the local-chain rule.
    #[serde(default = "default_chain_rating_count")]
    pub chain_rating_count: u32,
    /// Name↔domain similarity threshold in `[0, 1]`.
    #[serde(default = "default_domain_similarity")]
    pub domain_similarity: f64,
}

/// Full qualification policy: signal caps, score weights, classifier rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationPolicy {
    #[serde(default)]
    pub signals: SignalPolicy,
    #[serde(default)]
    pub weights: ScoreWeights,
    #[serde(default)]
    pub classifier: ClassifierPolicy,
}

fn default_social_link_cap() -> u32 {
    8
}
fn default_ssl() -> u32 {
    15
}
fn default_mobile_viewport() -> u32 {
    15
}
fn default_contact_form() -> u32 {
    20
}
fn default_title() -> u32 {
    10
}
fn default_title_overlong() -> u32 {
    5
}
fn default_title_max_len() -> u32 {
    70
}
fn default_social_per_platform() -> u32 {
    5
}
fn default_social_cap() -> u32 {
    20
}
fn default_response_fast() -> u32 {
    20
}
fn default_response_slow() -> u32 {
    10
}
fn default_fast_threshold_ms() -> u64 {
    1000
}
fn default_slow_threshold_ms() -> u64 {
    3000
}
fn default_chain_rating_count() -> u32 {
    500
}
fn default_domain_similarity() -> f64 {
    0.6
}

impl Default for SignalPolicy {
    fn default() -> Self {
        Self {
            social_link_cap: default_social_link_cap(),
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            ssl: default_ssl(),
            mobile_viewport: default_mobile_viewport(),
            contact_form: default_contact_form(),
            title: default_title(),
            title_overlong: default_title_overlong(),
            title_max_len: default_title_max_len(),
            social_per_platform: default_social_per_platform(),
            social_cap: default_social_cap(),
            response_fast: default_response_fast(),
            response_slow: default_response_slow(),
            fast_threshold_ms: default_fast_threshold_ms(),
            slow_threshold_ms: default_slow_threshold_ms(),
        }
    }
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            franchise_tokens: Vec::new(),
            franchise_categories: Vec::new(),
            chain_rating_count: default_chain_rating_count(),
            domain_similarity: default_domain_similarity(),
        }
    }
}

impl Default for QualificationPolicy {
    fn default() -> Self {
        Self {
            signals: SignalPolicy::default(),
            weights: ScoreWeights::default(),
            classifier: ClassifierPolicy::default(),
        }
    }
}

/// Load and validate the qualification policy from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_qualification(path: &Path) -> Result<QualificationPolicy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PolicyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let policy: QualificationPolicy =
        serde_yaml::from_str(&content).map_err(ConfigError::PolicyFileParse)?;

    validate_qualification(&policy)?;

    Ok(policy)
}

fn validate_qualification(policy: &QualificationPolicy) -> Result<(), ConfigError> {
    let weights = &policy.weights;
    if weights.title_max_len == 0 {
        return Err(ConfigError::Validation(
            "title_max_len must be at least 1".to_string(),
        ));
    }
    if weights.fast_threshold_ms > weights.slow_threshold_ms {
        return Err(ConfigError::Validation(format!(
            "fast_threshold_ms ({}) must not exceed slow_threshold_ms ({})",
            weights.fast_threshold_ms, weights.slow_threshold_ms
        )));
    }
    if weights.social_cap < weights.social_per_platform {
        return Err(ConfigError::Validation(format!(
            "social_cap ({}) must be at least social_per_platform ({})",
            weights.social_cap, weights.social_per_platform
        )));
    }

    let classifier = &policy.classifier;
    if !(0.0..=1.0).contains(&classifier.domain_similarity) {
        return Err(ConfigError::Validation(format!(
            "domain_similarity must be within [0, 1], got {}",
            classifier.domain_similarity
        )));
    }
    if classifier.chain_rating_count == 0 {
        return Err(ConfigError::Validation(
            "chain_rating_count must be at least 1".to_string(),
        ));
    }

    let mut seen_tokens = HashSet::new();
    for token in &classifier.franchise_tokens {
        if token.trim().is_empty() {
            return Err(ConfigError::Validation(
                "franchise tokens must be non-empty".to_string(),
            ));
        }
        if !seen_tokens.insert(token.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate franchise token: '{token}'"
            )));
        }
    }

    let mut seen_categories = HashSet::new();
    for category in &classifier.franchise_categories {
        if category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "franchise categories must be non-empty".to_string(),
            ));
        }
        if !seen_categories.insert(category.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate franchise category: '{category}'"
            )));
        }
    }

    Ok(())
}
