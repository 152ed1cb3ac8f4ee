//! Ownership classification: a fixed-priority rule cascade over business
//! metadata and extracted web signals.

use leadscout_core::qualification::ClassifierPolicy;
use leadscout_core::types::{BusinessRecord, OwnershipLabel, WebSignals};

/// Classifies a business's likely ownership structure.
///
/// Rules are evaluated in priority order; the first match wins:
///
/// 1. name or categories carry a configured franchise/brand marker →
///    [`OwnershipLabel::FranchiseOrBrand`];
/// 2. high rating count and a website domain that does not resemble the
///    business name → [`OwnershipLabel::LocalChain`];
/// 3. website served over SSL with a domain closely matching the name →
///    [`OwnershipLabel::IndependentSingleLocation`];
/// 4. anything else → [`OwnershipLabel::Unknown`].
///
/// Ambiguity always falls through to `Unknown`. A record without a website
/// can only match rule 1.
#[must_use]
pub fn classify_ownership(
    business: &BusinessRecord,
    signals: &WebSignals,
    policy: &ClassifierPolicy,
) -> OwnershipLabel {
    if matches_franchise_markers(business, policy) {
        return OwnershipLabel::FranchiseOrBrand;
    }

    if let Some(domain) = business.website.as_deref().and_then(domain_label) {
        let similarity = name_domain_similarity(&business.name, &domain);

        if business.rating_count.unwrap_or(0) >= policy.chain_rating_count
            && similarity < policy.domain_similarity
        {
            return OwnershipLabel::LocalChain;
        }

        if signals.has_ssl && similarity >= policy.domain_similarity {
            return OwnershipLabel::IndependentSingleLocation;
        }
    }

    OwnershipLabel::Unknown
}

fn matches_franchise_markers(business: &BusinessRecord, policy: &ClassifierPolicy) -> bool {
    let name = business.name.to_lowercase();
    if policy
        .franchise_tokens
        .iter()
        .any(|token| name.contains(&token.to_lowercase()))
    {
        return true;
    }

    business.categories.iter().any(|category| {
        policy
            .franchise_categories
            .iter()
            .any(|tag| category.eq_ignore_ascii_case(tag))
    })
}

/// First registrable label of a website's host: scheme and `www.` stripped,
/// everything from the first dot on dropped (`https://www.joes-pizza.com/x`
/// → `joes-pizza`).
pub(crate) fn domain_label(website: &str) -> Option<String> {
    let rest = website
        .split_once("://")
        .map_or(website, |(_, rest)| rest)
        .trim_start_matches("www.");
    let host = rest.split(['/', '?', '#', ':']).next().unwrap_or_default();
    let label = host.split('.').next().unwrap_or_default().to_lowercase();
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Similarity between a business name and a domain label in `[0, 1]`.
///
/// Both sides are reduced to lowercase alphanumerics. Containment in either
/// direction counts as a full match; otherwise character-bigram Dice overlap.
pub(crate) fn name_domain_similarity(name: &str, domain_label: &str) -> f64 {
    let name = alphanumeric(name);
    let domain = alphanumeric(domain_label);
    if name.is_empty() || domain.is_empty() {
        return 0.0;
    }
    if name.contains(&domain) || domain.contains(&name) {
        return 1.0;
    }
    bigram_dice(&name, &domain)
}

fn alphanumeric(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}

fn bigram_dice(a: &str, b: &str) -> f64 {
    let a_bigrams = bigrams(a);
    let b_bigrams = bigrams(b);
    if a_bigrams.is_empty() || b_bigrams.is_empty() {
        return 0.0;
    }

    let mut remaining = b_bigrams.clone();
    let mut shared = 0usize;
    for bigram in &a_bigrams {
        if let Some(pos) = remaining.iter().position(|other| other == bigram) {
            remaining.swap_remove(pos);
            shared += 1;
        }
    }

    // Bigram counts are bounded by string length; no precision loss at any
    // realistic input size.
    #[allow(clippy::cast_precision_loss)]
    let dice = (2.0 * shared as f64) / ((a_bigrams.len() + b_bigrams.len()) as f64);
    dice
}

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
