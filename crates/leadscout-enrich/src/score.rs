//! Web-presence quality scoring.

use leadscout_core::qualification::ScoreWeights;
use leadscout_core::types::{QualityScore, ScoreContribution, WebSignals};

/// Scores one signal set against a weight table.
///
/// Deterministic and pure: a failed fetch scores 0 with no contributions;
/// otherwise fixed per-signal weights accumulate in evaluation order and the
/// total is clamped to `[0, 100]`. All weights are non-negative, so adding a
/// positive signal can never lower the score.
#[must_use]
pub fn score_signals(signals: &WebSignals, weights: &ScoreWeights) -> QualityScore {
    if !signals.fetch_succeeded {
        return QualityScore::default();
    }

    let mut contributions: Vec<ScoreContribution> = Vec::new();
    let mut add = |signal: &str, points: u32| {
        contributions.push(ScoreContribution {
            signal: signal.to_string(),
            points: i32::try_from(points).unwrap_or(i32::MAX),
        });
    };

    if signals.has_ssl {
        add("ssl", weights.ssl);
    }
    if signals.has_mobile_viewport {
        add("mobile_viewport", weights.mobile_viewport);
    }
    if signals.has_contact_form {
        add("contact_form", weights.contact_form);
    }
    if signals.title_length > 0 {
        if signals.title_length <= weights.title_max_len {
            add("title", weights.title);
        } else {
            add("title_overlong", weights.title_overlong);
        }
    }
    if signals.social_link_count > 0 {
        let points = weights
            .social_per_platform
            .saturating_mul(signals.social_link_count)
            .min(weights.social_cap);
        add("social_links", points);
    }
    if let Some(ms) = signals.response_time_ms {
        if ms < weights.fast_threshold_ms {
            add("response_fast", weights.response_fast);
        } else if ms < weights.slow_threshold_ms {
            add("response_slow", weights.response_slow);
        }
    }

    let total: i64 = contributions.iter().map(|c| i64::from(c.points)).sum();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // clamped to 0..=100 on the line above the cast
    let total = total.clamp(0, 100) as u8;

    QualityScore {
        total,
        contributions,
    }
}

#[cfg(test)]
#[path = "score_test.rs"]
mod tests;
