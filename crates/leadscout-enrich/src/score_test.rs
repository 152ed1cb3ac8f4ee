use super::*;

fn full_signals() -> WebSignals {
    WebSignals {
        fetch_succeeded: true,
        status_code: Some(200),
        has_ssl: true,
        has_contact_form: true,
        has_mobile_viewport: true,
        social_link_count: 3,
        title_length: 40,
        response_time_ms: Some(300),
    }
}

#[test]
fn failed_fetch_scores_zero_with_empty_contributions() {
    let score = score_signals(&WebSignals::default(), &ScoreWeights::default());
    assert_eq!(score.total, 0);
    assert!(score.contributions.is_empty());
}

#[test]
fn default_weights_full_signal_scenario_totals_95() {
    // ssl 15 + viewport 15 + contact form 20 + title 10 + social 15 + fast 20
    let score = score_signals(&full_signals(), &ScoreWeights::default());
    assert_eq!(score.total, 95);
    let breakdown: Vec<(&str, i32)> = score
        .contributions
        .iter()
        .map(|c| (c.signal.as_str(), c.points))
        .collect();
    assert_eq!(
        breakdown,
        vec![
            ("ssl", 15),
            ("mobile_viewport", 15),
            ("contact_form", 20),
            ("title", 10),
            ("social_links", 15),
            ("response_fast", 20),
        ]
    );
}

#[test]
fn every_bonus_maxed_stays_within_100() {
    let mut signals = full_signals();
    signals.social_link_count = 8;
    let score = score_signals(&signals, &ScoreWeights::default());
    assert_eq!(score.total, 100);
}

#[test]
fn inflated_weight_table_clamps_to_100() {
    let weights = ScoreWeights {
        ssl: 90,
        contact_form: 90,
        ..ScoreWeights::default()
    };
    let score = score_signals(&full_signals(), &weights);
    assert_eq!(score.total, 100);
}

#[test]
fn ssl_is_monotonic() {
    let weights = ScoreWeights::default();
    let mut without_ssl = full_signals();
    without_ssl.has_ssl = false;
    let with_ssl = full_signals();
    assert!(
        score_signals(&with_ssl, &weights).total >= score_signals(&without_ssl, &weights).total
    );
}

#[test]
fn zero_length_title_contributes_nothing() {
    let mut signals = full_signals();
    signals.title_length = 0;
    let score = score_signals(&signals, &ScoreWeights::default());
    assert!(score.contributions.iter().all(|c| c.signal != "title"));
    assert_eq!(score.total, 85);
}

#[test]
fn overlong_title_gets_partial_credit() {
    let mut signals = full_signals();
    signals.title_length = 200;
    let score = score_signals(&signals, &ScoreWeights::default());
    let title = score
        .contributions
        .iter()
        .find(|c| c.signal == "title_overlong")
        .expect("overlong title contribution");
    assert_eq!(title.points, 5);
    assert_eq!(score.total, 90);
}

#[test]
fn social_contribution_caps_at_20() {
    let mut signals = full_signals();
    signals.social_link_count = 6;
    let score = score_signals(&signals, &ScoreWeights::default());
    let social = score
        .contributions
        .iter()
        .find(|c| c.signal == "social_links")
        .expect("social contribution");
    assert_eq!(social.points, 20);
}

#[test]
fn slow_but_not_glacial_response_gets_partial_credit() {
    let mut signals = full_signals();
    signals.response_time_ms = Some(2000);
    let score = score_signals(&signals, &ScoreWeights::default());
    let response = score
        .contributions
        .iter()
        .find(|c| c.signal == "response_slow")
        .expect("slow-response contribution");
    assert_eq!(response.points, 10);
}

#[test]
fn glacial_response_contributes_nothing() {
    let mut signals = full_signals();
    signals.response_time_ms = Some(9000);
    let score = score_signals(&signals, &ScoreWeights::default());
    assert!(score
        .contributions
        .iter()
        .all(|c| !c.signal.starts_with("response")));
}

#[test]
fn unmeasured_response_time_contributes_nothing() {
    let mut signals = full_signals();
    signals.response_time_ms = None;
    let score = score_signals(&signals, &ScoreWeights::default());
    assert!(score
        .contributions
        .iter()
        .all(|c| !c.signal.starts_with("response")));
}

#[test]
fn contributions_sum_to_total_when_under_clamp() {
    let score = score_signals(&full_signals(), &ScoreWeights::default());
    let sum: i32 = score.contributions.iter().map(|c| c.points).sum();
    assert_eq!(sum, i32::from(score.total));
}

#[test]
fn scoring_is_deterministic() {
    let signals = full_signals();
    let weights = ScoreWeights::default();
    assert_eq!(
        score_signals(&signals, &weights),
        score_signals(&signals, &weights)
    );
}
