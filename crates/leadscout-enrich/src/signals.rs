//! Markup scanning: turns one fetch outcome into a [`WebSignals`] value.
//!
//! Extraction is regex-based, in the same spirit as the structured-data
//! scans elsewhere in this workspace: each signal is scanned independently,
//! and malformed markup degrades that signal to its default instead of
//! failing the extraction.

use leadscout_core::qualification::SignalPolicy;
use leadscout_core::types::WebSignals;
use regex::Regex;

use crate::error::FetchError;
use crate::fetch::FetchedPage;

/// Social platforms recognized in hyperlink targets. Aliases of the same
/// platform (twitter/x, facebook/fb) count once.
const SOCIAL_PLATFORMS: &[(&str, &[&str])] = &[
    ("facebook", &["facebook.com", "fb.com"]),
    ("instagram", &["instagram.com"]),
    ("linkedin", &["linkedin.com"]),
    ("twitter", &["twitter.com", "x.com"]),
];

/// Produces the signal set for one fetch outcome.
///
/// A failed fetch yields the all-default [`WebSignals`], keeping only the
/// HTTP status when a response was actually received.
#[must_use]
pub fn extract_signals(
    outcome: &Result<FetchedPage, FetchError>,
    policy: &SignalPolicy,
) -> WebSignals {
    match outcome {
        Ok(page) => WebSignals {
            fetch_succeeded: true,
            status_code: Some(page.status),
            has_ssl: page.final_url.starts_with("https://"),
            has_contact_form: has_contact_form(&page.body),
            has_mobile_viewport: has_mobile_viewport(&page.body),
            social_link_count: count_social_platforms(&page.body, policy.social_link_cap),
            title_length: title_length(&page.body),
            response_time_ms: Some(page.elapsed_ms),
        },
        Err(error) => WebSignals {
            status_code: match error {
                FetchError::HttpStatus { status, .. } => Some(*status),
                _ => None,
            },
            ..WebSignals::default()
        },
    }
}

/// Character length of the `<title>` text, 0 when absent or empty.
pub(crate) fn title_length(html: &str) -> u32 {
    let title_re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex");
    let Some(cap) = title_re.captures(html) else {
        return 0;
    };
    let text = cap.get(1).map_or("", |m| m.as_str()).trim();
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

pub(crate) fn has_mobile_viewport(html: &str) -> bool {
    let viewport_re =
        Regex::new(r#"(?is)<meta[^>]*name\s*=\s*["']?viewport["']?"#).expect("valid regex");
    viewport_re.is_match(html)
}

/// True when a form block suggests contact intent: an email/tel input, or a
/// submit control inside a block that mentions "contact".
pub(crate) fn has_contact_form(html: &str) -> bool {
    let form_re = Regex::new(r"(?is)<form\b[^>]*>.*?</form>").expect("valid regex");
    let contact_input_re =
        Regex::new(r#"(?i)type\s*=\s*["']?(?:email|tel)\b"#).expect("valid regex");
    let submit_re = Regex::new(r#"(?i)type\s*=\s*["']?submit\b"#).expect("valid regex");

    for block in form_re.find_iter(html) {
        let block = block.as_str();
        if contact_input_re.is_match(block) {
            return true;
        }
        if submit_re.is_match(block) && block.to_lowercase().contains("contact") {
            return true;
        }
    }
    false
}

/// Counts DISTINCT social platforms among the page's hyperlink targets,
/// capped at `cap`. Relative links and lookalike hosts (`notfacebook.com`)
/// do not count; subdomains (`www.facebook.com`, `m.facebook.com`) do.
pub(crate) fn count_social_platforms(html: &str, cap: u32) -> u32 {
    let href_re = Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).expect("valid regex");

    let mut found = [false; SOCIAL_PLATFORMS.len()];
    for cap_match in href_re.captures_iter(html) {
        let Some(host) = link_host(cap_match.get(1).map_or("", |m| m.as_str())) else {
            continue;
        };
        for (idx, (_, domains)) in SOCIAL_PLATFORMS.iter().enumerate() {
            if domains.iter().any(|d| host_matches(&host, d)) {
                found[idx] = true;
            }
        }
    }

    let count = found.iter().filter(|&&hit| hit).count();
    u32::try_from(count).unwrap_or(u32::MAX).min(cap)
}

/// Lower-cased host of an absolute or protocol-relative link target.
/// Returns `None` for relative links, which cannot point off-site.
fn link_host(href: &str) -> Option<String> {
    let rest = if let Some((_, rest)) = href.split_once("://") {
        rest
    } else if let Some(rest) = href.strip_prefix("//") {
        rest
    } else {
        return None;
    };

    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('@')
        .next()
        .unwrap_or_default();
    let host = authority.split(':').next().unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

#[cfg(test)]
#[path = "signals_test.rs"]
mod tests;
