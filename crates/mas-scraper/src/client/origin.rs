//! Target URL validation for the site client.

use reqwest::Url;

use crate::error::ScraperError;

/// Parses a user-supplied target URL.
///
/// Surrounding whitespace is ignored. Only `http` and `https` URLs with a
/// host are accepted; a bare domain such as `drinkcann.com` is rejected
/// rather than guessed at.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] when the input is empty, does not
/// parse, or uses another scheme.
pub fn parse_target_url(raw: &str) -> Result<Url, ScraperError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: trimmed.to_owned(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("URL is empty".to_owned()));
    }

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host".to_owned()));
    }
    Ok(url)
}

/// Extracts the hostname from a URL for use in log fields.
///
/// Falls back to the full URL string if parsing fails.
pub(super) fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
