use crate::error::{CheckError, Result};
use url::Url;

/// Returns true when a raw `key=value` query chunk is a tracking parameter.
///
/// Matching is deliberately loose and operates on the whole chunk: anything
/// whose lowercased text starts with `utm_` or `fbclid=` is dropped. A bare
/// `fbclid` with no `=` is kept, as is `fbclid2=x`.
fn is_tracking_param(chunk: &str) -> bool {
    let lower = chunk.to_ascii_lowercase();
    lower.starts_with("utm_") || lower.starts_with("fbclid=")
}

/// Canonicalize a user-supplied URL into a stable fetch target.
///
/// The scheme defaults to `https` when absent, the fragment is removed, and
/// tracking query parameters are stripped. Normalization is pure and
/// idempotent; the only error path is input that does not parse as an
/// absolute HTTP(S) URL with a host.
pub fn normalize(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CheckError::InvalidUrl("empty URL".to_string()));
    }

    // Default the scheme before parsing; protocol-relative inputs get the
    // same treatment.
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches("//"))
    };

    let mut url = Url::parse(&candidate)
        .map_err(|e| CheckError::InvalidUrl(format!("{}: {}", raw, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CheckError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            url.scheme(),
            raw
        )));
    }
    if url.host_str().is_none() {
        return Err(CheckError::InvalidUrl(format!("no host in {}", raw)));
    }

    url.set_fragment(None);

    if let Some(query) = url.query().map(str::to_owned) {
        let kept: Vec<&str> = query
            .split('&')
            .filter(|chunk| !chunk.is_empty() && !is_tracking_param(chunk))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&kept.join("&")));
        }
    }

    Ok(url)
}
