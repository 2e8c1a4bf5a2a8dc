// Externally visible output of a check. Not mutated after construction.

use crate::labels::ClassificationLabels;
use crate::verdict::{Reason, Verdict};
use serde::{Deserialize, Serialize};

/// The two response headers a check is allowed to carry forward. Everything
/// else is dropped so full header data is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadersSubset {
    #[serde(rename = "content-type")]
    pub content_type: Option<String>,
    pub server: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckMeta {
    pub domain: String,
    pub final_url: String,
    pub title: String,
    pub headers_subset: HeadersSubset,
    pub labels: ClassificationLabels,
    pub noise: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub verdict: Verdict,
    pub reasons: Vec<Reason>,
    pub summary: String,
    pub meta: CheckMeta,
}

/// Format summary bullets as a display string, capped at five bullets.
pub fn format_summary(bullets: &[String]) -> String {
    let capped: Vec<&str> = bullets.iter().take(5).map(String::as_str).collect();
    format!("\u{2022} {}", capped.join("\n\u{2022} "))
}
