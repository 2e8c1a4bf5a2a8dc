// The check pipeline: normalize, fetch, extract, score noise, classify,
// combine. One URL in, one CheckResult out.

use crate::classify::Classifier;
use crate::error::{CheckError, Result};
use crate::extract;
use crate::fetch::Fetcher;
use crate::normalize;
use pagecheck_core::labels::ClassificationLabels;
use pagecheck_core::noise::noise_score;
use pagecheck_core::reputation::ReputationTable;
use pagecheck_core::result::{format_summary, CheckMeta, CheckResult, HeadersSubset};
use pagecheck_core::verdict::combine;
use std::collections::HashMap;
use tracing::{info, warn};
use url::Url;

/// What to do when the classifier call fails.
///
/// `Abort` fails the whole check, so a provider outage is visible instead of
/// silently producing optimistic verdicts. `Degrade` scores the page on
/// reputation and noise alone with neutral labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyFailurePolicy {
    #[default]
    Abort,
    Degrade,
}

pub struct Pipeline {
    fetcher: Fetcher,
    classifier: Classifier,
    reputation: ReputationTable,
    policy: ClassifyFailurePolicy,
}

impl Pipeline {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            fetcher: Fetcher::new(),
            classifier,
            reputation: ReputationTable::builtin(),
            policy: ClassifyFailurePolicy::Abort,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn with_reputation(mut self, table: ReputationTable) -> Self {
        self.reputation = table;
        self
    }

    pub fn with_failure_policy(mut self, policy: ClassifyFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn reputation(&self) -> &ReputationTable {
        &self.reputation
    }

    /// Run a full check against a raw user-supplied URL.
    pub async fn run_check(&self, raw_url: &str) -> Result<CheckResult> {
        let url = normalize::normalize(raw_url)?;
        info!("Checking {}", url);

        let fetched = self.fetcher.fetch(&url).await?;
        let domain = domain_of(&fetched.final_url)?;

        let content = extract::extract(&fetched.html);
        let noise = noise_score(&fetched.html);

        let labels = match self
            .classifier
            .classify(&domain, &content.title, &content.body)
            .await
        {
            Ok(labels) => labels,
            Err(e) => match self.policy {
                ClassifyFailurePolicy::Abort => return Err(e),
                ClassifyFailurePolicy::Degrade => {
                    warn!("Classifier unavailable, degrading: {}", e);
                    ClassificationLabels::neutral()
                }
            },
        };

        let (verdict, reasons) = combine(&domain, &self.reputation, &labels, noise);
        let summary = format_summary(&labels.summary_bullets);

        info!(
            verdict = verdict.as_str(),
            reasons = reasons.len(),
            %domain,
            "Check complete"
        );

        Ok(CheckResult {
            verdict,
            reasons,
            summary,
            meta: CheckMeta {
                domain,
                final_url: fetched.final_url.to_string(),
                title: content.title,
                headers_subset: headers_subset(&fetched.headers),
                labels,
                noise,
            },
        })
    }
}

/// Domain used for reputation lookups: the post-redirect host, lowercased,
/// with a leading `www.` stripped.
pub fn domain_of(url: &Url) -> Result<String> {
    let host = url
        .host_str()
        .ok_or_else(|| CheckError::Internal(format!("no host in final URL {}", url)))?;
    let host = host.to_lowercase();
    Ok(host
        .strip_prefix("www.")
        .map(str::to_owned)
        .unwrap_or(host))
}

fn headers_subset(headers: &HashMap<String, String>) -> HeadersSubset {
    HeadersSubset {
        content_type: headers.get("content-type").cloned(),
        server: headers.get("server").cloned(),
    }
}
