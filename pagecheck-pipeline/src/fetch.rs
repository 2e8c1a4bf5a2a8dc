use crate::error::{CheckError, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Raw material for one check: the page body, where redirects landed, and
/// the response headers. Created per request and discarded after extraction.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub html: String,
    pub final_url: Url,
    pub headers: HashMap<String, String>,
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("pagecheck/0.1 (+https://github.com/pagecheck/pagecheck)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET the page, following redirects. Fails on connection errors,
    /// timeouts and non-2xx final statuses; the whole check aborts on any
    /// of those. No retry, no caching.
    pub async fn fetch(&self, url: &Url) -> Result<FetchResult> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CheckError::Fetch(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckError::Fetch(format!(
                "HTTP {} for {}",
                status.as_u16(),
                response.url()
            )));
        }

        let final_url = response.url().clone();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();

        let html = response
            .text()
            .await
            .map_err(|e| CheckError::Fetch(format!("{}: {}", final_url, e)))?;

        Ok(FetchResult {
            html,
            final_url,
            headers,
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}
