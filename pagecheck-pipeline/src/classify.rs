// Language-model label extraction. One call per check, temperature 0,
// JSON-object-constrained output. No local retry: the caller decides what a
// classification failure means for the whole check.

use crate::error::{CheckError, Result};
use pagecheck_core::labels::ClassificationLabels;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const CLASSIFY_TIMEOUT_SECS: u64 = 30;

/// Body text sent to the model is truncated to this many characters.
const MAX_BODY_CHARS: usize = 4000;

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct Classifier {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl Classifier {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(CLASSIFY_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| CheckError::Classification(format!("bad API key: {}", e)))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Ask the model for risk labels over the extracted page content.
    ///
    /// Fails with `Classification` on provider errors, timeouts and
    /// responses that do not parse as the expected JSON object. Markdown
    /// code fences around the payload are tolerated.
    pub async fn classify(
        &self,
        domain: &str,
        title: &str,
        body: &str,
    ) -> Result<ClassificationLabels> {
        let truncated: String = body.chars().take(MAX_BODY_CHARS).collect();
        let prompt = build_prompt(domain, title, &truncated);

        let request = ChatRequest {
            model: self.model.clone(),
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "Return only valid JSON. Be conservative about scams and \
                              sensational claims."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, %domain, "classifier request");

        let response = self
            .http
            .post(&url)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckError::Classification(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CheckError::Classification(format!(
                "provider error ({}): {}",
                status, error_text
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Classification(format!("bad provider response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CheckError::Classification("empty provider response".to_string()))?;

        let labels: ClassificationLabels = serde_json::from_str(strip_code_blocks(&content))
            .map_err(|e| CheckError::Classification(format!("labels not valid JSON: {}", e)))?;

        Ok(labels)
    }
}

fn build_prompt(domain: &str, title: &str, body: &str) -> String {
    format!(
        "You are a safety and misinformation assistant. Read the page metadata below and \
         return strict JSON.\n\n\
         Return fields:\n\
         - headline_style: \"clickbait\" | \"neutral\"\n\
         - tone: \"sensational\" | \"neutral\"\n\
         - scam_signal: \"strong\" | \"weak\" | \"none\"\n\
         - health_claim: \"present\" | \"not_present\"\n\
         - summary_bullets: array of 3-5 short bullets (<=20 words each), plain text\n\n\
         CONTENT:\n\
         DOMAIN: {}\n\
         TITLE: {}\n\
         BODY (truncated): {}",
        domain, title, body
    )
}

/// Strip markdown code fences from a model response.
fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
