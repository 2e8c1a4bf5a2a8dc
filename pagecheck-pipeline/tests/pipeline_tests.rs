// ============================================================
// End-to-end pipeline tests over mock page and classifier servers
// ============================================================

use pagecheck_core::reputation::ReputationTable;
use pagecheck_core::verdict::{Reason, Verdict};
use pagecheck_pipeline::{CheckError, Classifier, ClassifyFailurePolicy, Fetcher, Pipeline};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_reply(labels: serde_json::Value) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": labels.to_string() } }
        ]
    })
}

async fn mock_page(server: &MockServer, route: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .insert_header("server", "nginx")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

async fn mock_classifier(server: &MockServer, labels: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(provider_reply(labels)))
        .mount(server)
        .await;
}

fn pipeline_for(ai: &MockServer) -> Pipeline {
    let classifier = Classifier::new("test-key").with_base_url(ai.uri());
    Pipeline::new(classifier).with_fetcher(Fetcher::with_timeout(5))
}

const ARTICLE_HTML: &str = r#"<html><head><title>Prize Inside</title></head><body>
    <article>
        <p>Congratulations, you have been selected for a free prize worth thousands.</p>
        <p>Send a small processing fee today and the reward ships immediately.</p>
    </article>
</body></html>"#;

// ============================================================
// Verdict combination end to end
// ============================================================

#[tokio::test]
async fn test_low_rep_domain_with_strong_scam_is_danger() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    mock_page(&page, "/prize", ARTICLE_HTML).await;
    mock_classifier(
        &ai,
        json!({
            "headline_style": "clickbait",
            "tone": "neutral",
            "scam_signal": "strong",
            "health_claim": "not_present",
            "summary_bullets": ["claims you won a prize", "asks for an upfront fee"]
        }),
    )
    .await;

    // register the mock host as low-reputation, like giveaway.example
    let page_url = url::Url::parse(&page.uri()).unwrap();
    let host = pagecheck_pipeline::domain_of(&page_url).unwrap();
    let mut table = ReputationTable::builtin();
    table.insert(&host, Reason::LowDomainRep);

    let pipeline = pipeline_for(&ai).with_reputation(table);
    let result = pipeline
        .run_check(&format!("{}/prize", page.uri()))
        .await
        .unwrap();

    assert_eq!(result.verdict, Verdict::Danger);
    assert!(result.reasons.contains(&Reason::LowDomainRep));
    assert!(result.reasons.contains(&Reason::ScamSignals));
    assert!(result.summary.starts_with("\u{2022} claims you won a prize"));
    assert_eq!(result.meta.title, "Prize Inside");
    assert_eq!(
        result.meta.headers_subset.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(result.meta.headers_subset.server.as_deref(), Some("nginx"));
}

#[tokio::test]
async fn test_clean_page_is_ok() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    mock_page(
        &page,
        "/article",
        r#"<html><head><title>Local News</title></head><body>
            <article>
                <p>The town council met on Tuesday to discuss the new library budget.</p>
                <p>A vote on the proposal is scheduled for next month.</p>
            </article>
        </body></html>"#,
    )
    .await;
    mock_classifier(
        &ai,
        json!({
            "headline_style": "neutral",
            "tone": "neutral",
            "scam_signal": "none",
            "health_claim": "not_present",
            "summary_bullets": ["council discussed library budget"]
        }),
    )
    .await;

    let pipeline = pipeline_for(&ai).with_reputation(ReputationTable::empty());
    let result = pipeline
        .run_check(&format!("{}/article", page.uri()))
        .await
        .unwrap();

    assert_eq!(result.verdict, Verdict::Ok);
    assert!(result.reasons.is_empty());
    assert_eq!(result.meta.noise, 0);
}

#[tokio::test]
async fn test_noisy_page_gets_intrusive_ui_reason() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    let noisy = format!(
        "<html><body><article><p>{}</p></article>{}</body></html>",
        "Real content paragraph with enough text to pass the candidate threshold easily.",
        "<iframe src=\"/ad1\"></iframe><iframe src=\"/ad2\"></iframe><iframe src=\"/ad3\"></iframe>"
    );
    mock_page(&page, "/noisy", &noisy).await;
    mock_classifier(
        &ai,
        json!({
            "headline_style": "neutral",
            "tone": "sensational",
            "scam_signal": "none",
            "health_claim": "not_present",
            "summary_bullets": ["page is cluttered"]
        }),
    )
    .await;

    let pipeline = pipeline_for(&ai).with_reputation(ReputationTable::empty());
    let result = pipeline
        .run_check(&format!("{}/noisy", page.uri()))
        .await
        .unwrap();

    // three iframes push noise to the threshold
    assert_eq!(result.meta.noise, 3);
    assert!(result.reasons.contains(&Reason::IntrusiveUi));
    assert!(result.reasons.contains(&Reason::SensationalTone));
    // two weight-1 reasons band as warning
    assert_eq!(result.verdict, Verdict::Warning);
}

// ============================================================
// Normalization feeds the fetch
// ============================================================

#[tokio::test]
async fn test_tracking_params_are_stripped_before_fetch() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    mock_page(&page, "/a", ARTICLE_HTML).await;
    mock_classifier(&ai, json!({ "scam_signal": "none" })).await;

    let pipeline = pipeline_for(&ai).with_reputation(ReputationTable::empty());
    pipeline
        .run_check(&format!("{}/a?utm_source=mail&id=7#top", page.uri()))
        .await
        .unwrap();

    let requests = page.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("id=7"));
    assert_eq!(requests[0].url.fragment(), None);
}

#[tokio::test]
async fn test_invalid_url_never_reaches_the_network() {
    let ai = MockServer::start().await;
    let classifier = Classifier::new("k").with_base_url(ai.uri());
    let pipeline = Pipeline::new(classifier);

    let err = pipeline.run_check("ftp://example.com/x").await.unwrap_err();
    assert!(matches!(err, CheckError::InvalidUrl(_)));
}

// ============================================================
// Failure policy
// ============================================================

#[tokio::test]
async fn test_classifier_failure_aborts_by_default() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    mock_page(&page, "/a", ARTICLE_HTML).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ai)
        .await;

    let pipeline = pipeline_for(&ai).with_reputation(ReputationTable::empty());
    let err = pipeline
        .run_check(&format!("{}/a", page.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::Classification(_)));
}

#[tokio::test]
async fn test_degrade_policy_scores_without_labels() {
    let page = MockServer::start().await;
    let ai = MockServer::start().await;
    mock_page(&page, "/a", ARTICLE_HTML).await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ai)
        .await;

    let page_url = url::Url::parse(&page.uri()).unwrap();
    let host = pagecheck_pipeline::domain_of(&page_url).unwrap();
    let mut table = ReputationTable::empty();
    table.insert(&host, Reason::LowDomainRep);

    let pipeline = pipeline_for(&ai)
        .with_reputation(table)
        .with_failure_policy(ClassifyFailurePolicy::Degrade);

    let result = pipeline
        .run_check(&format!("{}/a", page.uri()))
        .await
        .unwrap();

    // reputation alone still produces a warning; labels are neutral
    assert_eq!(result.verdict, Verdict::Warning);
    assert_eq!(result.reasons, vec![Reason::LowDomainRep]);
    assert_eq!(result.summary, "\u{2022} ");
}

#[tokio::test]
async fn test_fetch_failure_is_a_fetch_error() {
    let ai = MockServer::start().await;
    let classifier = Classifier::new("k").with_base_url(ai.uri());
    let pipeline = Pipeline::new(classifier).with_fetcher(Fetcher::with_timeout(2));

    let err = pipeline
        .run_check("http://127.0.0.1:9/unreachable")
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::Fetch(_)));
}
