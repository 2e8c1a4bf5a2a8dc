// Tests for check persistence

use pagecheck_core::data::Database;
use pagecheck_core::labels::ClassificationLabels;
use pagecheck_core::result::{CheckMeta, CheckResult, HeadersSubset};
use pagecheck_core::verdict::{Reason, Verdict};
use tempfile::TempDir;

fn sample_result(verdict: Verdict) -> CheckResult {
    CheckResult {
        verdict,
        reasons: vec![Reason::Clickbait],
        summary: "\u{2022} sample".to_string(),
        meta: CheckMeta {
            domain: "example.com".to_string(),
            final_url: "https://example.com/a".to_string(),
            title: "Example".to_string(),
            headers_subset: HeadersSubset {
                content_type: Some("text/html".to_string()),
                server: None,
            },
            labels: ClassificationLabels::neutral(),
            noise: 1,
        },
    }
}

#[test]
fn test_create_database_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pagecheck.db");

    assert!(!Database::exists(&path));
    let _db = Database::new(&path).unwrap();
    assert!(Database::exists(&path));
}

#[test]
fn test_insert_and_read_back() {
    let db = Database::in_memory().unwrap();

    let id = db
        .insert_check(
            &sample_result(Verdict::Warning),
            "https://example.com/a?utm_source=x",
            Some("user-1"),
        )
        .unwrap();
    assert!(!id.is_empty());

    let checks = db.recent_checks(10).unwrap();
    assert_eq!(checks.len(), 1);
    assert_eq!(checks[0].id, id);
    assert_eq!(checks[0].user_id.as_deref(), Some("user-1"));
    assert_eq!(checks[0].verdict, "warning");
    assert_eq!(checks[0].url, "https://example.com/a?utm_source=x");
    assert!(checks[0].reasons.contains("clickbait"));
}

#[test]
fn test_insert_without_user() {
    let db = Database::in_memory().unwrap();
    db.insert_check(&sample_result(Verdict::Ok), "https://example.com", None)
        .unwrap();

    let checks = db.recent_checks(10).unwrap();
    assert_eq!(checks[0].user_id, None);
}

#[test]
fn test_recent_checks_respects_limit() {
    let db = Database::in_memory().unwrap();
    for i in 0..5 {
        db.insert_check(
            &sample_result(Verdict::Ok),
            &format!("https://example.com/{}", i),
            None,
        )
        .unwrap();
    }

    assert_eq!(db.recent_checks(3).unwrap().len(), 3);
    assert_eq!(db.recent_checks(10).unwrap().len(), 5);
}

#[test]
fn test_verdict_counts_grouped_by_severity() {
    let db = Database::in_memory().unwrap();
    db.insert_check(&sample_result(Verdict::Ok), "https://a.example", None)
        .unwrap();
    db.insert_check(&sample_result(Verdict::Ok), "https://b.example", None)
        .unwrap();
    db.insert_check(&sample_result(Verdict::Danger), "https://c.example", None)
        .unwrap();

    let counts = db.verdict_counts().unwrap();
    assert_eq!(counts[0], ("danger".to_string(), 1));
    assert_eq!(counts[1], ("ok".to_string(), 2));
}

#[test]
fn test_raw_meta_is_stored_as_json() {
    let db = Database::in_memory().unwrap();
    db.insert_check(&sample_result(Verdict::Ok), "https://example.com", None)
        .unwrap();

    let raw_meta: String = db
        .get_connection()
        .query_row("SELECT raw_meta FROM url_checks", [], |row| row.get(0))
        .unwrap();
    let meta: serde_json::Value = serde_json::from_str(&raw_meta).unwrap();
    assert_eq!(meta["domain"], "example.com");
    assert_eq!(meta["headers_subset"]["content-type"], "text/html");
}
