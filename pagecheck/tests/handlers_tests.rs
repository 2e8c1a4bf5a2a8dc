use pagecheck::handlers::*;
use pagecheck_core::verdict::Reason;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_dir_from_plain_path() {
    let dir = config_dir_from("/tmp/pagecheck-test");
    assert_eq!(dir.to_str(), Some("/tmp/pagecheck-test"));
}

#[test]
fn test_config_dir_from_expands_tilde() {
    let dir = config_dir_from("~/.config/pagecheck/");
    assert!(!dir.to_str().unwrap().starts_with('~'));
}

#[test]
fn test_paths_join_inside_config_dir() {
    let dir = config_dir_from("/tmp/pc");
    assert_eq!(database_path(&dir).to_str(), Some("/tmp/pc/pagecheck.db"));
    assert_eq!(
        reputation_csv_path(&dir).to_str(),
        Some("/tmp/pc/reputation.csv")
    );
}

#[test]
fn test_load_reputation_without_csv_is_builtin() {
    let dir = TempDir::new().unwrap();
    let table = load_reputation(dir.path()).unwrap();
    assert!(table.contains("giveaway.example"));
    assert!(table.contains("clickbait.example"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_load_reputation_reads_local_csv() {
    let dir = TempDir::new().unwrap();
    fs::write(
        reputation_csv_path(dir.path()),
        "miracle-cures.example,health_claims\n",
    )
    .unwrap();

    let table = load_reputation(dir.path()).unwrap();
    assert_eq!(
        table.lookup("miracle-cures.example"),
        Some(Reason::HealthClaims)
    );
    // builtin seed survives
    assert!(table.contains("giveaway.example"));
}

#[test]
fn test_default_scaffold_adds_no_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(reputation_csv_path(dir.path()), DEFAULT_REPUTATION_CSV).unwrap();

    let table = load_reputation(dir.path()).unwrap();
    // comments only, so just the builtin seed
    assert_eq!(table.len(), 2);
}
