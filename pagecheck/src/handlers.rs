use colored::Colorize;
use pagecheck_core::reputation::ReputationTable;
use pagecheck_pipeline::Classifier;
use std::path::{Path, PathBuf};

/// Scaffold written by `init` so users have a template to extend.
pub const DEFAULT_REPUTATION_CSV: &str = "\
# pagecheck reputation list
# one entry per line: domain,reason
# reason is one of: low_domain_rep, scam_signals, health_claims
# lines starting with # are ignored
";

pub fn print_banner() {
    println!(
        "\n  {} {}\n  {}\n",
        "pagecheck".bright_white().bold(),
        env!("CARGO_PKG_VERSION").dimmed(),
        "content-safety triage for URLs".dimmed()
    );
}

/// Expand `~` and return the config directory as a path.
pub fn config_dir_from(path_arg: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path_arg);
    PathBuf::from(expanded.as_ref())
}

pub fn database_path(config_dir: &Path) -> PathBuf {
    config_dir.join("pagecheck.db")
}

pub fn reputation_csv_path(config_dir: &Path) -> PathBuf {
    config_dir.join("reputation.csv")
}

/// The reputation table for this config dir: built-in seed plus the local
/// CSV when one exists.
pub fn load_reputation(config_dir: &Path) -> Result<ReputationTable, String> {
    let csv = reputation_csv_path(config_dir);
    if csv.exists() {
        ReputationTable::load_csv(&csv)
            .map_err(|e| format!("Failed to read {}: {}", csv.display(), e))
    } else {
        Ok(ReputationTable::builtin())
    }
}

/// Build the classifier client from the environment. `OPENAI_API_KEY` is
/// required; `PAGECHECK_MODEL` and `PAGECHECK_API_BASE` override defaults.
pub fn classifier_from_env() -> Result<Classifier, String> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| "OPENAI_API_KEY is not set".to_string())?;

    let mut classifier = Classifier::new(api_key);
    if let Ok(model) = std::env::var("PAGECHECK_MODEL") {
        classifier = classifier.with_model(model);
    }
    if let Ok(base) = std::env::var("PAGECHECK_API_BASE") {
        classifier = classifier.with_base_url(base);
    }
    Ok(classifier)
}
