// Report rendering for one-shot checks and stored history

use crate::data::StoredCheck;
use crate::result::CheckResult;
use crate::verdict::Verdict;
use colored::Colorize;

fn colored_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::Ok => "OK".green().bold().to_string(),
        Verdict::Warning => "WARNING".yellow().bold().to_string(),
        Verdict::Danger => "DANGER".red().bold().to_string(),
    }
}

/// Render a single check result for terminal display.
pub fn generate_check_report(result: &CheckResult) -> String {
    let mut report = String::new();

    report.push_str(&format!("{}\n", "─".repeat(52)));
    report.push_str(&format!(
        "  {}  {}\n",
        colored_verdict(result.verdict),
        result.meta.final_url.bright_white()
    ));
    report.push_str(&format!("{}\n\n", "─".repeat(52)));

    if !result.meta.title.is_empty() {
        report.push_str(&format!("  Title:  {}\n", result.meta.title));
    }
    report.push_str(&format!("  Domain: {}\n", result.meta.domain));
    report.push_str(&format!("  Noise:  {}\n", result.meta.noise));

    if result.reasons.is_empty() {
        report.push_str("\n  No risk factors detected.\n");
    } else {
        report.push_str("\n  Reasons:\n");
        for reason in &result.reasons {
            report.push_str(&format!("    {} {}\n", "•".yellow(), reason.as_str()));
        }
    }

    if !result.summary.trim_end_matches('\u{2022}').trim().is_empty() {
        report.push_str("\n  Summary:\n");
        for line in result.summary.lines() {
            report.push_str(&format!("    {}\n", line));
        }
    }

    report
}

/// Render stored checks plus per-verdict counts.
pub fn generate_history_report(checks: &[StoredCheck], counts: &[(String, i64)]) -> String {
    let mut report = String::new();

    report.push_str(&format!("{}\n", "─".repeat(52)));
    report.push_str("  CHECK HISTORY\n");
    report.push_str(&format!("{}\n\n", "─".repeat(52)));

    if counts.is_empty() {
        report.push_str("  No checks recorded yet.\n");
        return report;
    }

    for (verdict, count) in counts {
        let label = Verdict::from_str(verdict)
            .map(colored_verdict)
            .unwrap_or_else(|| verdict.clone());
        report.push_str(&format!("  {}: {}\n", label, count));
    }
    report.push('\n');

    for check in checks {
        let label = Verdict::from_str(&check.verdict)
            .map(colored_verdict)
            .unwrap_or_else(|| check.verdict.clone());
        let when = chrono::DateTime::from_timestamp(check.created_at, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| check.created_at.to_string());
        report.push_str(&format!("  {}  {}  {}\n", when.dimmed(), label, check.url));
    }

    report
}
