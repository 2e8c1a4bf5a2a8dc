// Verdict banding: the weighting rule that turns reasons into ok/warning/danger

use crate::labels::{ClassificationLabels, HeadlineStyle, HealthClaim, ScamSignal, Tone};
use crate::reputation::ReputationTable;
use serde::{Deserialize, Serialize};

/// Final risk classification, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Ok,
    Warning,
    Danger,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::Warning => "warning",
            Verdict::Danger => "danger",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ok" => Some(Verdict::Ok),
            "warning" => Some(Verdict::Warning),
            "danger" => Some(Verdict::Danger),
            _ => None,
        }
    }
}

/// A named contributing factor to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    LowDomainRep,
    Clickbait,
    SensationalTone,
    ScamSignals,
    HealthClaims,
    IntrusiveUi,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::LowDomainRep => "low_domain_rep",
            Reason::Clickbait => "clickbait",
            Reason::SensationalTone => "sensational_tone",
            Reason::ScamSignals => "scam_signals",
            Reason::HealthClaims => "health_claims",
            Reason::IntrusiveUi => "intrusive_ui",
        }
    }
}

/// Data-driven weight table. Kept declarative so the banding rule below
/// stays independently testable.
pub const REASON_WEIGHTS: [(Reason, u32); 6] = [
    (Reason::ScamSignals, 3),
    (Reason::LowDomainRep, 2),
    (Reason::HealthClaims, 2),
    (Reason::Clickbait, 1),
    (Reason::SensationalTone, 1),
    (Reason::IntrusiveUi, 1),
];

pub fn reason_weight(reason: Reason) -> u32 {
    REASON_WEIGHTS
        .iter()
        .find(|(r, _)| *r == reason)
        .map(|(_, w)| *w)
        .unwrap_or(0)
}

/// Noise score at or above this triggers the `intrusive_ui` reason.
pub const INTRUSIVE_UI_NOISE_THRESHOLD: u32 = 3;

/// Merge domain reputation, classifier labels and the noise score into a
/// verdict band plus the reasons that produced it.
///
/// Table membership always contributes `low_domain_rep`; the richer tags a
/// table may carry are advisory data, not combiner input. Banding
/// precedence: a strong scam signal or total weight >= 4 is `danger`,
/// weight >= 2 is `warning`, anything else is `ok`. Reasons are returned in
/// insertion order and never duplicated.
pub fn combine(
    domain: &str,
    table: &ReputationTable,
    labels: &ClassificationLabels,
    noise: u32,
) -> (Verdict, Vec<Reason>) {
    let mut reasons = Vec::new();

    if table.contains(domain) {
        reasons.push(Reason::LowDomainRep);
    }
    if labels.headline_style == HeadlineStyle::Clickbait {
        reasons.push(Reason::Clickbait);
    }
    if labels.tone == Tone::Sensational {
        reasons.push(Reason::SensationalTone);
    }
    if labels.scam_signal == ScamSignal::Strong {
        reasons.push(Reason::ScamSignals);
    }
    if labels.health_claim == HealthClaim::Present {
        reasons.push(Reason::HealthClaims);
    }
    if noise >= INTRUSIVE_UI_NOISE_THRESHOLD {
        reasons.push(Reason::IntrusiveUi);
    }

    let weight: u32 = reasons.iter().map(|r| reason_weight(*r)).sum();

    let verdict = if reasons.contains(&Reason::ScamSignals) || weight >= 4 {
        Verdict::Danger
    } else if weight >= 2 {
        Verdict::Warning
    } else {
        Verdict::Ok
    };

    (verdict, reasons)
}
