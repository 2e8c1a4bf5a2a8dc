// Classifier label contract. The producer is a language model, so every
// field tolerates being missing or carrying an unrecognized value: both
// deserialize to the neutral/none/absent default instead of failing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadlineStyle {
    Clickbait,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Sensational,
    #[default]
    #[serde(other)]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScamSignal {
    Strong,
    Weak,
    #[default]
    #[serde(other)]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthClaim {
    Present,
    #[default]
    #[serde(other)]
    NotPresent,
}

/// Structured labels returned by the classifier for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationLabels {
    #[serde(default)]
    pub headline_style: HeadlineStyle,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub scam_signal: ScamSignal,
    #[serde(default)]
    pub health_claim: HealthClaim,
    #[serde(default)]
    pub summary_bullets: Vec<String>,
}

impl ClassificationLabels {
    /// Neutral labels used when classification is skipped or degraded.
    pub fn neutral() -> Self {
        Self::default()
    }
}
