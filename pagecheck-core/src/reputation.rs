// Domain reputation table: static allow/deny-style list mapping domains to
// a preset reason. Loaded once at process start, read-only afterwards.

use crate::verdict::Reason;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Seed entries shipped with the binary. Extend from a CSV file via
/// [`ReputationTable::load_csv`].
const BUILTIN_LOW_REP_DOMAINS: &[&str] = &["clickbait.example", "giveaway.example"];

#[derive(Debug, Clone)]
pub struct ReputationTable {
    entries: HashMap<String, Reason>,
}

impl ReputationTable {
    /// Table containing only the built-in seed domains.
    pub fn builtin() -> Self {
        let entries = BUILTIN_LOW_REP_DOMAINS
            .iter()
            .map(|d| (d.to_string(), Reason::LowDomainRep))
            .collect();
        Self { entries }
    }

    /// Empty table, useful for tests.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Load additional `domain,reason` rows from a CSV file on top of the
    /// built-in seed. Lines that are blank, start with `#`, or carry an
    /// unknown reason tag are skipped. An unparseable file is an error; a
    /// missing optional file should be handled by the caller.
    pub fn load_csv(path: &Path) -> io::Result<Self> {
        let mut table = Self::builtin();
        let content = fs::read_to_string(path)?;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, ',');
            let domain = parts.next().unwrap_or("").trim();
            let reason_tag = parts.next().unwrap_or("low_domain_rep").trim();
            if domain.is_empty() {
                continue;
            }
            let reason = match reason_tag {
                "low_domain_rep" => Reason::LowDomainRep,
                "scam_signals" => Reason::ScamSignals,
                "health_claims" => Reason::HealthClaims,
                _ => continue,
            };
            table.entries.insert(domain.to_lowercase(), reason);
        }

        Ok(table)
    }

    /// Register or replace a single entry. Domains are stored lowercased.
    pub fn insert(&mut self, domain: &str, reason: Reason) {
        self.entries.insert(domain.to_lowercase(), reason);
    }

    pub fn lookup(&self, domain: &str) -> Option<Reason> {
        self.entries.get(domain).copied()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.entries.contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ReputationTable {
    fn default() -> Self {
        Self::builtin()
    }
}
