use serde::Serialize;

use super::issue::{Issue, Severity};

/// Counters describing what a validation run looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub files_scanned: usize,
    pub classes_extracted: usize,
    /// Exercise group labels, sorted and deduplicated.
    pub exercise_groups: Vec<String>,
}

/// Outcome of one `validate` call.
///
/// Built only through [`ValidationResult::from_issues`], which sorts the issues and
/// derives the verdict, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<Issue>,
    pub stats: RunStats,
}

impl ValidationResult {
    /// Order issues by (file, line) keeping discovery order for ties, then compute
    /// validity against `fail_on`.
    #[must_use]
    pub fn from_issues(mut issues: Vec<Issue>, fail_on: Severity, stats: RunStats) -> Self {
        // Stable sort: equal locations keep the order they were discovered in.
        issues.sort_by(|a, b| a.location.cmp(&b.location));
        let is_valid = !issues.iter().any(|issue| issue.is_at_least(fail_on));
        Self {
            is_valid,
            issues,
            stats,
        }
    }

    /// Result of a run that stopped before extraction.
    #[must_use]
    pub fn short_circuit(issue: Issue) -> Self {
        Self {
            is_valid: false,
            issues: vec![issue],
            stats: RunStats::default(),
        }
    }

    #[must_use]
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
