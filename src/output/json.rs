use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::model::{Issue, RunStats, Severity, Stage};
use crate::scanner::exercise_group_of;

use super::{OutputFormatter, Report};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    path: String,
    stage: Stage,
    is_valid: bool,
    summary: Summary,
    issues: &'a [Issue],
    /// Issues per exercise group; groups with no findings are listed with 0.
    exercise_groups: IndexMap<String, usize>,
    stats: &'a RunStats,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    critical: usize,
    major: usize,
    minor: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let result = report.result;
        let output = JsonOutput {
            path: report.path.display().to_string(),
            stage: report.stage,
            is_valid: result.is_valid,
            summary: Summary {
                total: result.issues.len(),
                critical: result.count_by_severity(Severity::Critical),
                major: result.count_by_severity(Severity::Major),
                minor: result.count_by_severity(Severity::Minor),
            },
            issues: &result.issues,
            exercise_groups: issues_per_group(&result.stats, &result.issues),
            stats: &result.stats,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

/// An issue counts toward the directory its file sits in, the same label the
/// scanner gives files.
fn issues_per_group(stats: &RunStats, issues: &[Issue]) -> IndexMap<String, usize> {
    let mut groups: IndexMap<String, usize> = stats
        .exercise_groups
        .iter()
        .map(|group| (group.clone(), 0))
        .collect();

    for issue in issues {
        let Some(location) = &issue.location else {
            continue;
        };
        let group = exercise_group_of(&location.file);
        if let Some(count) = groups.get_mut(&group) {
            *count += 1;
        }
    }
    groups
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
