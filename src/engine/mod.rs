//! The scan → extract → rules → aggregate pipeline.

use std::collections::BTreeSet;
use std::path::Path;

use rayon::prelude::*;

use crate::config::Config;
use crate::extractor::{ClassDefinitionExtractor, Extraction, Extractor, UnterminatedClass};
use crate::model::{Category, Issue, RunStats, Severity, Stage, ValidationResult};
use crate::rules::{RuleEngine, RuleRunner};
use crate::scanner::{DirectoryScanner, GlobFilter, SourceScanner};

/// Engine wired with the real scanner, extractor and rule registry.
pub type DefaultEngine =
    ValidationEngine<DirectoryScanner<GlobFilter>, ClassDefinitionExtractor, RuleEngine>;

/// Validate the submission at `path` for `stage` with default settings.
#[must_use]
pub fn validate(path: &Path, stage: Stage) -> ValidationResult {
    DefaultEngine::default().validate(path, stage)
}

pub struct ValidationEngine<S, X, R> {
    scanner: S,
    extractor: X,
    rules: R,
    fail_on: Severity,
}

impl Default for DefaultEngine {
    fn default() -> Self {
        Self::new(
            DirectoryScanner::new(GlobFilter::cpp_sources()),
            ClassDefinitionExtractor::new(),
            RuleEngine::new(),
        )
    }
}

impl DefaultEngine {
    /// Default wiring with the failure threshold taken from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::default().with_fail_on(config.validation.fail_on)
    }
}

impl<S, X, R> ValidationEngine<S, X, R>
where
    S: SourceScanner,
    X: Extractor,
    R: RuleRunner,
{
    /// Fails on `Critical` findings until told otherwise.
    pub const fn new(scanner: S, extractor: X, rules: R) -> Self {
        Self {
            scanner,
            extractor,
            rules,
            fail_on: Severity::Critical,
        }
    }

    #[must_use]
    pub const fn with_fail_on(mut self, fail_on: Severity) -> Self {
        self.fail_on = fail_on;
        self
    }

    #[must_use]
    pub const fn fail_on(&self) -> Severity {
        self.fail_on
    }

    /// Run the whole pipeline. Never fails: an unreadable submission becomes a
    /// single `Critical` filesystem issue.
    pub fn validate(&self, path: &Path, stage: Stage) -> ValidationResult {
        let mut files = match self.scanner.scan(path) {
            Ok(files) => files,
            Err(err) => {
                return ValidationResult::short_circuit(Issue::critical(
                    Category::Filesystem,
                    err.to_string(),
                ));
            }
        };

        // Scanners may list files in any order; everything downstream sees path order.
        files.sort_by(|a, b| a.path.cmp(&b.path));

        let extractor = &self.extractor;
        let extractions: Vec<Extraction> =
            files.par_iter().map(|file| extractor.extract(file)).collect();

        let mut definitions = Vec::new();
        let mut issues = Vec::new();
        for extraction in extractions {
            definitions.extend(extraction.definitions);
            issues.extend(extraction.unterminated.iter().map(unterminated_issue));
        }

        issues.extend(self.rules.run(stage, &definitions, &files));

        let exercise_groups: BTreeSet<&str> =
            files.iter().map(|f| f.exercise_group.as_str()).collect();
        let stats = RunStats {
            files_scanned: files.len(),
            classes_extracted: definitions.len(),
            exercise_groups: exercise_groups.into_iter().map(String::from).collect(),
        };

        ValidationResult::from_issues(issues, self.fail_on, stats)
    }
}

fn unterminated_issue(open: &UnterminatedClass) -> Issue {
    Issue::major(
        Category::Extraction,
        format!(
            "class {} is never closed; its members were not validated",
            open.name
        ),
    )
    .at(&open.file, open.start_line)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
