use std::fmt::Write;

use crate::error::Result;
use crate::model::{Issue, Severity, ValidationResult};

use super::{OutputFormatter, Report, ansi};

/// Human-readable report.
///
/// ```text
/// Validating rendu/cpp02 (stage: orthodox)
/// FAILED
/// Issues: 1
/// - [MAJOR] lifecycle: class Fixed is not in orthodox canonical form: missing destructor
/// ```
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub const fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            verbose: 0,
        }
    }

    /// With `verbose >= 1` each located issue gets an `at file:line` line and
    /// the run statistics are appended.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => ansi::RED,
            Severity::Major => ansi::YELLOW,
            Severity::Minor => ansi::CYAN,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_verdict(&self, output: &mut String, result: &ValidationResult) {
        let verdict = if result.is_valid {
            self.paint("PASSED", ansi::GREEN)
        } else {
            self.paint("FAILED", ansi::RED)
        };
        writeln!(output, "{verdict}").ok();
    }

    fn write_issue(&self, output: &mut String, issue: &Issue) {
        let tag = self.paint(
            &format!("[{}]", issue.severity),
            Self::severity_color(issue.severity),
        );
        writeln!(output, "- {tag} {}: {}", issue.category, issue.message).ok();

        if self.verbose >= 1
            && let Some(location) = &issue.location
        {
            let at = self.paint(&format!("at {location}"), ansi::DIM);
            writeln!(output, "    {at}").ok();
        }
    }

    fn write_stats(&self, output: &mut String, result: &ValidationResult) {
        let stats = &result.stats;
        let groups = if stats.exercise_groups.is_empty() {
            "none".to_string()
        } else {
            stats.exercise_groups.join(", ")
        };
        let line = format!(
            "Scanned {} file(s), {} class(es); exercise groups: {groups}",
            stats.files_scanned, stats.classes_extracted
        );
        writeln!(output).ok();
        writeln!(output, "{}", self.paint(&line, ansi::DIM)).ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut output = String::new();
        let result = report.result;

        let heading = format!(
            "Validating {} (stage: {})",
            report.path.display(),
            report.stage
        );
        if self.use_colors {
            writeln!(output, "{}{heading}{}", ansi::BOLD, ansi::RESET).ok();
        } else {
            writeln!(output, "{heading}").ok();
        }

        self.write_verdict(&mut output, result);
        writeln!(output, "Issues: {}", result.issues.len()).ok();
        for issue in &result.issues {
            self.write_issue(&mut output, issue);
        }

        if self.verbose >= 1 {
            self.write_stats(&mut output, result);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
