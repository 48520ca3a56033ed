//! Colored stderr diagnostics.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::Write;

use super::{ColorMode, ansi};
use crate::error::ClassGuardError;
use crate::model::{Category, Issue};

pub struct ErrorOutput {
    use_colors: bool,
    quiet: bool,
}

impl ErrorOutput {
    /// Diagnostics for stderr, with color resolved against stderr.
    #[must_use]
    pub fn stderr(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled_for(&std::io::stderr()),
            quiet: false,
        }
    }

    /// Quiet output still reports configuration errors; fast-fail notes and
    /// warnings are dropped.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            quiet: false,
        }
    }

    pub fn print_error(&self, error: &ClassGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_class_guard_error(&mut stderr, error);
    }

    /// Explains a run that stopped before any file was examined.
    pub fn print_fast_fail(&self, issue: &Issue) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        self.write_fast_fail(&mut stderr, issue);
    }

    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, suggestion);
    }

    pub fn write_class_guard_error<W: Write>(&self, w: &mut W, error: &ClassGuardError) {
        let detail = error.detail();
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    pub fn write_fast_fail<W: Write>(&self, w: &mut W, issue: &Issue) {
        let suggestion = (issue.category == Category::Filesystem)
            .then_some("Pass the directory that contains the exercise folders");
        self.write_error(w, "FileSystem", &issue.message, None, suggestion);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing useful can be done if stderr itself is gone.
        if self.use_colors {
            writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            )
            .ok();
        } else {
            writeln!(w, "✖ {error_type}: {message}").ok();
        }

        if let Some(d) = detail {
            if self.use_colors {
                writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET).ok();
            } else {
                writeln!(w, "  × {d}").ok();
            }
        }
        self.write_suggestion(w, suggestion);
    }

    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, suggestion: Option<&str>) {
        if self.use_colors {
            writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            )
            .ok();
        } else {
            writeln!(w, "⚠ Warning: {message}").ok();
        }
        self.write_suggestion(w, suggestion);
    }

    fn write_suggestion<W: Write>(&self, w: &mut W, suggestion: Option<&str>) {
        let Some(s) = suggestion else {
            return;
        };
        if self.use_colors {
            writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET).ok();
        } else {
            writeln!(w, "  help: {s}").ok();
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
