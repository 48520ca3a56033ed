use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// How serious a finding is.
///
/// Ordered from least to most severe so that `severity >= threshold` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Minor,
    Major,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule family a finding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Filesystem,
    Extraction,
    Lifecycle,
    Access,
    Inheritance,
    Memory,
    Exceptions,
    Header,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Extraction => "extraction",
            Self::Lifecycle => "lifecycle",
            Self::Access => "access",
            Self::Inheritance => "inheritance",
            Self::Memory => "memory",
            Self::Exceptions => "exceptions",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source position of a finding (1-indexed line).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Issue {
    /// Create an issue without a location.
    ///
    /// An empty message is replaced by a generic one naming the category, so the
    /// "message is never empty" guarantee holds for every constructed issue.
    #[must_use]
    pub fn new(severity: Severity, category: Category, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = format!("unspecified {category} finding");
        }
        Self {
            severity,
            category,
            message,
            location: None,
        }
    }

    #[must_use]
    pub fn critical(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, category, message)
    }

    #[must_use]
    pub fn major(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Major, category, message)
    }

    #[must_use]
    pub fn minor(category: Category, message: impl Into<String>) -> Self {
        Self::new(Severity::Minor, category, message)
    }

    #[must_use]
    pub fn at(mut self, file: &Path, line: usize) -> Self {
        self.location = Some(Location::new(file, line));
        self
    }

    #[must_use]
    pub fn is_at_least(&self, threshold: Severity) -> bool {
        self.severity >= threshold
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
