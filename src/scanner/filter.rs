use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{ClassGuardError, Result};

/// Extensions of C++ implementation files.
pub const IMPLEMENTATION_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "c++", "tpp", "ipp", "inl"];

/// Extensions of C++ interface (header) files.
pub const INTERFACE_EXTENSIONS: &[&str] = &["hpp", "h", "hh", "hxx", "h++"];

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Matches file names against `*.<ext>` globs, ignoring case.
pub struct GlobFilter {
    sources: GlobSet,
}

impl GlobFilter {
    /// Create a filter accepting files whose name ends in one of `extensions`.
    ///
    /// # Errors
    /// Returns an error if an extension does not form a valid glob.
    pub fn new(extensions: &[&str]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for ext in extensions {
            let pattern = format!("*.{}", ext.trim_start_matches('.'));
            let glob = GlobBuilder::new(&pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ClassGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }
        let sources = builder
            .build()
            .map_err(|source| ClassGuardError::InvalidPattern {
                pattern: extensions.join(", "),
                source,
            })?;
        Ok(Self { sources })
    }

    /// Filter accepting every C++ source and header extension.
    ///
    /// # Panics
    /// Never: the built-in extensions are plain words.
    #[must_use]
    pub fn cpp_sources() -> Self {
        let extensions: Vec<&str> = IMPLEMENTATION_EXTENSIONS
            .iter()
            .chain(INTERFACE_EXTENSIONS)
            .copied()
            .collect();
        Self::new(&extensions).expect("Invalid glob")
    }
}

impl Default for GlobFilter {
    fn default() -> Self {
        Self::cpp_sources()
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.sources.is_match(Path::new(name)))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
