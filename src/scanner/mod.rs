mod filter;
mod types;

pub use filter::{FileFilter, GlobFilter, IMPLEMENTATION_EXTENSIONS, INTERFACE_EXTENSIONS};
pub use types::{SourceFile, SourceKind, exercise_group_of};

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ClassGuardError, Result};

/// Trait for discovering submission files under a root directory.
pub trait SourceScanner {
    /// Scan a directory and return every matching file with its contents, sorted by path.
    ///
    /// # Errors
    /// Returns a filesystem error if the root is missing, unreadable or not a directory,
    /// or if a matching file cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<SourceFile>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn check_root(root: &Path) -> Result<()> {
        let metadata = fs::metadata(root).map_err(|source| ClassGuardError::FileSystem {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ClassGuardError::NotADirectory(root.to_path_buf()));
        }
        // Listing the root up front turns "exists but unreadable" into an error
        // instead of an empty walk.
        fs::read_dir(root).map_err(|source| ClassGuardError::FileSystem {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Every matching file under `root`, sorted. Any entry the walk cannot read,
    /// including a dangling symlink, fails the whole scan.
    fn collect_paths(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = entry.map_err(|err| walk_error(root, err))?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> ClassGuardError {
    let path = err.path().unwrap_or(root).to_path_buf();
    ClassGuardError::FileSystem {
        path,
        source: err.into(),
    }
}

impl<F: FileFilter> SourceScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<SourceFile>> {
        Self::check_root(root)?;

        self.collect_paths(root)?
            .into_iter()
            .map(|path| read_source(&path).map(|text| SourceFile::new(path, text)))
            .collect()
    }
}

/// Read a file as text, replacing invalid UTF-8 rather than rejecting it.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| ClassGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
