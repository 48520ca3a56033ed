use std::path::{Path, PathBuf};

use serde::Serialize;

use super::filter::INTERFACE_EXTENSIONS;

/// Whether a file declares interfaces or holds implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Implementation,
    Interface,
}

impl SourceKind {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_header = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_ascii_lowercase();
                INTERFACE_EXTENSIONS.iter().any(|h| *h == ext)
            });
        if is_header {
            Self::Interface
        } else {
            Self::Implementation
        }
    }
}

/// A discovered submission file with its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Name of the directory the file sits in, used to group the report.
    pub exercise_group: String,
    pub kind: SourceKind,
    pub raw_text: String,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, raw_text: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            exercise_group: exercise_group_of(&path),
            kind: SourceKind::from_path(&path),
            path,
            raw_text: raw_text.into(),
        }
    }

    #[must_use]
    pub const fn is_interface(&self) -> bool {
        matches!(self.kind, SourceKind::Interface)
    }
}

/// The immediate parent directory name, or `"."` when there is none.
#[must_use]
pub fn exercise_group_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map_or_else(|| ".".to_string(), |name| name.to_string_lossy().into_owned())
}
