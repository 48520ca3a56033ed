use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassGuardError {
    #[error("Cannot access submission path: {path}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Submission path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ClassGuardError {
    /// Short label used as the heading of a stderr diagnostic.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::FileSystem { .. } | Self::NotADirectory(_) | Self::FileRead { .. } => {
                "FileSystem"
            }
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileSystem { source, .. } | Self::FileRead { source, .. } => {
                Some(source.to_string())
            }
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// True for failures that mean the submission itself could not be read.
    #[must_use]
    pub const fn is_filesystem(&self) -> bool {
        matches!(
            self,
            Self::FileSystem { .. } | Self::NotADirectory(_) | Self::FileRead { .. }
        )
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::FileSystem { .. } | Self::NotADirectory(_) => {
                Some("Pass the directory that contains the exercise folders")
            }
            Self::TomlParse(_) | Self::Config(_) => {
                Some("Check the file given with --config against the documented keys")
            }
            Self::InvalidPattern { .. } => Some("Extensions are matched as `*.<ext>` globs"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
