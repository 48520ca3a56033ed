use std::path::Path;

use crate::error::{ClassGuardError, Result};

use super::Config;
use super::model::CONFIG_VERSION;

/// Trait for loading configuration from an explicit file.
pub trait ConfigLoader {
    /// Load and validate the configuration at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Loads configuration from a file. There is no discovery: a config applies
/// only when its path is passed explicitly.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Load `path` when given, otherwise fall back to the defaults.
    ///
    /// # Errors
    /// Propagates any error from [`ConfigLoader::load_from_path`].
    pub fn load_optional(&self, path: Option<&Path>) -> Result<Config> {
        path.map_or_else(|| Ok(Config::default()), |p| self.load_from_path(p))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(ClassGuardError::from)?;
        validate_config(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_to_string(path).map_err(|e| {
            ClassGuardError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::parse_config(&content)
    }
}

fn validate_config(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ClassGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
