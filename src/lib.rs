//! Structural validator for staged C++ exercise submissions.
//!
//! [`validate`] scans a submission directory, extracts class definitions and
//! applies the rules of a curriculum [`Stage`], returning a [`ValidationResult`].

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod model;
pub mod output;
pub mod rules;
pub mod scanner;

pub use engine::{DefaultEngine, ValidationEngine, validate};
pub use error::{ClassGuardError, Result};
pub use model::{Category, Issue, Location, Severity, Stage, ValidationResult};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VALIDATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
