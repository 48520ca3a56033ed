//! Class-structure recognition over C++ source text.
//!
//! Extraction is best-effort: malformed input degrades to fewer members or an
//! [`UnterminatedClass`] note, never to an error.

mod class_parser;
mod member;
mod sanitize;

use std::path::PathBuf;

pub use class_parser::ClassDefinitionExtractor;
pub use member::{MemberContext, MemberParser};
pub use sanitize::{directives, sanitize};

use crate::model::ClassDefinition;
use crate::scanner::SourceFile;

/// A class body still open when its file ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedClass {
    pub name: String,
    pub file: PathBuf,
    pub start_line: usize,
}

/// Everything recognized in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Terminated classes, in the order their bodies closed.
    pub definitions: Vec<ClassDefinition>,
    pub unterminated: Vec<UnterminatedClass>,
}

/// Turns one source file into class definitions.
///
/// Implementations must be pure functions of the file so the engine can run
/// them in parallel.
pub trait Extractor: Sync {
    fn extract(&self, file: &SourceFile) -> Extraction;
}

impl Extractor for ClassDefinitionExtractor {
    fn extract(&self, file: &SourceFile) -> Extraction {
        self.extract_file(file)
    }
}
