//! Plain data produced and consumed by the validation pipeline.

mod class;
mod issue;
mod result;
mod stage;

pub use class::{
    Access, ClassDefinition, ClassKeyword, ClassMember, MemberKind, split_top_level,
};
pub use issue::{Category, Issue, Location, Severity};
pub use result::{RunStats, ValidationResult};
pub use stage::Stage;
