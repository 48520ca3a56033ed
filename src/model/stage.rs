use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A point in the curriculum sequence.
///
/// Variants are declared in order of increasing sophistication, so the derived
/// `Ord` answers "is this stage at least as advanced as that one".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Classes, member functions, stdio streams
    #[default]
    #[value(alias = "cpp00")]
    #[serde(alias = "cpp00")]
    Basics,
    /// Memory allocation, pointers to members, references
    #[value(alias = "cpp01")]
    #[serde(alias = "cpp01")]
    Memory,
    /// Orthodox canonical form, operator overloading
    #[value(alias = "cpp02")]
    #[serde(alias = "cpp02")]
    Orthodox,
    /// Inheritance
    #[value(alias = "cpp03")]
    #[serde(alias = "cpp03")]
    Inheritance,
    /// Subtype polymorphism, abstract classes, interfaces
    #[value(alias = "cpp04")]
    #[serde(alias = "cpp04")]
    Polymorphism,
    /// Repetition and exceptions
    #[value(alias = "cpp05")]
    #[serde(alias = "cpp05")]
    Exceptions,
    /// C++ casts
    #[value(alias = "cpp06")]
    #[serde(alias = "cpp06")]
    Casts,
    /// Templates
    #[value(alias = "cpp07")]
    #[serde(alias = "cpp07")]
    Templates,
    /// Templated containers, iterators, algorithms
    #[value(alias = "cpp08")]
    #[serde(alias = "cpp08")]
    Containers,
}

impl Stage {
    pub const ALL: [Self; 9] = [
        Self::Basics,
        Self::Memory,
        Self::Orthodox,
        Self::Inheritance,
        Self::Polymorphism,
        Self::Exceptions,
        Self::Casts,
        Self::Templates,
        Self::Containers,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Memory => "memory",
            Self::Orthodox => "orthodox",
            Self::Inheritance => "inheritance",
            Self::Polymorphism => "polymorphism",
            Self::Exceptions => "exceptions",
            Self::Casts => "casts",
            Self::Templates => "templates",
            Self::Containers => "containers",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true).map_err(|_| format!("Unknown stage: {s}"))
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
