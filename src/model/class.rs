use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// What kind of declaration a class member is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Variable,
    Function,
    Constructor,
    Destructor,
    CopyConstructor,
    AssignmentOperator,
}

impl MemberKind {
    /// Whether the member was declared with a parameter list.
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        !matches!(self, Self::Variable)
    }
}

/// Visibility section a member was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Private,
    Protected,
    Public,
    /// The section label could not be classified.
    Unknown,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Public => "public",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// The keyword that introduced a class body. Decides the default access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKeyword {
    Class,
    Struct,
}

impl ClassKeyword {
    #[must_use]
    pub const fn default_access(self) -> Access {
        match self {
            Self::Class => Access::Private,
            Self::Struct => Access::Public,
        }
    }
}

/// One declared member of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMember {
    pub name: String,
    /// Type tokens as written, without the name and modifier keywords.
    pub declared_type: String,
    pub kind: MemberKind,
    pub access: Access,
    pub is_static: bool,
    pub is_const: bool,
    pub is_virtual: bool,
    /// Declared with `= 0`.
    pub is_pure: bool,
    pub line: usize,
    /// Parenthesized parameter list for function-like kinds, empty for variables.
    pub signature: String,
}

impl ClassMember {
    #[must_use]
    pub const fn is_function_like(&self) -> bool {
        self.kind.is_function_like()
    }

    /// Parameters of the signature split at top-level commas, trimmed.
    ///
    /// `()` and `(void)` both yield an empty list.
    #[must_use]
    pub fn parameters(&self) -> Vec<&str> {
        let inner = self
            .signature
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or("")
            .trim();
        if inner.is_empty() || inner == "void" {
            return Vec::new();
        }
        split_top_level(inner, ',')
    }

    /// True for a constructor callable without arguments.
    #[must_use]
    pub fn is_default_constructor(&self) -> bool {
        self.kind == MemberKind::Constructor
            && self.parameters().iter().all(|param| param.contains('='))
    }
}

/// One recognized, fully terminated class or struct body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDefinition {
    pub name: String,
    pub keyword: ClassKeyword,
    pub origin_file: PathBuf,
    pub exercise_group: String,
    pub start_line: usize,
    pub end_line: usize,
    pub members: Vec<ClassMember>,
    pub base_classes: Vec<String>,
    pub is_abstract: bool,
}

impl ClassDefinition {
    #[must_use]
    pub fn has_kind(&self, kind: MemberKind) -> bool {
        self.members.iter().any(|m| m.kind == kind)
    }

    pub fn members_of_kind(&self, kind: MemberKind) -> impl Iterator<Item = &ClassMember> {
        self.members.iter().filter(move |m| m.kind == kind)
    }

    #[must_use]
    pub fn destructor(&self) -> Option<&ClassMember> {
        self.members_of_kind(MemberKind::Destructor).next()
    }
}

/// Split `text` on `separator` where it is not nested inside `()`, `<>`, `[]` or `{}`.
#[must_use]
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match ch {
            '(' | '<' | '[' | '{' => depth += 1,
            ')' | '>' | ']' | '}' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(text[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(text[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

#[cfg(test)]
#[path = "class_tests.rs"]
mod tests;
