//! Stage-keyed registry of structural rules.
//!
//! A rule is a plain function over the whole extraction. Rules never see each
//! other's output, so the order they run in only affects discovery order.

mod access;
mod exceptions;
mod header;
mod inheritance;
mod lifecycle;
mod memory;

use std::fmt;

use indexmap::IndexMap;

use crate::model::{Category, ClassDefinition, Issue, Stage};
use crate::scanner::SourceFile;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub stage: Stage,
    pub definitions: &'a [ClassDefinition],
    pub sources: &'a [SourceFile],
}

pub type CheckFn = fn(&RuleInput<'_>) -> Vec<Issue>;

#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable identifier, unique across the table.
    pub id: &'static str,
    pub category: Category,
    /// First stage the rule applies to; it stays active for every later stage.
    pub since: Stage,
    pub check: CheckFn,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("since", &self.since)
            .finish_non_exhaustive()
    }
}

/// Every rule, in registration order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "access-unknown",
        category: Category::Access,
        since: Stage::Basics,
        check: access::check_unknown_access,
    },
    Rule {
        id: "header-guard",
        category: Category::Header,
        since: Stage::Basics,
        check: header::check_include_guards,
    },
    Rule {
        id: "memory-balance",
        category: Category::Memory,
        since: Stage::Memory,
        check: memory::check_allocation_balance,
    },
    Rule {
        id: "access-public-data",
        category: Category::Access,
        since: Stage::Orthodox,
        check: access::check_public_data,
    },
    Rule {
        id: "lifecycle-orthodox",
        category: Category::Lifecycle,
        since: Stage::Orthodox,
        check: lifecycle::check_canonical_form,
    },
    Rule {
        id: "inheritance-virtual-destructor",
        category: Category::Inheritance,
        since: Stage::Polymorphism,
        check: inheritance::check_virtual_destructor,
    },
    Rule {
        id: "exceptions-what",
        category: Category::Exceptions,
        since: Stage::Exceptions,
        check: exceptions::check_what_override,
    },
];

/// Runs the rules of one stage over a set of class definitions.
pub trait RuleRunner {
    fn run(
        &self,
        stage: Stage,
        definitions: &[ClassDefinition],
        sources: &[SourceFile],
    ) -> Vec<Issue>;
}

/// Registry built once from [`RULES`]; read-only afterwards.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    registry: IndexMap<Stage, Vec<Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    #[must_use]
    pub fn new() -> Self {
        let registry = Stage::ALL
            .iter()
            .map(|&stage| {
                let rules = RULES
                    .iter()
                    .filter(|rule| rule.since <= stage)
                    .copied()
                    .collect();
                (stage, rules)
            })
            .collect();
        Self { registry }
    }

    #[must_use]
    pub fn rules_for(&self, stage: Stage) -> &[Rule] {
        self.registry
            .get(&stage)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl RuleRunner for RuleEngine {
    fn run(
        &self,
        stage: Stage,
        definitions: &[ClassDefinition],
        sources: &[SourceFile],
    ) -> Vec<Issue> {
        let input = RuleInput {
            stage,
            definitions,
            sources,
        };
        self.rules_for(stage)
            .iter()
            .flat_map(|rule| (rule.check)(&input))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    use crate::model::{Access, ClassDefinition, ClassKeyword, ClassMember, MemberKind};

    pub fn member(name: &str, kind: MemberKind, line: usize) -> ClassMember {
        let signature = if kind.is_function_like() { "()" } else { "" };
        ClassMember {
            name: name.to_string(),
            declared_type: String::new(),
            kind,
            access: Access::Private,
            is_static: false,
            is_const: false,
            is_virtual: false,
            is_pure: false,
            line,
            signature: signature.to_string(),
        }
    }

    pub fn class(name: &str, members: Vec<ClassMember>) -> ClassDefinition {
        ClassDefinition {
            name: name.to_string(),
            keyword: ClassKeyword::Class,
            origin_file: PathBuf::from(format!("ex00/{name}.hpp")),
            exercise_group: "ex00".to_string(),
            start_line: 1,
            end_line: 20,
            members,
            base_classes: Vec::new(),
            is_abstract: false,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
