use crate::model::{Access, Category, Issue, MemberKind};

use super::RuleInput;

/// Members whose access section could not be classified.
pub fn check_unknown_access(input: &RuleInput<'_>) -> Vec<Issue> {
    input
        .definitions
        .iter()
        .flat_map(|class| {
            class
                .members
                .iter()
                .filter(|member| member.access == Access::Unknown)
                .map(|member| {
                    Issue::minor(
                        Category::Access,
                        format!(
                            "{}::{} is declared under an unrecognized access label",
                            class.name, member.name
                        ),
                    )
                    .at(&class.origin_file, member.line)
                })
        })
        .collect()
}

/// Data members exposed in a public section.
pub fn check_public_data(input: &RuleInput<'_>) -> Vec<Issue> {
    input
        .definitions
        .iter()
        .flat_map(|class| {
            class
                .members_of_kind(MemberKind::Variable)
                .filter(|member| member.access == Access::Public)
                .map(|member| {
                    Issue::major(
                        Category::Access,
                        format!(
                            "{}::{} is a public data member; keep attributes private",
                            class.name, member.name
                        ),
                    )
                    .at(&class.origin_file, member.line)
                })
        })
        .collect()
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
