use crate::model::{Category, ClassDefinition, Issue, MemberKind};

use super::RuleInput;

/// Exception classes that never override `what()`.
pub fn check_what_override(input: &RuleInput<'_>) -> Vec<Issue> {
    input
        .definitions
        .iter()
        .filter(|class| derives_from_std_exception(class))
        .filter(|class| {
            !class
                .members_of_kind(MemberKind::Function)
                .any(|member| member.name == "what")
        })
        .map(|class| {
            Issue::major(
                Category::Exceptions,
                format!(
                    "exception class {} derives from std::exception but does not override what()",
                    class.name
                ),
            )
            .at(&class.origin_file, class.start_line)
        })
        .collect()
}

fn derives_from_std_exception(class: &ClassDefinition) -> bool {
    class.base_classes.iter().any(|base| {
        let base = base.trim_start_matches("::");
        base == "exception" || base == "std::exception"
    })
}

#[cfg(test)]
#[path = "exceptions_tests.rs"]
mod tests;
