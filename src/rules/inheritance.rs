use crate::model::{Category, Issue, MemberKind};

use super::RuleInput;

/// Derived classes with member functions but no virtual destructor.
pub fn check_virtual_destructor(input: &RuleInput<'_>) -> Vec<Issue> {
    input
        .definitions
        .iter()
        .filter(|class| !class.base_classes.is_empty())
        .filter(|class| class.has_kind(MemberKind::Function))
        .filter(|class| class.destructor().is_none_or(|dtor| !dtor.is_virtual))
        .map(|class| {
            Issue::critical(
                Category::Inheritance,
                format!(
                    "class {} derives from {} and declares member functions but has no virtual destructor",
                    class.name,
                    class.base_classes.join(", ")
                ),
            )
            .at(&class.origin_file, class.start_line)
        })
        .collect()
}

#[cfg(test)]
#[path = "inheritance_tests.rs"]
mod tests;
