use indexmap::IndexMap;

use crate::model::{Category, ClassDefinition, Issue, MemberKind};

use super::RuleInput;

/// The four members of the orthodox canonical form, in report order.
const CANONICAL: [&str; 4] = [
    "default constructor",
    "copy constructor",
    "copy assignment operator",
    "destructor",
];

/// Classes that declare some, but not all, of the canonical members.
///
/// Same-named classes within one exercise group are pooled, so a class split
/// across several headers is judged once on the union of its members.
pub fn check_canonical_form(input: &RuleInput<'_>) -> Vec<Issue> {
    let mut pooled: IndexMap<(&str, &str), Vec<&ClassDefinition>> = IndexMap::new();
    for class in input.definitions {
        pooled
            .entry((class.exercise_group.as_str(), class.name.as_str()))
            .or_default()
            .push(class);
    }

    pooled
        .values()
        .filter_map(|classes| {
            let present = canonical_presence(classes);
            let count = present.iter().filter(|&&p| p).count();
            if count == 0 || count == CANONICAL.len() {
                return None;
            }
            let missing: Vec<&str> = CANONICAL
                .iter()
                .zip(present)
                .filter(|(_, p)| !p)
                .map(|(name, _)| *name)
                .collect();
            // Reported at the earliest definition, whatever order the pool was built in.
            let first = classes
                .iter()
                .min_by_key(|class| (&class.origin_file, class.start_line))?;
            Some(
                Issue::major(
                    Category::Lifecycle,
                    format!(
                        "class {} is not in orthodox canonical form: missing {}",
                        first.name,
                        missing.join(", ")
                    ),
                )
                .at(&first.origin_file, first.start_line),
            )
        })
        .collect()
}

fn canonical_presence(classes: &[&ClassDefinition]) -> [bool; 4] {
    let members = || classes.iter().flat_map(|class| class.members.iter());
    [
        members().any(|m| m.is_default_constructor()),
        members().any(|m| m.kind == MemberKind::CopyConstructor),
        members().any(|m| m.kind == MemberKind::AssignmentOperator),
        members().any(|m| m.kind == MemberKind::Destructor),
    ]
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
