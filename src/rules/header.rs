use std::sync::LazyLock;

use regex::Regex;

use crate::extractor::directives;
use crate::model::{Category, Issue};
use crate::scanner::SourceFile;

use super::RuleInput;

static PRAGMA_ONCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]*pragma[ \t]+once\b").expect("Invalid regex"));
static IFNDEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*#[ \t]*(?:ifndef[ \t]+(\w+)|if[ \t]+!\s*defined\s*\(?\s*(\w+))")
        .expect("Invalid regex")
});
static DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#[ \t]*define[ \t]+(\w+)").expect("Invalid regex"));

/// Interface files without an include guard or `#pragma once`.
pub fn check_include_guards(input: &RuleInput<'_>) -> Vec<Issue> {
    input
        .sources
        .iter()
        .filter(|file| file.is_interface() && !has_include_guard(&directives(&file.raw_text)))
        .map(|file| {
            Issue::minor(
                Category::Header,
                format!(
                    "{} has no include guard or #pragma once",
                    file.path.display()
                ),
            )
            .at(&file.path, 1)
        })
        .collect()
}

/// `#pragma once`, or an `#ifndef NAME` whose `NAME` is `#define`d afterwards.
///
/// `text` holds only live directives; commented-out ones are already blanked.
fn has_include_guard(text: &str) -> bool {
    if PRAGMA_ONCE.is_match(text) {
        return true;
    }
    let Some(caps) = IFNDEF.captures(text) else {
        return false;
    };
    let Some(guard) = caps.get(1).or_else(|| caps.get(2)) else {
        return false;
    };
    DEFINE
        .captures_iter(&text[guard.end()..])
        .any(|define| &define[1] == guard.as_str())
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
