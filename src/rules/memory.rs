use std::sync::LazyLock;

use regex::Regex;

use crate::extractor::sanitize;
use crate::model::{Category, Issue};
use crate::scanner::SourceFile;

use super::RuleInput;

static NEW_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnew\b").expect("Invalid regex"));
static DELETE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdelete\b(\s*\[\s*\])?").expect("Invalid regex"));

/// Allocation and release counts of one file, split by scalar and array form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    new_count: usize,
    delete_count: usize,
    /// Line of the first keyword of this form.
    first_line: Option<usize>,
}

impl Tally {
    fn record(&mut self, is_new: bool, line: usize) {
        if is_new {
            self.new_count += 1;
        } else {
            self.delete_count += 1;
        }
        self.first_line.get_or_insert(line);
    }
}

/// Files whose `new` and `delete` counts differ.
pub fn check_allocation_balance(input: &RuleInput<'_>) -> Vec<Issue> {
    input.sources.iter().flat_map(check_file).collect()
}

fn check_file(file: &SourceFile) -> Vec<Issue> {
    let (scalar, array) = tally(&sanitize(&file.raw_text));
    let mut issues = Vec::new();
    for (tally, new_kw, delete_kw) in [(scalar, "new", "delete"), (array, "new[]", "delete[]")] {
        if tally.new_count == tally.delete_count {
            continue;
        }
        let message = format!(
            "{} uses `{new_kw}` {} time(s) but `{delete_kw}` {} time(s)",
            file_name(file),
            tally.new_count,
            tally.delete_count
        );
        issues.push(
            Issue::major(Category::Memory, message)
                .at(&file.path, tally.first_line.unwrap_or(1)),
        );
    }
    issues
}

fn tally(clean: &str) -> (Tally, Tally) {
    let mut scalar = Tally::default();
    let mut array = Tally::default();

    for m in NEW_PATTERN.find_iter(clean) {
        if ends_with_word(clean[..m.start()].trim_end(), "operator") {
            continue;
        }
        let line = line_of(clean, m.start());
        if is_array_new(&clean[m.end()..]) {
            array.record(true, line);
        } else {
            scalar.record(true, line);
        }
    }

    for caps in DELETE_PATTERN.captures_iter(clean) {
        let Some(m) = caps.get(0) else { continue };
        if is_deleted_function_or_operator(&clean[..m.start()]) {
            continue;
        }
        let line = line_of(clean, m.start());
        if caps.get(1).is_some() {
            array.record(false, line);
        } else {
            scalar.record(false, line);
        }
    }

    (scalar, array)
}

/// `= delete` declarations and `operator delete` overloads release nothing.
fn is_deleted_function_or_operator(before: &str) -> bool {
    let before = before.trim_end();
    before.ends_with('=') || ends_with_word(before, "operator")
}

fn ends_with_word(text: &str, word: &str) -> bool {
    text.strip_suffix(word).is_some_and(|rest| {
        !rest
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    })
}

/// `new T[n]`: a `[` before the expression's argument list or terminator.
fn is_array_new(after: &str) -> bool {
    after
        .chars()
        .take_while(|c| !matches!(c, ';' | '(' | ')' | '{' | '}' | ',' | '='))
        .any(|c| c == '[')
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

fn file_name(file: &SourceFile) -> String {
    file.path
        .file_name()
        .map_or_else(|| file.path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
