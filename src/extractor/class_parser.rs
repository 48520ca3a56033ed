use regex::Regex;

use super::member::{MemberContext, MemberParser};
use super::sanitize::sanitize;
use super::{Extraction, UnterminatedClass};
use crate::model::{Access, ClassDefinition, ClassKeyword, ClassMember, split_top_level};
use crate::scanner::SourceFile;

/// Brace-depth scanner that recognizes class bodies and their members.
///
/// Works on sanitized text, one character at a time, so one-line bodies and
/// declarations spanning several lines are handled the same way.
pub struct ClassDefinitionExtractor {
    intro_pattern: Regex,
    label_pattern: Regex,
    identifier_pattern: Regex,
    type_block_pattern: Regex,
    members: MemberParser,
}

impl Default for ClassDefinitionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassDefinitionExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            intro_pattern: Regex::new(
                r"^(?:template\s*<.*>\s*)?(class|struct)\s+([A-Za-z_][\w:]*)(?:\s*<.*?>)?(?:\s+final)?\s*(?::\s*(.+))?$",
            )
            .expect("Invalid regex"),
            label_pattern: Regex::new(r"^(public|protected|private)(?:\s+\w+)?$")
                .expect("Invalid regex"),
            identifier_pattern: Regex::new(r"^[A-Za-z_]\w*$").expect("Invalid regex"),
            type_block_pattern: Regex::new(r"^(?:enum|union|struct|class|namespace|extern)\b")
                .expect("Invalid regex"),
            members: MemberParser::new(),
        }
    }

    /// Extract every terminated class body in `file`, plus the ones left open at EOF.
    #[must_use]
    pub fn extract_file(&self, file: &SourceFile) -> Extraction {
        let clean = sanitize(&file.raw_text);
        let chars: Vec<char> = clean.chars().collect();
        let mut walk = Walk::new(self, file);

        let mut i = 0;
        while i < chars.len() {
            let ch = chars[i];
            match ch {
                '\n' => {
                    walk.push(ch);
                    walk.line += 1;
                }
                '(' => {
                    walk.paren += 1;
                    walk.push(ch);
                }
                ')' => {
                    walk.paren = walk.paren.saturating_sub(1);
                    walk.push(ch);
                }
                // Braces inside a parameter list (default arguments) are not scopes.
                '{' if walk.paren == 0 => walk.open_brace(),
                '}' if walk.paren == 0 => walk.close_brace(),
                ';' => walk.semicolon(),
                ':' if chars.get(i + 1) == Some(&':') => {
                    walk.push(':');
                    walk.push(':');
                    i += 1;
                }
                ':' => walk.colon(),
                _ => walk.push(ch),
            }
            i += 1;
        }

        walk.finish()
    }

    fn class_intro(&self, statement: &str) -> Option<(String, ClassKeyword, Vec<String>)> {
        let caps = self.intro_pattern.captures(statement)?;
        let keyword = if &caps[1] == "struct" {
            ClassKeyword::Struct
        } else {
            ClassKeyword::Class
        };
        let qualified = caps[2].trim_end_matches(':');
        let name = qualified.rsplit("::").next().unwrap_or(qualified).to_string();
        let bases = caps
            .get(3)
            .map(|m| parse_base_list(m.as_str()))
            .unwrap_or_default();
        Some((name, keyword, bases))
    }

    /// `last_line` is the statement's final non-blank line, so a label preceded
    /// by an unterminated macro line (`Q_OBJECT`) is still recognized.
    fn access_label(&self, statement: &str, last_line: &str) -> Option<Access> {
        let caps = self
            .label_pattern
            .captures(statement)
            .or_else(|| self.label_pattern.captures(last_line));
        if let Some(caps) = caps {
            let access = match &caps[1] {
                "public" => Access::Public,
                "protected" => Access::Protected,
                _ => Access::Private,
            };
            return Some(access);
        }
        self.identifier_pattern
            .is_match(statement)
            .then_some(Access::Unknown)
    }
}

/// `public Base<T>, virtual private Other` → `["Base<T>", "Other"]`
fn parse_base_list(list: &str) -> Vec<String> {
    split_top_level(list, ',')
        .into_iter()
        .filter_map(|base| {
            let name = base
                .split_whitespace()
                .filter(|tok| !matches!(*tok, "public" | "protected" | "private" | "virtual"))
                .collect::<Vec<_>>()
                .join(" ");
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A class whose closing brace has not been seen yet.
struct OpenClass {
    name: String,
    keyword: ClassKeyword,
    start_line: usize,
    /// Brace depth of the class body itself.
    body_depth: usize,
    access: Access,
    members: Vec<ClassMember>,
    base_classes: Vec<String>,
}

impl OpenClass {
    fn close(self, file: &SourceFile, end_line: usize) -> ClassDefinition {
        ClassDefinition {
            is_abstract: self.members.iter().any(|m| m.is_pure),
            name: self.name,
            keyword: self.keyword,
            origin_file: file.path.clone(),
            exercise_group: file.exercise_group.clone(),
            start_line: self.start_line,
            end_line,
            members: self.members,
            base_classes: self.base_classes,
        }
    }
}

/// Per-file scanning state.
struct Walk<'a> {
    extractor: &'a ClassDefinitionExtractor,
    file: &'a SourceFile,
    line: usize,
    depth: usize,
    paren: usize,
    /// Text of the statement being accumulated at the current level.
    buffer: String,
    buffer_line: Option<usize>,
    /// Depth at which a brace initializer (`int x{0};`) was opened.
    initializer_depth: Option<usize>,
    /// The statement after a nested class body (`} instance;`) is not a member.
    discard_next: bool,
    stack: Vec<OpenClass>,
    definitions: Vec<ClassDefinition>,
}

impl<'a> Walk<'a> {
    const fn new(extractor: &'a ClassDefinitionExtractor, file: &'a SourceFile) -> Self {
        Self {
            extractor,
            file,
            line: 1,
            depth: 0,
            paren: 0,
            buffer: String::new(),
            buffer_line: None,
            initializer_depth: None,
            discard_next: false,
            stack: Vec::new(),
            definitions: Vec::new(),
        }
    }

    /// Outside any class every level counts; inside one only the body level does.
    fn at_statement_level(&self) -> bool {
        self.stack.last().is_none_or(|top| top.body_depth == self.depth)
    }

    fn push(&mut self, ch: char) {
        if !self.at_statement_level() {
            return;
        }
        if self.buffer_line.is_none() && !ch.is_whitespace() {
            self.buffer_line = Some(self.line);
        }
        self.buffer.push(ch);
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.buffer_line = None;
    }

    fn statement_line(&self) -> usize {
        self.buffer_line.unwrap_or(self.line)
    }

    fn open_brace(&mut self) {
        if !self.at_statement_level() {
            self.depth += 1;
            return;
        }
        self.discard_next = false;
        let statement = normalize(&self.buffer);

        if let Some((name, keyword, base_classes)) = self.extractor.class_intro(&statement) {
            let start_line = self.statement_line();
            self.depth += 1;
            self.stack.push(OpenClass {
                name,
                keyword,
                start_line,
                body_depth: self.depth,
                access: keyword.default_access(),
                members: Vec::new(),
                base_classes,
            });
            self.clear();
            return;
        }

        if !self.stack.is_empty()
            && !statement.is_empty()
            && !self.extractor.type_block_pattern.is_match(&statement)
        {
            if statement.contains('(') {
                // Inline function body: the declaration is complete at `{`.
                self.emit_members(&statement);
            } else {
                self.initializer_depth = Some(self.depth);
                self.depth += 1;
                return;
            }
        }
        self.clear();
        self.depth += 1;
    }

    fn close_brace(&mut self) {
        if self.depth == 0 {
            return;
        }
        self.depth -= 1;

        if self.stack.last().is_some_and(|top| top.body_depth == self.depth + 1)
            && let Some(open) = self.stack.pop()
        {
            self.definitions.push(open.close(self.file, self.line));
            self.clear();
            self.discard_next = true;
            return;
        }

        if self.at_statement_level() {
            if self.initializer_depth == Some(self.depth) {
                self.initializer_depth = None;
            } else {
                self.clear();
            }
        }
    }

    fn semicolon(&mut self) {
        self.paren = 0;
        if !self.at_statement_level() {
            return;
        }
        if self.discard_next {
            self.discard_next = false;
        } else if !self.stack.is_empty() {
            let statement = std::mem::take(&mut self.buffer);
            self.emit_members(&statement);
        }
        self.clear();
    }

    fn colon(&mut self) {
        if self.paren > 0 || self.stack.is_empty() || !self.at_statement_level() {
            self.push(':');
            return;
        }
        let statement = normalize(&self.buffer);
        let last_line = self
            .buffer
            .lines()
            .rev()
            .map(normalize)
            .find(|line| !line.is_empty())
            .unwrap_or_default();
        if let Some(access) = self.extractor.access_label(&statement, &last_line)
            && let Some(top) = self.stack.last_mut()
        {
            top.access = access;
            self.discard_next = false;
            self.clear();
            return;
        }
        self.push(':');
    }

    fn emit_members(&mut self, statement: &str) {
        let line = self.statement_line();
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        let parsed = self.extractor.members.parse(
            statement,
            MemberContext {
                class_name: &top.name,
                access: top.access,
                line,
            },
        );
        top.members.extend(parsed);
    }

    fn finish(self) -> Extraction {
        let file = self.file;
        let unterminated = self
            .stack
            .into_iter()
            .map(|open| UnterminatedClass {
                name: open.name,
                file: file.path.clone(),
                start_line: open.start_line,
            })
            .collect();
        Extraction {
            definitions: self.definitions,
            unterminated,
        }
    }
}

#[cfg(test)]
#[path = "class_parser_tests.rs"]
mod tests;
