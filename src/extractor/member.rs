use regex::Regex;

use crate::model::{Access, ClassMember, MemberKind, split_top_level};

/// Words that decorate a declaration without being part of its type.
const DECORATORS: &[&str] = &["virtual", "static", "inline", "explicit", "constexpr", "mutable"];

/// Classifies one complete member declaration (the text of a statement inside a
/// class body) into zero or more [`ClassMember`]s.
pub struct MemberParser {
    skip_pattern: Regex,
    operator_pattern: Regex,
    static_pattern: Regex,
    const_pattern: Regex,
    virtual_pattern: Regex,
    override_pattern: Regex,
    pure_pattern: Regex,
    pointer_name_pattern: Regex,
}

impl Default for MemberParser {
    fn default() -> Self {
        Self::new()
    }
}

/// The class a declaration belongs to, plus the access section it sits in.
#[derive(Debug, Clone, Copy)]
pub struct MemberContext<'a> {
    pub class_name: &'a str,
    pub access: Access,
    pub line: usize,
}

impl MemberParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            skip_pattern: Regex::new(
                r"^(?:friend|using|typedef|enum|static_assert|namespace|union)\b",
            )
            .expect("Invalid regex"),
            operator_pattern: Regex::new(
                r"\boperator\s*(\(\s*\)|\[\s*\]|(?:new|delete)(?:\s*\[\s*\])?|[^\w\s(]+|[A-Za-z_][\w:<>\s*&]*?)\s*\(",
            )
            .expect("Invalid regex"),
            static_pattern: Regex::new(r"\bstatic\b").expect("Invalid regex"),
            const_pattern: Regex::new(r"\bconst\b").expect("Invalid regex"),
            virtual_pattern: Regex::new(r"\bvirtual\b").expect("Invalid regex"),
            override_pattern: Regex::new(r"\b(?:override|final)\b").expect("Invalid regex"),
            pure_pattern: Regex::new(r"=\s*0\s*$").expect("Invalid regex"),
            pointer_name_pattern: Regex::new(
                r"^\(\s*(?:[A-Za-z_][\w:]*::)?[*&]+\s*([A-Za-z_]\w*)",
            )
            .expect("Invalid regex"),
        }
    }

    /// Classify a declaration. Text that is not a member (friend declarations,
    /// typedefs, stray tokens) yields an empty vector.
    #[must_use]
    pub fn parse(&self, statement: &str, ctx: MemberContext<'_>) -> Vec<ClassMember> {
        let normalized = normalize_whitespace(statement);
        let text = strip_template_prefix(normalized.trim_end_matches(';').trim());

        if text.is_empty() || self.skip_pattern.is_match(text) || is_nested_forward_decl(text) {
            return Vec::new();
        }

        match find_top_level(text, '(') {
            Some(open) => self.parse_function(text, open, ctx).into_iter().collect(),
            None => self.parse_variables(text, ctx),
        }
    }

    fn parse_function(&self, text: &str, open: usize, ctx: MemberContext<'_>) -> Option<ClassMember> {
        let (name, params_start, type_end) =
            if let Some(caps) = self.operator_pattern.captures(text) {
                let whole = caps.get(0)?;
                let symbol = caps.get(1).map_or("", |m| m.as_str()).trim();
                let name = if symbol.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
                    format!("operator {}", normalize_whitespace(symbol))
                } else {
                    format!("operator{}", symbol.replace(char::is_whitespace, ""))
                };
                (name, whole.end() - 1, whole.start())
            } else {
                // `void (*callback)(int);` is a data member holding a function pointer.
                if let Some(member) = self.parse_function_pointer(text, open, ctx) {
                    return Some(member);
                }
                let prefix = strip_trailing_template_args(text[..open].trim_end());
                let raw_name = trailing_identifier(prefix);
                if raw_name.is_empty() {
                    return None;
                }
                let name = raw_name.rsplit("::").next().unwrap_or(raw_name).to_string();
                (name, open, prefix.len() - raw_name.len())
            };

        let close = matching_paren(text, params_start).unwrap_or(text.len() - 1);
        let signature = text[params_start..=close].to_string();
        let tail = &text[close + 1..];

        let declared_type = strip_decorators(&text[..type_end]);
        let mut member = ClassMember {
            kind: MemberKind::Function,
            name,
            declared_type,
            access: ctx.access,
            is_static: self.static_pattern.is_match(text),
            is_const: self.const_pattern.is_match(text),
            is_virtual: self.virtual_pattern.is_match(text) || self.override_pattern.is_match(tail),
            is_pure: self.pure_pattern.is_match(tail),
            line: ctx.line,
            signature,
        };
        member.kind = classify_function(&member, ctx.class_name);
        Some(member)
    }

    fn parse_function_pointer(
        &self,
        text: &str,
        open: usize,
        ctx: MemberContext<'_>,
    ) -> Option<ClassMember> {
        let caps = self.pointer_name_pattern.captures(&text[open..])?;
        let name = caps.get(1)?.as_str().to_string();
        Some(ClassMember {
            declared_type: strip_decorators(text),
            name,
            kind: MemberKind::Variable,
            access: ctx.access,
            is_static: self.static_pattern.is_match(text),
            is_const: self.const_pattern.is_match(text),
            is_virtual: false,
            is_pure: false,
            line: ctx.line,
            signature: String::new(),
        })
    }

    fn parse_variables(&self, text: &str, ctx: MemberContext<'_>) -> Vec<ClassMember> {
        let is_static = self.static_pattern.is_match(text);
        let is_const = self.const_pattern.is_match(text);
        let declarators = split_top_level(text, ',');

        let mut members = Vec::new();
        let mut base_type = String::new();

        for (idx, declarator) in declarators.iter().enumerate() {
            let core = strip_initializer(declarator);
            let name = trailing_identifier(core);
            if name.is_empty() {
                continue;
            }
            let before = core[..core.len() - name.len()].trim_end();

            let declared_type = if idx == 0 {
                if before.is_empty() || is_decorator_only(before) {
                    // A lone identifier such as a macro invocation is not a declaration.
                    return Vec::new();
                }
                let declared = strip_decorators(before);
                base_type = declared.trim_end_matches(['*', '&', ' ']).to_string();
                declared
            } else {
                format!("{base_type}{}", before.trim())
            };

            members.push(ClassMember {
                name: name.to_string(),
                declared_type,
                kind: MemberKind::Variable,
                access: ctx.access,
                is_static,
                is_const,
                is_virtual: false,
                is_pure: false,
                line: ctx.line,
                signature: String::new(),
            });
        }

        members
    }
}

fn classify_function(member: &ClassMember, class_name: &str) -> MemberKind {
    if let Some(stripped) = member.name.strip_prefix('~') {
        return if stripped == class_name {
            MemberKind::Destructor
        } else {
            MemberKind::Function
        };
    }
    let params = member.parameters();
    if member.name == class_name {
        if params.len() == 1 && is_same_class_param(params[0], class_name) {
            return MemberKind::CopyConstructor;
        }
        return MemberKind::Constructor;
    }
    if member.name == "operator=" && params.len() == 1 {
        return MemberKind::AssignmentOperator;
    }
    MemberKind::Function
}

/// Whether a parameter's type is `class_name` taken by value or lvalue reference.
fn is_same_class_param(param: &str, class_name: &str) -> bool {
    let param = param.split('=').next().unwrap_or(param);
    if param.contains("&&") || param.contains('*') {
        return false;
    }
    let cleaned = param.replace('&', " ");
    let type_token = cleaned
        .split_whitespace()
        .find(|tok| !matches!(*tok, "const" | "volatile" | "class" | "struct"));
    type_token.is_some_and(|tok| {
        let base = tok.split('<').next().unwrap_or(tok);
        base.rsplit("::").next() == Some(class_name)
    })
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `template <typename T> void f(T);` → `void f(T);`
fn strip_template_prefix(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("template") else {
        return text;
    };
    let rest = rest.trim_start();
    if !rest.starts_with('<') {
        return text;
    }
    let mut depth = 0usize;
    for (idx, ch) in rest.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return rest[idx + 1..].trim_start();
                }
            }
            _ => {}
        }
    }
    text
}

/// `class Foo` / `struct Foo` inside a class body declares a nested type, not a member.
fn is_nested_forward_decl(text: &str) -> bool {
    let mut tokens = text.split_whitespace();
    matches!(tokens.next(), Some("class" | "struct")) && tokens.count() <= 1
}

/// First occurrence of `target` outside `<...>` nesting.
fn find_top_level(text: &str, target: char) -> Option<usize> {
    let mut angle = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '<' => angle += 1,
            '>' => angle = angle.saturating_sub(1),
            c if c == target && angle == 0 => return Some(idx),
            _ => {}
        }
    }
    // Comparison operators can unbalance the count; fall back to the first match.
    text.find(target)
}

fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text[open..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(open + idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// `Array<T>` → `Array` at the end of a declaration prefix.
fn strip_trailing_template_args(prefix: &str) -> &str {
    if !prefix.ends_with('>') {
        return prefix;
    }
    let mut depth = 0usize;
    for (idx, ch) in prefix.char_indices().rev() {
        match ch {
            '>' => depth += 1,
            '<' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return prefix[..idx].trim_end();
                }
            }
            _ => {}
        }
    }
    prefix
}

/// The identifier (optionally `~`-prefixed or `::`-qualified) ending `text`.
fn trailing_identifier(text: &str) -> &str {
    let text = text.trim_end();
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || matches!(c, '_' | '~' | ':'))
        .last()
        .map_or(text.len(), |(idx, _)| idx);
    let candidate = text[start..].trim_start_matches(':');
    if candidate.starts_with(|c: char| c.is_ascii_digit()) {
        return "";
    }
    candidate
}

/// Drop an initializer, bit-field width or array extent from a declarator.
fn strip_initializer(declarator: &str) -> &str {
    let mut end = declarator.len();
    if let Some(eq) = declarator.find('=') {
        end = end.min(eq);
    }
    if let Some(brace) = declarator.find('{') {
        end = end.min(brace);
    }
    if let Some(bracket) = declarator.find('[') {
        end = end.min(bracket);
    }
    if let Some(colon) = find_single_colon(declarator) {
        end = end.min(colon);
    }
    declarator[..end].trim_end()
}

/// A `:` that is not half of `::`.
fn find_single_colon(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| {
        bytes[i] == b':'
            && bytes.get(i + 1) != Some(&b':')
            && (i == 0 || bytes[i - 1] != b':')
    })
}

fn strip_decorators(text: &str) -> String {
    text.split_whitespace()
        .filter(|tok| !DECORATORS.contains(tok))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_decorator_only(text: &str) -> bool {
    text.split_whitespace().all(|tok| DECORATORS.contains(&tok))
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
