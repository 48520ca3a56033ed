//! Blanking of comments, literal contents and preprocessor lines.
//!
//! Structural scanning counts braces and semicolons; a `{` inside a string or a
//! `;` inside a comment would corrupt that count. The sanitizer replaces every such
//! character with a space while keeping newlines, so line numbers and column
//! positions in the output match the input exactly.

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Str,
    Char,
    RawStr(String),
    Preprocessor,
}

/// Which part of the text survives blanking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    Code,
    Directives,
}

/// Return `source` with comments, literal contents and preprocessor lines blanked.
#[must_use]
pub fn sanitize(source: &str) -> String {
    blank(source, Keep::Code)
}

/// Return only the preprocessor lines of `source`; code, comments and literals are blanked.
///
/// A directive inside a comment or a string is not a directive, so it does not survive.
#[must_use]
pub fn directives(source: &str) -> String {
    blank(source, Keep::Directives)
}

fn push_code(out: &mut String, ch: char, keep: Keep) {
    out.push(if keep == Keep::Code { ch } else { ' ' });
}

fn blank(source: &str, keep: Keep) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut state = State::Code;
    let mut at_line_start = true;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let next = chars.get(i + 1).copied();

        if ch == '\n' {
            out.push('\n');
            state = match state {
                State::LineComment => State::Code,
                // A backslash before the newline continues the directive.
                State::Preprocessor if i > 0 && chars[i - 1] == '\\' => State::Preprocessor,
                State::Preprocessor => State::Code,
                // Unterminated literals do not leak past the line.
                State::Str | State::Char => State::Code,
                other => other,
            };
            at_line_start = true;
            i += 1;
            continue;
        }

        match state {
            State::Code => {
                if at_line_start && ch == '#' {
                    state = State::Preprocessor;
                    out.push(if keep == Keep::Directives { '#' } else { ' ' });
                } else if ch == '/' && next == Some('/') {
                    state = State::LineComment;
                    out.push_str("  ");
                    i += 1;
                } else if ch == '/' && next == Some('*') {
                    state = State::BlockComment;
                    out.push_str("  ");
                    i += 1;
                } else if ch == '"' {
                    if let Some((delimiter, consumed)) = raw_string_open(&chars, i) {
                        state = State::RawStr(delimiter);
                        push_code(&mut out, '"', keep);
                        out.extend(std::iter::repeat_n(' ', consumed - 1));
                        i += consumed;
                        at_line_start = false;
                        continue;
                    }
                    state = State::Str;
                    push_code(&mut out, '"', keep);
                } else if ch == '\'' && !is_digit_separator(&chars, i) {
                    state = State::Char;
                    push_code(&mut out, '\'', keep);
                } else {
                    push_code(&mut out, ch, keep);
                }
            }
            State::Preprocessor if keep == Keep::Directives => out.push(ch),
            State::LineComment | State::Preprocessor => out.push(' '),
            State::BlockComment => {
                if ch == '*' && next == Some('/') {
                    state = State::Code;
                    out.push_str("  ");
                    i += 1;
                } else {
                    out.push(' ');
                }
            }
            State::Str | State::Char => {
                let quote = if state == State::Str { '"' } else { '\'' };
                if ch == '\\' && next.is_some_and(|n| n != '\n') {
                    out.push_str("  ");
                    i += 1;
                } else if ch == quote {
                    state = State::Code;
                    push_code(&mut out, quote, keep);
                } else {
                    out.push(' ');
                }
            }
            State::RawStr(ref delimiter) => {
                let closing: Vec<char> = std::iter::once(')')
                    .chain(delimiter.chars())
                    .chain(std::iter::once('"'))
                    .collect();
                if chars[i..].starts_with(&closing) {
                    out.extend(std::iter::repeat_n(' ', closing.len() - 1));
                    push_code(&mut out, '"', keep);
                    i += closing.len();
                    state = State::Code;
                    at_line_start = false;
                    continue;
                }
                out.push(' ');
            }
        }

        if !ch.is_whitespace() {
            at_line_start = false;
        }
        i += 1;
    }

    out
}

/// Detect `R"delim(` at `quote_idx` (the position of the quote).
///
/// Returns the delimiter and the number of characters from the quote through `(`.
fn raw_string_open(chars: &[char], quote_idx: usize) -> Option<(String, usize)> {
    if quote_idx == 0 || chars[quote_idx - 1] != 'R' {
        return None;
    }
    // `R` must start the prefix token (allowing u8R, LR, uR, UR).
    if quote_idx >= 2 {
        let before = chars[quote_idx - 2];
        if before.is_alphanumeric() || before == '_' {
            let prefix_ok = matches!(before, '8' | 'L' | 'u' | 'U');
            if !prefix_ok {
                return None;
            }
        }
    }
    let mut delimiter = String::new();
    for (offset, &c) in chars[quote_idx + 1..].iter().enumerate() {
        match c {
            '(' => return Some((delimiter, offset + 2)),
            ' ' | ')' | '\\' | '\n' | '"' => return None,
            _ if delimiter.len() >= 16 => return None,
            _ => delimiter.push(c),
        }
    }
    None
}

/// `1'000'000` style separators are not character literals.
fn is_digit_separator(chars: &[char], idx: usize) -> bool {
    idx > 0
        && chars[idx - 1].is_ascii_hexdigit()
        && chars.get(idx + 1).is_some_and(char::is_ascii_hexdigit)
        && preceded_by_number(chars, idx)
}

fn preceded_by_number(chars: &[char], idx: usize) -> bool {
    let mut j = idx;
    while j > 0 && (chars[j - 1].is_ascii_alphanumeric() || chars[j - 1] == '\'') {
        j -= 1;
    }
    chars.get(j).is_some_and(char::is_ascii_digit)
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
