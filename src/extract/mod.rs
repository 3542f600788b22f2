// Author: kelexine (https://github.com/kelexine)
// extract/mod.rs — Shared lexical utilities for the extraction passes

pub mod bodies;
pub mod names;

/// Split script source into the crude token sequence both passes agree on.
///
/// All `/` characters are stripped first (a blunt guard against comment and
/// regex-literal slashes — this is not comment-aware and never will be),
/// `\r`, `\n`, and `\t` each fold to a single space, and parentheses become
/// free-standing tokens so argument lists don't glue to the name next to
/// them. The result is split on runs of spaces with empty segments dropped.
pub fn tokenize(source: &str) -> Vec<String> {
    let mut normalized = String::with_capacity(source.len());
    for c in source.chars() {
        match c {
            '/' => {}
            '\r' | '\n' | '\t' => normalized.push(' '),
            '(' | ')' => {
                normalized.push(' ');
                normalized.push(c);
                normalized.push(' ');
            }
            other => normalized.push(other),
        }
    }

    normalized
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
