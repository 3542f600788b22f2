// Author: kelexine (https://github.com/kelexine)
// extract/bodies.rs — Brace-depth body extraction over the original source

use std::collections::HashMap;

/// For each discovered name, locate its body span in the *original* source
/// text (never the tokenized form) and return the name → body map.
///
/// Any name whose body cannot be located — no matching pattern, no opening
/// brace, or braces that never balance before end of input — is simply
/// absent from the map. Best-effort by contract, not by accident.
pub fn extract_bodies(source: &str, names: &[String]) -> HashMap<String, String> {
    let mut bodies = HashMap::new();

    for name in names {
        if let Some(body) = locate_body(source, name) {
            bodies.entry(name.clone()).or_insert(body);
        }
    }

    bodies
}

fn locate_body(source: &str, name: &str) -> Option<String> {
    // Assignment style first; declaration style only when that is absent.
    let start = source
        .find(&format!("{name} = function"))
        .or_else(|| source.find(&format!("function {name}")))?;

    let open = start + source[start..].find('{')?;

    // Depth starts at 1 just past the opening brace. Only `{` and `}` are
    // consulted; a brace inside a string literal or comment counts the same
    // as a structural one.
    let mut depth = 1usize;
    for (off, c) in source[open + 1..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = open + 1 + off;
                    return Some(source[start..=end].to_string());
                }
            }
            _ => {}
        }
    }

    // Ran off the end of the text with braces still open.
    None
}
