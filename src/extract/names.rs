// Author: kelexine (https://github.com/kelexine)
// extract/names.rs — Token-positional function name classification

use super::tokenize;

/// Token shapes that yield a function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclShape {
    /// `name = function` — assignment to a variable or property.
    ByVar,
    /// `function name (` — declaration style.
    Common,
    /// `function` as the very first token of the source; whatever follows is
    /// taken as the name with no further shape check.
    LeadingEdge,
}

/// Scan source text for `function` keywords and recover candidate names by
/// their neighboring tokens. Returns names in first-discovery order with
/// duplicates dropped (case-sensitive comparison).
pub fn extract_names(source: &str) -> Vec<String> {
    let tokens = tokenize(source);
    let mut names: Vec<String> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if !token.eq_ignore_ascii_case("function") {
            continue;
        }
        if let Some((name, _)) = classify(&tokens, i)
            && !names.iter().any(|n| n == name)
        {
            names.push(name.to_string());
        }
    }

    names
}

/// Classify the `function` keyword at `at` against its neighbors.
///
/// Every index access is bounds-checked; any out-of-range neighbor means the
/// occurrence is skipped rather than reported as an error.
fn classify(tokens: &[String], at: usize) -> Option<(&str, DeclShape)> {
    if at == 0 {
        return tokens
            .get(1)
            .map(|name| (name.as_str(), DeclShape::LeadingEdge));
    }

    if tokens[at - 1] == "=" {
        let subject = at.checked_sub(2)?;
        return tokens
            .get(subject)
            .map(|name| (name.as_str(), DeclShape::ByVar));
    }

    if tokens.get(at + 2).map(String::as_str) == Some("(") {
        return tokens
            .get(at + 1)
            .map(|name| (name.as_str(), DeclShape::Common));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byvar_assignment() {
        let names = extract_names("var foo = function() { return 1; };");
        assert_eq!(names, vec!["foo"]);
    }

    #[test]
    fn test_byvar_without_paren_still_names() {
        // The assignment shape never inspects what follows the keyword.
        let names = extract_names("x; handler = function");
        assert_eq!(names, vec!["handler"]);
    }

    #[test]
    fn test_common_declaration() {
        let names = extract_names("x; function baz(a, b) { return a + b; }");
        assert_eq!(names, vec!["baz"]);
    }

    #[test]
    fn test_common_requires_paren_two_tokens_out() {
        // `function new Thing` — no paren at i+2, occurrence skipped.
        assert!(extract_names("x; function new Thing").is_empty());
    }

    #[test]
    fn test_leading_edge_takes_next_token() {
        let names = extract_names("function init() { go(); }");
        assert_eq!(names, vec!["init"]);
    }

    #[test]
    fn test_leading_edge_needs_no_paren() {
        // Degenerate shape: source opening with the keyword trusts whatever
        // token follows, even without an argument list.
        assert_eq!(extract_names("function boot"), vec!["boot"]);
    }

    #[test]
    fn test_leading_edge_without_next_token() {
        assert!(extract_names("function").is_empty());
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let names = extract_names("var a = Function() {}; var b = FUNCTION() {};");
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicates_dropped_in_discovery_order() {
        let src = "var foo = function() {}; var bar = function() {}; foo = function() {};";
        assert_eq!(extract_names(src), vec!["foo", "bar"]);
    }

    #[test]
    fn test_equals_without_subject_is_skipped() {
        // `= function` opening the text leaves no token at i-2.
        assert!(extract_names("= function whatever").is_empty());
    }

    #[test]
    fn test_trailing_keyword_is_skipped() {
        // Interior keyword with nothing after it matches no shape.
        assert!(extract_names("x; y function").is_empty());
    }

    #[test]
    fn test_classify_shapes() {
        let t = tokenize("foo = function ready bar ( x )");
        assert_eq!(classify(&t, 2), Some(("foo", DeclShape::ByVar)));

        let t = tokenize("go(); function step(n) {}");
        assert_eq!(classify(&t, 4), Some(("step", DeclShape::Common)));

        let t = tokenize("function boot() {}");
        assert_eq!(classify(&t, 0), Some(("boot", DeclShape::LeadingEdge)));
    }

    #[test]
    fn test_slash_stripped_names() {
        // Slash removal happens before classification, so a commented-out
        // assignment still yields its name. Documented tokenizer behavior.
        let names = extract_names("// old = function() {}\n");
        assert_eq!(names, vec!["old"]);
    }
}
