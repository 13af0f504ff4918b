//! Rules that decide when a DOT identifier or attribute value must be quoted.

use super::attr::AttrValue;

/// The reserved words of the DOT language. They are matched case-insensitively.
pub const DOT_KEYWORDS: [&str; 6] =
    ["graph", "subgraph", "digraph", "node", "edge", "strict"];

/// The names of the pseudo-nodes that carry default attribute blocks.
pub const DEFAULT_BLOCK_NAMES: [&str; 3] = ["graph", "node", "edge"];

/// The answer of the generic quoting check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedsQuotes {
    No,
    Yes,
    /// The generic rules can't decide. Identifiers and attribute values
    /// resolve this case differently.
    Indeterminate,
}

pub fn is_keyword(s: &str) -> bool {
    DOT_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(s))
}

// -?([0-9]+\.?[0-9]*|[0-9]*\.[0-9]+)
fn is_numeral(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let mut digits = 0;
    let mut periods = 0;
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '.' => periods += 1,
            _ => return false,
        }
    }
    digits > 0 && periods <= 1
}

fn is_wrapped(s: &str, open: char, close: char) -> bool {
    s.chars().count() >= 2 && s.starts_with(open) && s.ends_with(close)
}

fn is_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_id_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

// [_a-zA-Z][a-zA-Z0-9_]*
fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_id_start(first) => chars.all(is_id_char),
        _ => false,
    }
}

// [_a-zA-Z][a-zA-Z0-9_:"]*[a-zA-Z0-9_"]+
fn is_identifier_with_port(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 || !is_id_start(chars[0]) {
        return false;
    }
    let last = chars[chars.len() - 1];
    if !(is_id_char(last) || last == '"') {
        return false;
    }
    chars[1..chars.len() - 1]
        .iter()
        .all(|ch| is_id_char(*ch) || *ch == ':' || *ch == '"')
}

/// Applies the generic quoting rules that are shared by identifiers and
/// attribute values.
pub fn needs_quotes(s: &str) -> NeedsQuotes {
    if !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit()) {
        return NeedsQuotes::No;
    }

    if !s.is_empty() && s.chars().all(char::is_alphanumeric) {
        let starts_with_digit =
            s.chars().next().map_or(false, |ch| ch.is_ascii_digit());
        if starts_with_digit {
            return NeedsQuotes::Yes;
        }
        return NeedsQuotes::No;
    }

    if is_numeral(s) || is_wrapped(s, '"', '"') || is_wrapped(s, '<', '>') {
        return NeedsQuotes::No;
    }

    if s.chars().any(|ch| ch as u32 > 0x7f || ch == '\0') {
        return NeedsQuotes::Yes;
    }

    NeedsQuotes::Indeterminate
}

/// Returns true if \p s can't be emitted as a bare DOT identifier.
/// Keywords are reported as safe here; the caller decides what to do with them.
pub fn id_needs_quotes(s: &str) -> bool {
    if is_keyword(s) {
        return false;
    }

    match needs_quotes(s) {
        NeedsQuotes::No => return false,
        NeedsQuotes::Yes => return true,
        NeedsQuotes::Indeterminate => {}
    }

    if is_plain_identifier(s) || is_identifier_with_port(s) {
        return false;
    }

    // A single port separator: check both halves on their own.
    let mut parts = s.split(':');
    if let (Some(node), Some(port), None) =
        (parts.next(), parts.next(), parts.next())
    {
        return id_needs_quotes(node) || id_needs_quotes(port);
    }

    true
}

/// Wraps \p s in double quotes, escaping quotes and line breaks.
pub fn make_quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            _ => result.push(ch),
        }
    }
    result.push('"');
    result
}

/// Quotes the identifier \p s if it can't be emitted as-is. Keywords listed in
/// \p unquoted (case-insensitively) are left bare, all other keywords are
/// quoted.
pub fn quote_id_if_necessary(s: &str, unquoted: &[&str]) -> String {
    if s.is_empty() {
        return String::new();
    }
    if unquoted.iter().any(|kw| kw.eq_ignore_ascii_case(s)) {
        return s.to_string();
    }
    if is_keyword(s) || id_needs_quotes(s) {
        return make_quoted(s);
    }
    s.to_string()
}

/// Quotes the identifier \p s if it can't be emitted as-is.
pub fn quote_if_necessary(s: &str) -> String {
    quote_id_if_necessary(s, &[])
}

/// Renders an attribute value, quoting strings that are not numerals,
/// already quoted, or HTML labels.
pub fn quote_attr_if_necessary(value: &AttrValue) -> String {
    match value {
        AttrValue::Text(s) => {
            if is_keyword(s) {
                return make_quoted(s);
            }
            if needs_quotes(s) == NeedsQuotes::No {
                return s.clone();
            }
            make_quoted(s)
        }
        _ => value.to_string(),
    }
}

#[test]
fn test_needs_quotes() {
    assert_eq!(needs_quotes("123"), NeedsQuotes::No);
    assert_eq!(needs_quotes("abc1"), NeedsQuotes::No);
    assert_eq!(needs_quotes("1abc"), NeedsQuotes::Yes);
    assert_eq!(needs_quotes("-1.5"), NeedsQuotes::No);
    assert_eq!(needs_quotes(".75"), NeedsQuotes::No);
    assert_eq!(needs_quotes("\"a b\""), NeedsQuotes::No);
    assert_eq!(needs_quotes("<<b>x</b>>"), NeedsQuotes::No);
    assert_eq!(needs_quotes("a\u{0}b"), NeedsQuotes::Yes);
    assert_eq!(needs_quotes("11¼ spices"), NeedsQuotes::Yes);
    assert_eq!(needs_quotes("a_b"), NeedsQuotes::Indeterminate);
    assert_eq!(needs_quotes("1.2.3"), NeedsQuotes::Indeterminate);
}

#[test]
fn test_quote_identifiers() {
    assert_eq!(quote_if_necessary("foo"), "foo");
    assert_eq!(quote_if_necessary("foo_bar"), "foo_bar");
    assert_eq!(quote_if_necessary("foo.bar"), "\"foo.bar\"");
    assert_eq!(quote_if_necessary("1.2.3"), "\"1.2.3\"");
    assert_eq!(quote_if_necessary("12"), "12");
    assert_eq!(quote_if_necessary("11herbs"), "\"11herbs\"");
    assert_eq!(quote_if_necessary("Node^A"), "\"Node^A\"");
    assert_eq!(quote_if_necessary("a:b"), "a:b");
    assert_eq!(quote_if_necessary("a b:c"), "\"a b:c\"");
    assert_eq!(quote_if_necessary(""), "");
}

#[test]
fn test_quote_keywords() {
    assert_eq!(quote_if_necessary("graph"), "\"graph\"");
    assert_eq!(quote_if_necessary("Strict"), "\"Strict\"");
    assert_eq!(quote_id_if_necessary("node", &DEFAULT_BLOCK_NAMES), "node");
    assert_eq!(quote_id_if_necessary("Edge", &DEFAULT_BLOCK_NAMES), "Edge");
    assert_eq!(
        quote_id_if_necessary("digraph", &DEFAULT_BLOCK_NAMES),
        "\"digraph\""
    );
}

#[test]
fn test_quote_escapes() {
    assert_eq!(make_quoted("a\"b"), "\"a\\\"b\"");
    assert_eq!(make_quoted("one\ntwo\r"), "\"one\\ntwo\\r\"");
}

#[test]
fn test_quote_idempotent() {
    for s in ["a b", "foo.bar", "1abc", "Node^A", "graph", "x\ny"].iter() {
        let once = quote_if_necessary(s);
        assert_eq!(quote_if_necessary(&once), once);
    }
}

#[test]
fn test_quote_attr_values() {
    let text = |s: &str| AttrValue::Text(s.to_string());
    assert_eq!(quote_attr_if_necessary(&text("1.4")), "1.4");
    assert_eq!(quote_attr_if_necessary(&text(".75")), ".75");
    assert_eq!(quote_attr_if_necessary(&text("1.4.0")), "\"1.4.0\"");
    assert_eq!(quote_attr_if_necessary(&text("box")), "box");
    assert_eq!(quote_attr_if_necessary(&text("node")), "\"node\"");
    assert_eq!(quote_attr_if_necessary(&text("14pt")), "\"14pt\"");
    assert_eq!(quote_attr_if_necessary(&text("a_b")), "\"a_b\"");
    assert_eq!(quote_attr_if_necessary(&text("")), "\"\"");
    assert_eq!(quote_attr_if_necessary(&AttrValue::Bool(true)), "true");
    assert_eq!(quote_attr_if_necessary(&AttrValue::Int(12)), "12");
}
