//! Case folding and per-character classification.
//!
//! The special character table is a sorted constant, so lookups need no
//! runtime initialization and are safe from any thread.

/// Character substituted for anything that is not safe in a file name.
pub const REPLACEMENT: char = '_';

/// Characters that are always replaced, sorted by code point.
///
/// Most of these would also be caught by `is_safe_char`, the table pins
/// them explicitly so the mapping does not depend on how "alphanumeric" is
/// defined. `-` is intentionally absent: it is a safe character.
const SPECIAL_CHARS: &[(char, char)] = &[
    ('\t', REPLACEMENT),
    ('\n', REPLACEMENT),
    ('\r', REPLACEMENT),
    (' ', REPLACEMENT),
    ('!', REPLACEMENT),
    ('"', REPLACEMENT),
    ('#', REPLACEMENT),
    ('$', REPLACEMENT),
    ('%', REPLACEMENT),
    ('&', REPLACEMENT),
    ('\'', REPLACEMENT),
    ('(', REPLACEMENT),
    (')', REPLACEMENT),
    ('*', REPLACEMENT),
    ('+', REPLACEMENT),
    ('/', REPLACEMENT),
    (':', REPLACEMENT),
    (';', REPLACEMENT),
    ('=', REPLACEMENT),
    ('?', REPLACEMENT),
    ('@', REPLACEMENT),
    ('[', REPLACEMENT),
    (']', REPLACEMENT),
    ('^', REPLACEMENT),
    ('`', REPLACEMENT),
    ('{', REPLACEMENT),
    ('|', REPLACEMENT),
    ('}', REPLACEMENT),
    ('~', REPLACEMENT),
    ('¢', REPLACEMENT),
    ('£', REPLACEMENT),
    ('¥', REPLACEMENT),
    ('§', REPLACEMENT),
    ('©', REPLACEMENT),
    ('®', REPLACEMENT),
    ('°', REPLACEMENT),
    ('±', REPLACEMENT),
    ('¶', REPLACEMENT),
    ('×', REPLACEMENT),
    ('÷', REPLACEMENT),
    ('π', REPLACEMENT),
    ('–', REPLACEMENT),
    ('—', REPLACEMENT),
    ('•', REPLACEMENT),
    ('€', REPLACEMENT),
    ('™', REPLACEMENT),
    ('∆', REPLACEMENT),
    ('√', REPLACEMENT),
    ('∞', REPLACEMENT),
    ('≈', REPLACEMENT),
    ('≠', REPLACEMENT),
];

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum CharClass {
    Keep,
    Replace(char),
}

/// Allowed characters: ASCII letters and digits, `_`, `.` and `-`.
pub fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
}

pub fn lookup_special(c: char) -> Option<char> {
    SPECIAL_CHARS
        .binary_search_by_key(&c, |&(key, _)| key)
        .ok()
        .map(|index| SPECIAL_CHARS[index].1)
}

pub fn classify(c: char) -> CharClass {
    if let Some(replacement) = lookup_special(c) {
        return CharClass::Replace(replacement);
    }
    if is_safe_char(c) {
        CharClass::Keep
    } else {
        CharClass::Replace(REPLACEMENT)
    }
}

/// Simple per-character lowercase mapping.
///
/// Only `A-Z` is folded. Every other scalar, including non-ASCII letters
/// such as `Ü`, passes through unchanged. This is a known limitation, not
/// full unicode case folding.
pub fn fold_case(c: char) -> char {
    c.to_ascii_lowercase()
}

pub fn lowercase(chars: &[char]) -> Vec<char> {
    chars.iter().map(|&c| fold_case(c)).collect()
}

pub fn replace_unsafe(chars: &[char]) -> Vec<char> {
    chars
        .iter()
        .map(|&c| match classify(c) {
            CharClass::Keep => c,
            CharClass::Replace(replacement) => replacement,
        })
        .collect()
}

#[test]
fn special_chars_sorted() {
    for pair in SPECIAL_CHARS.windows(2) {
        assert!(pair[0].0 < pair[1].0, "{:?} >= {:?}", pair[0].0, pair[1].0);
    }
}

#[test]
fn special_chars_never_safe_output() {
    for &(key, replacement) in SPECIAL_CHARS {
        assert!(!is_safe_char(key), "{:?} should not be in the table", key);
        assert!(is_safe_char(replacement));
    }
}

#[test]
fn classify_chars() {
    assert_eq!(classify('a'), CharClass::Keep);
    assert_eq!(classify('Z'), CharClass::Keep);
    assert_eq!(classify('7'), CharClass::Keep);
    assert_eq!(classify('.'), CharClass::Keep);
    assert_eq!(classify('-'), CharClass::Keep);
    assert_eq!(classify('_'), CharClass::Keep);
    assert_eq!(classify(' '), CharClass::Replace('_'));
    assert_eq!(classify('€'), CharClass::Replace('_'));
    assert_eq!(classify('<'), CharClass::Replace('_'));
    assert_eq!(classify('ü'), CharClass::Replace('_'));
    assert_eq!(classify('\0'), CharClass::Replace('_'));
}

#[test]
fn lookup_special_only_table_entries() {
    assert_eq!(lookup_special('@'), Some('_'));
    assert_eq!(lookup_special('\t'), Some('_'));
    assert_eq!(lookup_special('≠'), Some('_'));
    assert_eq!(lookup_special('<'), None);
    assert_eq!(lookup_special('-'), None);
    assert_eq!(lookup_special('a'), None);
}

#[test]
fn lowercase_ascii_only() {
    let input: Vec<char> = "ABC xyz ÜÉ Σ".chars().collect();
    let folded: String = lowercase(&input).into_iter().collect();
    assert_eq!(folded, "abc xyz ÜÉ Σ");
}

#[test]
fn replace_unsafe_chars() {
    let input: Vec<char> = "hello world! 2024.txt".chars().collect();
    let replaced: String = replace_unsafe(&input).into_iter().collect();
    assert_eq!(replaced, "hello_world__2024.txt");
}
