use std::cmp;

use regex::Regex;

/// Name returned whenever nothing usable is left of the input.
pub const DEFAULT_FILE_NAME: &str = "unnamed_file";

lazy_static! {
    static ref REGEX_UNDERSCORE_RUN: Regex = Regex::new(r"_+").unwrap();
    static ref REGEX_EDGE_UNDERSCORES: Regex = Regex::new(r"^_+|_+$").unwrap();
}

/// Collapse underscore runs, trim underscores at both ends and fall back to
/// `DEFAULT_FILE_NAME` when the result is empty.
///
/// A name starting with `-` gets a leading `_` so it cannot be mistaken for a
/// command-line option. Applying `cleanup` twice gives the same result as once.
pub fn cleanup(name: &str) -> String {
    let collapsed = REGEX_UNDERSCORE_RUN.replace_all(name, "_");
    let trimmed = REGEX_EDGE_UNDERSCORES.replace_all(&collapsed, "");

    if trimmed.is_empty() {
        trace!("cleanup of {:?} left nothing, using default name", name);
        return DEFAULT_FILE_NAME.to_string();
    }

    if trimmed.starts_with('-') {
        format!("_{}", trimmed)
    } else {
        trimmed.into_owned()
    }
}

/// Bound `name` to `max_length` bytes without splitting a character.
///
/// A zero `max_length` yields `DEFAULT_FILE_NAME`.
pub fn truncate(name: &str, max_length: usize) -> String {
    if max_length == 0 {
        return DEFAULT_FILE_NAME.to_string();
    }

    if name.len() <= max_length {
        return name.to_string();
    }

    let mut end = max_length;
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    let cleaned = cleanup(&name[..end]);
    trace!("truncated {:?} to {:?} ({} bytes max)", name, cleaned, max_length);

    if cleaned.len() <= max_length {
        cleaned
    } else {
        default_within(max_length)
    }
}

// cleanup can grow the cut back past the limit (default name or hyphen guard)
fn default_within(max_length: usize) -> String {
    let end = cmp::min(max_length, DEFAULT_FILE_NAME.len());
    DEFAULT_FILE_NAME[..end].trim_end_matches('_').to_string()
}

#[test]
fn cleanup_collapses_and_trims() {
    assert_eq!(cleanup("hello_world__2024.txt"), "hello_world_2024.txt");
    assert_eq!(cleanup("___a____b___"), "a_b");
    assert_eq!(cleanup("_x_"), "x");
    assert_eq!(cleanup("plain.txt"), "plain.txt");
}

#[test]
fn cleanup_empty_uses_default() {
    assert_eq!(cleanup(""), DEFAULT_FILE_NAME);
    assert_eq!(cleanup("_"), DEFAULT_FILE_NAME);
    assert_eq!(cleanup("_____"), DEFAULT_FILE_NAME);
}

#[test]
fn cleanup_guards_leading_hyphen() {
    assert_eq!(cleanup("-rf"), "_-rf");
    assert_eq!(cleanup("__-rf_"), "_-rf");
    assert_eq!(cleanup("-"), "_-");
    assert_eq!(cleanup("a-b"), "a-b");
}

#[test]
fn cleanup_idempotent() {
    let samples = [
        "", "_", "__a__", "-x", "_-x", "a__b", "unnamed_file", "._.", "-_-", "x-",
    ];
    for sample in samples.iter() {
        let once = cleanup(sample);
        assert_eq!(cleanup(&once), once, "input {:?}", sample);
    }
}

#[test]
fn truncate_short_names_unchanged() {
    assert_eq!(truncate("abc", 3), "abc");
    assert_eq!(truncate("abc", 100), "abc");
}

#[test]
fn truncate_zero_length() {
    assert_eq!(truncate("abc", 0), DEFAULT_FILE_NAME);
}

#[test]
fn truncate_trims_trailing_underscore() {
    assert_eq!(truncate("very_long_name", 5), "very");
    assert_eq!(truncate("very_long_filename_with_multiple_words.docx", 15), "very_long_filen");
}

#[test]
fn truncate_respects_char_boundaries() {
    // 'é' is two bytes, starting at byte 1
    assert_eq!(truncate("aébc", 2), "a");
    assert_eq!(truncate("aébc", 3), "aé");
    // '€' is three bytes
    assert_eq!(truncate("€€", 5), "€");
    assert_eq!(truncate("€€", 2), DEFAULT_FILE_NAME[..2].to_string());
}

#[test]
fn truncate_never_exceeds_limit() {
    assert_eq!(truncate("_-abc", 1), "u");
    assert_eq!(truncate("_-abc", 2), "_-");
    assert_eq!(truncate("-abc", 2), "un");
    assert_eq!(truncate("€€", 8), "€€");
    assert_eq!(truncate("_________x", 8), "unnamed");
}
