use proptest::prelude::*;

use fsname_core::cleanup::cleanup;
use fsname_core::{is_valid_file_name, sanitize_file_name, sanitize_file_name_with_max_length, DEFAULT_FILE_NAME};

fn assert_safe(name: &str) {
    assert!(!name.is_empty());
    assert!(
        name.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'.' || b == b'-'),
        "unexpected character in {:?}",
        name
    );
    assert!(!name.contains("__"), "consecutive underscores in {:?}", name);
    assert!(!name.ends_with('_'), "trailing underscore in {:?}", name);
    assert!(!name.starts_with('-'), "leading hyphen in {:?}", name);
    if name.starts_with('_') {
        assert!(name[1..].starts_with('-'), "leading underscore in {:?}", name);
    }
}

#[test]
fn demo_hello_world() {
    assert_eq!(sanitize_file_name("Hello World! 2024.txt"), "hello_world_2024.txt");
}

#[test]
fn demo_invalid_then_sanitized() {
    let name = "file@invalid.pdf";
    assert!(!is_valid_file_name(name));

    let sanitized = sanitize_file_name(name);
    assert_eq!(sanitized, "file_invalid.pdf");
    assert!(is_valid_file_name(&sanitized));
}

#[test]
fn demo_truncated() {
    let truncated = sanitize_file_name_with_max_length("Very Long Filename with Multiple Words.docx", 15);
    assert!(truncated.len() <= 15);
    assert!(!truncated.ends_with('_'));
    assert_eq!(truncated, "very_long_filen");
}

#[test]
fn demo_valid() {
    assert!(is_valid_file_name("my_document.txt"));
}

#[test]
fn empty_inputs() {
    assert_eq!(sanitize_file_name(""), DEFAULT_FILE_NAME);
    assert_eq!(sanitize_file_name_with_max_length("", 255), DEFAULT_FILE_NAME);
    assert!(!is_valid_file_name(""));
    assert!(!is_valid_file_name(".hidden"));
    assert!(!is_valid_file_name("-x"));
}

#[test]
fn sanitized_names_are_valid_unless_dotted() {
    for input in ["Quarterly Report (final).xlsx", "résumé 2024.pdf", "  spaced  out  ", "a+b=c"].iter() {
        let sanitized = sanitize_file_name(input);
        assert_safe(&sanitized);
        assert!(is_valid_file_name(&sanitized), "{:?} -> {:?}", input, sanitized);
    }
}

#[test]
fn sanitize_is_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let name = format!("Thread #{} @ work.log", i);
                sanitize_file_name(&name)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("thread_{}_work.log", i));
    }
}

proptest! {
    #[test]
    fn sanitize_output_is_safe(input in "\\PC{0,64}") {
        let sanitized = sanitize_file_name(&input);
        assert_safe(&sanitized);
    }

    #[test]
    fn sanitize_bytes_output_is_safe(input in proptest::collection::vec(any::<u8>(), 0..64)) {
        let sanitized = sanitize_file_name(&input);
        assert_safe(&sanitized);
    }

    #[test]
    fn sanitize_is_stable(input in "\\PC{0,64}") {
        let once = sanitize_file_name(&input);
        prop_assert_eq!(sanitize_file_name(&once), once);
    }

    #[test]
    fn truncated_output_fits(input in "\\PC{0,128}", max_length in 1usize..40) {
        let sanitized = sanitize_file_name_with_max_length(&input, max_length);
        prop_assert!(sanitized.len() <= max_length, "{:?} is longer than {}", sanitized, max_length);
        assert_safe(&sanitized);
    }

    #[test]
    fn cleanup_is_idempotent(input in "\\PC{0,64}") {
        let once = cleanup(&input);
        prop_assert_eq!(cleanup(&once), once);
    }

    #[test]
    fn valid_names_only_use_safe_chars(input in "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,32}") {
        prop_assert!(is_valid_file_name(&input));
    }
}
