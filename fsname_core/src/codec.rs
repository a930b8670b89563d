use std::str;

use crate::error::FsNameError;

/// Decode UTF-8 bytes into a sequence of unicode scalar values.
///
/// Malformed input is reported as `FsNameError::Decode`; callers decide
/// which fallback applies.
pub fn decode(bytes: &[u8]) -> Result<Vec<char>, FsNameError> {
    let text = str::from_utf8(bytes)?;
    Ok(text.chars().collect())
}

/// Encode scalar values back to UTF-8.
pub fn encode(chars: &[char]) -> String {
    let mut text = String::with_capacity(chars.len());
    text.extend(chars.iter());
    text
}

#[test]
fn decode_multibyte() {
    let chars = decode("aé€𝄞".as_bytes()).unwrap();
    assert_eq!(chars, vec!['a', 'é', '€', '𝄞']);
}

#[test]
fn decode_empty() {
    let chars = decode(b"").unwrap();
    assert!(chars.is_empty());
}

#[test]
fn decode_malformed() {
    // truncated 3-byte sequence
    let result = decode(&[0x61, 0xe2, 0x82]);
    match result {
        Err(FsNameError::Decode(err)) => assert_eq!(err.valid_up_to(), 1),
        other => panic!("expected decode error, got {:?}", other),
    }

    assert!(decode(&[0xc0, 0xaf]).is_err());
    assert!(decode(&[0xed, 0xa0, 0x80]).is_err()); // surrogate
}

#[test]
fn encode_restores_text() {
    let text = "Große Datei.txt";
    let chars = decode(text.as_bytes()).unwrap();
    assert_eq!(encode(&chars), text);
}
