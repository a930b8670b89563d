use crate::charmap::{is_safe_char, lowercase, replace_unsafe};
use crate::cleanup::{cleanup, truncate, DEFAULT_FILE_NAME};
use crate::codec::{decode, encode};

/// Turn arbitrary text into a name made only of `[a-z0-9_.-]`.
///
/// Empty or undecodable input yields `DEFAULT_FILE_NAME`. The result is
/// never empty and never starts or ends with `_`, except for the single `_`
/// placed in front of a leading `-`.
///
/// ```
/// use fsname_core::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("Hello World! 2024.txt"), "hello_world_2024.txt");
/// ```
pub fn sanitize_file_name<S: AsRef<[u8]> + ?Sized>(name: &S) -> String {
    let bytes = name.as_ref();
    if bytes.is_empty() {
        return DEFAULT_FILE_NAME.to_string();
    }

    let chars = match decode(bytes) {
        Ok(chars) => chars,
        Err(err) => {
            debug!("cannot sanitize undecodable name ({}), using default name", err);
            return DEFAULT_FILE_NAME.to_string();
        }
    };

    let folded = lowercase(&chars);
    let replaced = replace_unsafe(&folded);
    let sanitized = cleanup(&encode(&replaced));
    trace!("sanitized {:?} to {:?}", String::from_utf8_lossy(bytes), sanitized);
    sanitized
}

/// Same as `sanitize_file_name`, then bounded to `max_length` bytes.
pub fn sanitize_file_name_with_max_length<S: AsRef<[u8]> + ?Sized>(name: &S, max_length: usize) -> String {
    let sanitized = sanitize_file_name(name);
    truncate(&sanitized, max_length)
}

/// Check that `name` is already a safe file name, without normalizing it.
///
/// Rejects empty or undecodable input, a leading `.` or `-`, and any
/// character outside ASCII alphanumerics, `_`, `.` and `-`.
pub fn is_valid_file_name<S: AsRef<[u8]> + ?Sized>(name: &S) -> bool {
    let bytes = name.as_ref();
    if bytes.is_empty() {
        return false;
    }

    let chars = match decode(bytes) {
        Ok(chars) => chars,
        Err(err) => {
            debug!("rejecting undecodable name ({})", err);
            return false;
        }
    };

    match chars.first() {
        Some('.') | Some('-') => return false,
        Some(_) => {}
        None => return false,
    }

    chars.iter().all(|&c| is_safe_char(c))
}
