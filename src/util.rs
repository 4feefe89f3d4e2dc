//! Utility functions.

use std::ffi;

/// Safely cast a NUL-terminated byte string into a C string.
///
/// Returns `None` if the bytes are not terminated by exactly one NUL byte.
pub fn cstr<'a, T>(bytes: &'a T) -> Option<&'a ffi::CStr>
    where T: AsRef<[u8]> + ?Sized
{
    ffi::CStr::from_bytes_with_nul(bytes.as_ref()).ok()
}

/// Converts a raw shader/program info log into a printable string.
///
/// Drivers disagree on whether the reported length includes the
/// terminating NUL, so everything from the first NUL onwards is dropped.
pub fn info_log(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    String::from_utf8_lossy(&raw[..end]).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cstr_requires_trailing_nul() {
        assert_eq!(cstr(b"aPos\0").unwrap().to_bytes(), b"aPos");
        assert!(cstr(b"aPos").is_none());
        assert!(cstr(b"a\0Pos\0").is_none());
    }

    #[test]
    fn info_log_stops_at_nul() {
        let raw = b"0:1(10): error: syntax error\n\0garbage";
        assert_eq!(info_log(raw), "0:1(10): error: syntax error");
    }

    #[test]
    fn info_log_trims_trailing_whitespace() {
        assert_eq!(info_log(b"warning: unused\r\n  "), "warning: unused");
        assert_eq!(info_log(b""), "");
    }
}
