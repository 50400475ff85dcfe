/// Returns true if the input string is not empty and contains only ASCII hex digits.
///
/// Both cases are accepted, i.e. `0-9`, `a-f` and `A-F`.
pub fn is_non_empty_hex_string(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks whether all bytes in the given slice are lowercase hex digits (`0-9`, `a-f`).
pub(super) fn is_lowercase_hex(src: &[u8]) -> bool {
    src.iter()
        .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b))
}

/// Checks whether `src` is a UUID in 8-4-4-4-12 form whose groups are joined by either `-` or
/// `_`. Mixed separators are accepted, as the kubelet only ever emits one kind per path.
pub(super) fn is_separated_uuid(src: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    let mut groups = src.split(['-', '_']);
    for expected in GROUPS {
        match groups.next() {
            Some(group) if group.len() == expected && is_lowercase_hex(group.as_bytes()) => {}
            _ => return false,
        }
    }

    groups.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_string_valid_hex() {
        assert!(is_non_empty_hex_string("deadbeef12345678"));
        assert!(is_non_empty_hex_string("ABCDEFabcdef0123456789"));
    }

    #[test]
    fn test_is_hex_string_invalid_hex() {
        assert!(!is_non_empty_hex_string("deadbeefXYZ"));
        assert!(!is_non_empty_hex_string("1234!@#$"));
        assert!(!is_non_empty_hex_string(""));
    }

    #[test]
    fn test_is_lowercase_hex() {
        assert!(is_lowercase_hex(b"abc123"));
        assert!(!is_lowercase_hex(b"ABC123"));
        assert!(!is_lowercase_hex(b"abg123"));

        let empty: &[u8] = b"";
        assert!(is_lowercase_hex(empty));
    }

    #[test]
    fn test_is_separated_uuid() {
        assert!(is_separated_uuid("12345678-1234-1234-1234-1234567890ab"));
        assert!(is_separated_uuid("12345678_1234_1234_1234_1234567890ab"));
        assert!(!is_separated_uuid("123456781234123412341234567890ab"));
        assert!(!is_separated_uuid("12345678-1234-1234-1234-1234567890ab-ff"));
        assert!(!is_separated_uuid("12345678-1234-1234-1234-1234567890AB"));
        assert!(!is_separated_uuid(""));
    }
}
