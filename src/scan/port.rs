//! Port scanning: `:` followed by a short run of decimal digits.

use crate::cursor::Cursor;
use crate::limits::{MAX_PORT_DIGITS, MIN_PORT_DIGITS};

/// Outcome of [`scan_port`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Port {
    /// No `:` after the host; the span may continue.
    Absent,
    /// Port accepted; the span now ends at `end` and may continue.
    Accepted { end: usize },
    /// A `:` without an acceptable digit run. The span ends at the host
    /// and the cursor stays after the digits that were read.
    Rejected,
}

/// Scan an optional port right after an accepted host.
pub(crate) fn scan_port(cursor: &mut Cursor<'_>) -> Port {
    if !cursor.eat(b':') {
        return Port::Absent;
    }
    let digits = cursor.skip_while(|b| b.is_ascii_digit());
    if (MIN_PORT_DIGITS..=MAX_PORT_DIGITS).contains(&digits) {
        Port::Accepted {
            end: cursor.offset(),
        }
    } else {
        Port::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(input: &str) -> (Port, usize) {
        let mut cursor = Cursor::new(input.as_bytes());
        let result = scan_port(&mut cursor);
        (result, cursor.offset())
    }

    #[test]
    fn test_no_colon() {
        assert_eq!(port("/a"), (Port::Absent, 0));
        assert_eq!(port(""), (Port::Absent, 0));
    }

    #[test]
    fn test_digit_counts() {
        assert_eq!(port(":8"), (Port::Rejected, 2));
        assert_eq!(port(":80"), (Port::Accepted { end: 3 }, 3));
        assert_eq!(port(":65535"), (Port::Accepted { end: 6 }, 6));
        assert_eq!(port(":123456"), (Port::Rejected, 7));
    }

    #[test]
    fn test_leading_zeros_count_as_digits() {
        assert_eq!(port(":01"), (Port::Accepted { end: 3 }, 3));
        assert_eq!(port(":001"), (Port::Accepted { end: 4 }, 4));
    }

    #[test]
    fn test_non_digit_after_colon() {
        assert_eq!(port(":a"), (Port::Rejected, 1));
        assert_eq!(port("::80"), (Port::Rejected, 1));
    }

    #[test]
    fn test_stops_at_non_digit() {
        assert_eq!(port(":80a"), (Port::Accepted { end: 3 }, 3));
        assert_eq!(port(":80:80"), (Port::Accepted { end: 3 }, 3));
    }
}
