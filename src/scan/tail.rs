//! Path, query and fragment scanning.
//!
//! Each component starts at its delimiter and takes a run of printable
//! ASCII. A component stops at the delimiter of a component that may
//! still follow it, so `/a?b#c` reads as path, query, fragment, while a
//! fragment swallows any later `?`.

use crate::cursor::Cursor;

/// A URL component that can follow the host and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Component introduced by a delimiter byte.
    #[inline]
    pub(crate) fn from_delimiter(b: u8) -> Option<Self> {
        match b {
            b'/' => Some(Self::Path),
            b'?' => Some(Self::Query),
            b'#' => Some(Self::Fragment),
            _ => None,
        }
    }

    /// Whether `b` starts a component that may follow this one.
    #[inline]
    fn yields_to(self, b: u8) -> bool {
        match self {
            Self::Path => b == b'?' || b == b'#',
            Self::Query => b == b'#',
            Self::Fragment => false,
        }
    }
}

/// Printable ASCII, excluding space.
#[inline]
pub(crate) fn is_url_byte(b: u8) -> bool {
    b > b' ' && b < 0x7f
}

/// Consume every component following the cursor.
///
/// Returns the new span end, or `None` when no component follows. Never
/// rejects the span.
pub(crate) fn scan_tail(cursor: &mut Cursor<'_>) -> Option<usize> {
    let mut end = None;
    while let Some(component) = cursor.peek().and_then(Component::from_delimiter) {
        cursor.bump();
        cursor.skip_while(|b| is_url_byte(b) && !component.yields_to(b));
        trace_scan!("{component:?} ends at {}", cursor.offset());
        end = Some(cursor.offset());
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tail(input: &str) -> Option<usize> {
        scan_tail(&mut Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_no_component() {
        assert_eq!(tail(""), None);
        assert_eq!(tail(" /a"), None);
        assert_eq!(tail("a/b"), None);
    }

    #[test]
    fn test_bare_delimiters() {
        assert_eq!(tail("/"), Some(1));
        assert_eq!(tail("?"), Some(1));
        assert_eq!(tail("#"), Some(1));
    }

    #[test]
    fn test_path_query_fragment() {
        assert_eq!(tail("/b/c?d#e!f"), Some(10));
        assert_eq!(tail("?a#b"), Some(4));
    }

    #[test]
    fn test_fragment_absorbs_question_mark() {
        assert_eq!(tail("#a?b"), Some(4));
    }

    #[test]
    fn test_query_absorbs_slash() {
        assert_eq!(tail("?a/b"), Some(4));
    }

    #[test]
    fn test_stops_at_space() {
        assert_eq!(tail("/a b"), Some(2));
    }

    #[test]
    fn test_stops_at_non_ascii() {
        assert_eq!(tail("#a\u{554a}?b"), Some(2));
        assert_eq!(tail("/\u{7f}"), Some(1));
    }

    #[test]
    fn test_url_bytes() {
        assert!(is_url_byte(b'!'));
        assert!(is_url_byte(b'~'));
        assert!(!is_url_byte(b' '));
        assert!(!is_url_byte(b'\t'));
        assert!(!is_url_byte(0x7f));
        assert!(!is_url_byte(0xe5));
    }
}
