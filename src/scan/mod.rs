//! Span scanner: finds link-like substrings in a block of plain text.
//!
//! A single left-to-right pass over the bytes of the text. Each iteration
//! skips spaces, opens a tentative span at the cursor and tries, in order:
//! 1. Hostname (with an optional `scheme://` absorbed by lookbehind)
//! 2. Port
//! 3. Path, query and fragment components
//!
//! Each step reports a tagged outcome. A rejected hostname drops the
//! tentative span and moves the cursor to a recovery point past the
//! offending byte, so the scan always makes progress and a new span may
//! start inside the abandoned region.

// Per-decision logging, compiled in with the `trace` feature.
macro_rules! trace_scan {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        log::trace!($($arg)*);
    };
}

mod host;
mod port;
mod tail;

use crate::cursor::Cursor;
use crate::limits::MAX_SCAN_LEN;
use crate::options::ScanOptions;
use crate::LinkSpan;
use host::{scan_host, Host};
use port::{scan_port, Port};
use tail::scan_tail;

/// Find links in `text` with the built-in options.
///
/// Spans are sorted, non-overlapping and count code points.
///
/// # Example
/// ```
/// use autolinker::{scan, LinkSpan};
///
/// assert_eq!(scan("see http://a.com/b?c#d"), vec![LinkSpan::new(4, 22)]);
/// assert_eq!(scan("a.co"), vec![]);
/// ```
pub fn scan(text: &str) -> Vec<LinkSpan> {
    scan_with(text, &ScanOptions::default())
}

/// Find links in `text` with custom options.
///
/// Spans count code points.
pub fn scan_with(text: &str, options: &ScanOptions<'_>) -> Vec<LinkSpan> {
    let mut spans = Vec::new();
    scan_into(text.as_bytes(), options, &mut spans);
    if !text.is_ascii() {
        to_code_points(text.as_bytes(), &mut spans);
    }
    spans
}

/// Find links in raw bytes. Spans count bytes.
///
/// Any byte outside printable ASCII is a non-matching byte, so for UTF-8
/// input the result equals [`scan_with`] up to the offset unit.
pub fn scan_bytes(input: &[u8], options: &ScanOptions<'_>) -> Vec<LinkSpan> {
    let mut spans = Vec::new();
    scan_into(input, options, &mut spans);
    spans
}

/// Find links in raw bytes, appending byte-offset spans to `out`.
///
/// `out` is cleared first; reuse it across calls to avoid allocation.
pub fn scan_into(input: &[u8], options: &ScanOptions<'_>, out: &mut Vec<LinkSpan>) {
    out.clear();
    if input.len() > MAX_SCAN_LEN {
        return;
    }
    let cursor = Cursor::new(input);
    // Every hostname needs a dot.
    if cursor.is_empty() || cursor.find(b'.').is_none() {
        return;
    }
    Scanner {
        cursor,
        options,
        spans: out,
    }
    .run();
}

/// State of one scan call.
struct Scanner<'a, 'o> {
    cursor: Cursor<'a>,
    options: &'o ScanOptions<'o>,
    spans: &'o mut Vec<LinkSpan>,
}

impl Scanner<'_, '_> {
    fn run(mut self) {
        loop {
            self.cursor.skip_spaces();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_span();
        }
    }

    /// Scan one tentative span starting at the cursor.
    fn scan_span(&mut self) {
        let (start, host_end) = match scan_host(&mut self.cursor, self.options) {
            Host::Accepted { start, end } => (start, end),
            Host::Rejected { resume_at } => {
                trace_scan!("abandon span, resume at {resume_at}");
                self.cursor.seek(resume_at);
                return;
            }
        };

        let end = match scan_port(&mut self.cursor) {
            Port::Absent => host_end,
            Port::Accepted { end } => end,
            Port::Rejected => {
                self.finish(start, host_end);
                return;
            }
        };

        let end = scan_tail(&mut self.cursor).unwrap_or(end);
        self.finish(start, end);
    }

    fn finish(&mut self, start: usize, end: usize) {
        debug_assert!(start < end && end <= self.cursor.len());
        debug_assert!(
            self.spans.last().is_none_or(|prev| prev.end_usize() <= start),
            "span {start}..{end} overlaps the previous span"
        );
        trace_scan!("span {start}..{end}");
        self.spans.push(LinkSpan::from_usize(start, end));
    }
}

/// Rewrite byte offsets as code-point offsets, in one pass.
fn to_code_points(input: &[u8], spans: &mut [LinkSpan]) {
    let mut chars = 0usize;
    let mut last = 0usize;
    let mut convert = |offset: u32| {
        let offset = offset as usize;
        chars += input[last..offset]
            .iter()
            .filter(|&&b| !is_continuation(b))
            .count();
        last = offset;
        chars as u32
    };
    for span in spans {
        span.start = convert(span.start);
        span.end = convert(span.end);
    }
}

/// UTF-8 continuation byte (`10xxxxxx`).
#[inline]
fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(input: &str) -> Vec<(u32, u32)> {
        scan(input).iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(scan("").is_empty());
        assert!(scan("   ").is_empty());
        assert!(scan("no links here").is_empty());
    }

    #[test]
    fn test_single_host() {
        assert_eq!(spans("a.com"), vec![(0, 5)]);
        assert_eq!(spans("  a.com  "), vec![(2, 7)]);
    }

    #[test]
    fn test_full_url() {
        assert_eq!(spans("http://a.com/b?c#d"), vec![(0, 18)]);
    }

    #[test]
    fn test_port_rejected_ends_span() {
        assert_eq!(spans("a.com:8/x"), vec![(0, 5)]);
    }

    #[test]
    fn test_too_many_port_digits_skips_them() {
        assert_eq!(spans("a.com:123456b.com"), vec![(0, 5), (12, 17)]);
    }

    #[test]
    fn test_port_after_trailing_labels() {
        // The port is read where the hostname run ended.
        assert_eq!(spans("a.com.co:80"), vec![(0, 11)]);
    }

    #[test]
    fn test_unknown_scheme_keeps_host() {
        assert_eq!(spans("ftp://a.com"), vec![(6, 11)]);
    }

    #[test]
    fn test_nested_scheme() {
        assert_eq!(spans("http://http://a.com"), vec![(7, 19)]);
    }

    #[test]
    fn test_rejected_host_before_colon_gets_no_port() {
        assert_eq!(spans("a.com b/:80"), vec![(0, 5)]);
        assert!(scan("x/:80").is_empty());
    }

    #[test]
    fn test_control_bytes_abandon_host() {
        assert_eq!(spans("a.com\tb.com"), vec![(6, 11)]);
        assert!(scan("x.com\n").is_empty());
        assert_eq!(spans("a.com \nb.com"), vec![(0, 5), (7, 12)]);
    }

    #[test]
    fn test_non_ascii_offsets_are_code_points() {
        assert_eq!(spans("\u{554a}a.com"), vec![(1, 6)]);
        assert_eq!(spans("\u{554a} a.com \u{1f600} b.com"), vec![(2, 7), (10, 15)]);
    }

    #[test]
    fn test_scan_bytes_counts_bytes() {
        let options = ScanOptions::default();
        let found = scan_bytes("\u{554a} a.com".as_bytes(), &options);
        assert_eq!(found, vec![LinkSpan::new(4, 9)]);
    }

    #[test]
    fn test_scan_into_reuses_buffer() {
        let options = ScanOptions::default();
        let mut out = Vec::new();
        scan_into(b"a.com b.com", &options, &mut out);
        assert_eq!(out.len(), 2);
        scan_into(b"none", &options, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_custom_suffixes_and_schemes() {
        // `https` is not configured, so only its host is linked.
        let options = ScanOptions::new(&[".com", ".io"], &["http"]).unwrap();
        let found = scan_with("a.io https://b.io http://c.io", &options);
        assert_eq!(
            found,
            vec![LinkSpan::new(0, 4), LinkSpan::new(13, 17), LinkSpan::new(18, 29)]
        );
    }

    #[test]
    fn test_without_schemes() {
        let options = ScanOptions::new(&[".com"], &[]).unwrap();
        assert_eq!(scan_with("http://a.com", &options), vec![LinkSpan::new(7, 12)]);
    }

    #[test]
    fn test_to_code_points() {
        let input = "\u{e9}a.com".as_bytes();
        let mut found = vec![LinkSpan::new(2, 7)];
        to_code_points(input, &mut found);
        assert_eq!(found, vec![LinkSpan::new(1, 6)]);
    }
}
