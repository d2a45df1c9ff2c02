//! Hostname scanning.
//!
//! A hostname is a run of ASCII letters and digits with single dots
//! between labels. The run is accepted only if one of its dots starts a
//! recognized suffix; the most recent dot is tried first. A `scheme://`
//! met inside the run moves the span start back over the scheme and
//! restarts the run after the separator.

use smallvec::SmallVec;

use crate::cursor::Cursor;
use crate::limits::SCHEME_SEPARATOR;
use crate::options::ScanOptions;

/// Outcome of [`scan_host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Host {
    /// Hostname accepted as `start..end`.
    ///
    /// The cursor is left at the end of the hostname run, which is past
    /// `end` when labels trail the matched suffix.
    Accepted { start: usize, end: usize },
    /// No hostname; the tentative span is dropped and scanning resumes at
    /// `resume_at`.
    Rejected { resume_at: usize },
}

/// Scan a hostname starting at the cursor.
pub(crate) fn scan_host(cursor: &mut Cursor<'_>, options: &ScanOptions<'_>) -> Host {
    let mut start = cursor.offset();
    let mut run_start = start;
    let mut dots: SmallVec<[usize; 4]> = SmallVec::new();
    // A dot is only valid right after a label byte.
    let mut after_label = false;

    while let Some(b) = cursor.peek() {
        if b == b':' && cursor.at_bytes(SCHEME_SEPARATOR) {
            let colon = cursor.offset();
            let Some(scheme) = scheme_before(cursor, run_start, options) else {
                trace_scan!("`://` at {colon} has no known scheme");
                return Host::Rejected {
                    resume_at: colon + SCHEME_SEPARATOR.len(),
                };
            };
            start = colon - scheme.len();
            cursor.advance(SCHEME_SEPARATOR.len());
            run_start = cursor.offset();
            dots.clear();
            after_label = false;
            continue;
        }

        match b {
            b'.' if after_label => {
                dots.push(cursor.offset());
                after_label = false;
            }
            b if b.is_ascii_alphanumeric() => after_label = true,
            b if ends_run(b) => break,
            _ => {
                return Host::Rejected {
                    resume_at: cursor.offset() + 1,
                };
            }
        }
        cursor.bump();
    }

    match match_suffix(cursor.consumed_slice(), &dots, options) {
        Some(end) => Host::Accepted { start, end },
        None => Host::Rejected {
            resume_at: cursor.offset() + 1,
        },
    }
}

/// Bytes that end a hostname run without rejecting it.
///
/// Only the space separates; tabs, newlines and other control bytes are
/// invalid inside a hostname.
#[inline]
fn ends_run(b: u8) -> bool {
    matches!(b, b' ' | b'/' | b'?' | b'#' | b':')
}

/// The configured scheme ending right before the cursor, if any.
///
/// The lookbehind never reaches before `floor`, the start of the current
/// run, so a scheme cannot claim bytes of an earlier span.
fn scheme_before<'o>(
    cursor: &Cursor<'_>,
    floor: usize,
    options: &ScanOptions<'o>,
) -> Option<&'o str> {
    options
        .schemes()
        .iter()
        .copied()
        .find(|scheme| cursor.preceded_by(scheme.as_bytes(), floor))
}

/// End offset of the first recognized suffix, trying dots right to left.
fn match_suffix(run: &[u8], dots: &[usize], options: &ScanOptions<'_>) -> Option<usize> {
    dots.iter().rev().find_map(|&dot| {
        options
            .suffixes()
            .iter()
            .find(|suffix| run[dot..].starts_with(suffix.as_bytes()))
            .map(|suffix| dot + suffix.len())
    })
}
