//! Scanner configuration.
//!
//! The recognized hostname suffixes and URL schemes are plain data, so
//! extending the grammar never touches the state machine.

use crate::error::OptionsError;

/// Suffixes recognized out of the box.
pub const DEFAULT_SUFFIXES: &[&str] = &[".com"];

/// Schemes absorbed into a span when followed by `://`.
pub const DEFAULT_SCHEMES: &[&str] = &["http", "https"];

/// Options controlling which hostnames and schemes the scanner accepts.
///
/// # Example
/// ```
/// use autolinker::{scan, scan_with, LinkSpan, ScanOptions};
///
/// let options = ScanOptions::new(&[".com", ".org"], &["http", "https"]).unwrap();
/// assert_eq!(scan("see rust.org"), vec![]);
/// assert_eq!(scan_with("see rust.org", &options), vec![LinkSpan::new(4, 12)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions<'a> {
    suffixes: &'a [&'a str],
    schemes: &'a [&'a str],
}

impl<'a> ScanOptions<'a> {
    /// Validate and build options.
    ///
    /// Each suffix must be a `.` followed by at least one ASCII letter or
    /// digit; each scheme must be a non-empty run of ASCII letters or digits.
    ///
    /// # Errors
    /// Returns an [`OptionsError`] naming the first offending entry.
    pub fn new(suffixes: &'a [&'a str], schemes: &'a [&'a str]) -> Result<Self, OptionsError> {
        if suffixes.is_empty() {
            return Err(OptionsError::NoSuffixes);
        }
        for suffix in suffixes {
            if !suffix.strip_prefix('.').is_some_and(is_label) {
                return Err(OptionsError::InvalidSuffix((*suffix).to_owned()));
            }
        }
        if let Some(scheme) = schemes.iter().find(|s| !is_label(s)) {
            return Err(OptionsError::InvalidScheme((*scheme).to_owned()));
        }
        Ok(Self { suffixes, schemes })
    }

    /// Recognized hostname suffixes, tried in order at each dot.
    #[inline]
    pub fn suffixes(&self) -> &'a [&'a str] {
        self.suffixes
    }

    /// Recognized schemes.
    #[inline]
    pub fn schemes(&self) -> &'a [&'a str] {
        self.schemes
    }
}

impl ScanOptions<'static> {
    /// Built-in configuration: `.com` and `http`/`https`.
    pub const fn builtin() -> Self {
        Self {
            suffixes: DEFAULT_SUFFIXES,
            schemes: DEFAULT_SCHEMES,
        }
    }
}

impl Default for ScanOptions<'_> {
    fn default() -> Self {
        ScanOptions::builtin()
    }
}

fn is_label(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
