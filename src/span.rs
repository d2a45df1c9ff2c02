//! Compact half-open span representation for detected links.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Supports text blocks up to 4G code points.

/// Half-open `[start, end)` range of a detected link.
///
/// Offsets are relative to the scanned text. Spans returned by
/// [`crate::scan`] count code points; spans returned by
/// [`crate::scan_bytes`] count bytes.
///
/// # Example
/// ```
/// use autolinker::LinkSpan;
///
/// let span = LinkSpan::new(0, 5);
/// assert_eq!(span.substring("a.com rest"), "a.com");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(C)]
pub struct LinkSpan {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<LinkSpan>() == 8);

impl LinkSpan {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a span from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the substring this span refers to (code-point offsets).
    ///
    /// Offsets past the end of `text` are clamped.
    pub fn substring<'a>(&self, text: &'a str) -> &'a str {
        if text.is_ascii() {
            let end = self.end_usize().min(text.len());
            let start = self.start_usize().min(end);
            return &text[start..end];
        }
        let start = byte_offset(text, self.start_usize());
        let end = byte_offset(text, self.end_usize()).max(start);
        &text[start..end]
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Check if two spans share at least one position.
    #[inline]
    pub const fn overlaps(&self, other: &LinkSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Byte offset of the `chars`-th code point, clamped to `text.len()`.
fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}
