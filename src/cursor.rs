//! Pointer-based cursor for high-performance byte scanning.
//!
//! Uses raw pointers internally for maximum scanning speed,
//! wrapped in a safe API with bounds checking at block entry.

/// A cursor for efficient byte-by-byte scanning.
///
/// Internally uses raw pointers to avoid bounds checks in tight loops.
/// Besides moving forward, the cursor can look back at the bytes it has
/// already passed and can be repositioned with [`Cursor::seek`], which the
/// scanner uses to resume after an abandoned span.
///
/// # Example
/// ```
/// use autolinker::cursor::Cursor;
///
/// let input = b"http://a.com";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.find(b':'), Some(4));
/// cursor.advance(4);
/// assert!(cursor.at_bytes(b"://"));
/// assert!(cursor.preceded_by(b"http", 0));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    ptr: *const u8,
    end: *const u8,
    base: *const u8,
    _marker: std::marker::PhantomData<&'a [u8]>,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        let ptr = input.as_ptr();
        let end = unsafe { ptr.add(input.len()) };
        Self {
            ptr,
            end,
            base: ptr,
            _marker: std::marker::PhantomData,
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        // SAFETY: ptr >= base by construction
        unsafe { self.ptr.offset_from(self.base) as usize }
    }

    /// Total length of the input.
    #[inline]
    pub fn len(&self) -> usize {
        // SAFETY: end >= base by construction
        unsafe { self.end.offset_from(self.base) as usize }
    }

    /// Check if the input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base == self.end
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        // SAFETY: end >= ptr by construction
        unsafe { self.end.offset_from(self.ptr) as usize }
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.ptr >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            // SAFETY: not at EOF
            Some(unsafe { *self.ptr })
        }
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        // SAFETY: n <= remaining checked in debug
        self.ptr = unsafe { self.ptr.add(n) };
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.ptr = unsafe { self.ptr.add(1) };
    }

    /// Move to an absolute offset, clamped to the end of input.
    #[inline]
    pub fn seek(&mut self, offset: usize) {
        let offset = offset.min(self.len());
        // SAFETY: offset <= len
        self.ptr = unsafe { self.base.add(offset) };
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Check if the remaining input starts with a byte sequence.
    #[inline]
    pub fn at_bytes(&self, bytes: &[u8]) -> bool {
        self.remaining_slice().starts_with(bytes)
    }

    /// Check if the bytes just before the cursor equal `bytes`, without
    /// looking further back than `floor`.
    #[inline]
    pub fn preceded_by(&self, bytes: &[u8], floor: usize) -> bool {
        let offset = self.offset();
        offset >= floor + bytes.len() && self.consumed_slice().ends_with(bytes)
    }

    /// Skip while predicate is true.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.offset();
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.offset() - start
    }

    /// Skip spaces only.
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_while(|b| b == b' ')
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        // SAFETY: ptr and end are valid pointers from the same allocation
        unsafe { std::slice::from_raw_parts(self.ptr, self.remaining()) }
    }

    /// Get the bytes before the cursor as a slice.
    #[inline]
    pub fn consumed_slice(&self) -> &'a [u8] {
        // SAFETY: base and ptr are valid pointers from the same allocation
        unsafe { std::slice::from_raw_parts(self.base, self.offset()) }
    }

    /// Find the next occurrence of a byte using memchr.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.remaining_slice())
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
