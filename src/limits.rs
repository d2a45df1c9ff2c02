//! Grammar bounds for the link scanner.
//!
//! Fixed-length tokens and digit counts. Recovery offsets are derived from
//! these lengths, never written as bare numbers at the call site.

/// Fewest digits accepted after `host:` as a port
pub const MIN_PORT_DIGITS: usize = 2;

/// Most digits accepted after `host:` as a port
pub const MAX_PORT_DIGITS: usize = 5;

/// Marker separating a scheme from the hostname
pub const SCHEME_SEPARATOR: &[u8] = b"://";

/// Longest text block the scanner will emit spans for (u32 offsets)
pub const MAX_SCAN_LEN: usize = u32::MAX as usize;
