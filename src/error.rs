//! Error types.
//!
//! Scanning and reconciling never fail; these cover configuration and the
//! reference host's edit API.

use thiserror::Error;

/// Rejected [`crate::ScanOptions`] configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("suffix set is empty")]
    NoSuffixes,
    #[error("suffix {0:?} must be a '.' followed by ASCII letters or digits")]
    InvalidSuffix(String),
    #[error("scheme {0:?} must be non-empty ASCII letters or digits")]
    InvalidScheme(String),
}

/// Rejected edit on a [`crate::Document`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("position {pos} is not inside a paragraph")]
    OutOfBounds { pos: usize },
    #[error("range {from}..{to} crosses a paragraph boundary")]
    CrossesBlocks { from: usize, to: usize },
    #[error("range {from}..{to} is inverted")]
    Inverted { from: usize, to: usize },
}
