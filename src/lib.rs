//! autolinker: incremental auto-link detection for rich-text editors
//!
//! Turns typed or pasted text such as `a.com` or `http://a.com/b?c#d` into
//! link annotations and keeps them consistent while the text is edited,
//! without touching links the user created.
//!
//! # Components
//! - [`scan`]: single-pass span scanner over one block of plain text
//! - [`Reconciler`]: re-scans only the blocks an edit batch touched and
//!   emits annotation edits for the host to apply
//! - [`Document`]: minimal in-memory host used to drive the reconciler
//!
//! # Design Principles
//! - No regex: pure byte-level scanning
//! - One forward pass per block, bounded lookbehind only
//! - Scanner and reconciler are total: malformed text yields fewer links,
//!   never an error
//! - No state survives a call: both components return values
//!
//! # Example
//! ```
//! use autolinker::{reconcile, scan, AnnotationOp, LinkAttrs, LinkSpan, TextBlock};
//!
//! assert_eq!(scan("a.com:80a.com"), vec![LinkSpan::new(0, 8), LinkSpan::new(8, 13)]);
//!
//! let ops = reconcile([TextBlock::new(1, "http://a.com")]);
//! assert_eq!(ops[1], AnnotationOp::AddLink {
//!     from: 1,
//!     to: 13,
//!     attrs: LinkAttrs::auto("http://a.com"),
//! });
//! ```

pub mod annotation;
pub mod cursor;
pub mod document;
pub mod error;
pub mod limits;
pub mod options;
pub mod reconcile;
pub mod scan;
pub mod span;
pub mod step;

// Re-export primary types
pub use annotation::{Annotation, AnnotationOp, LinkAttrs};
pub use document::Document;
pub use error::{EditError, OptionsError};
pub use options::ScanOptions;
pub use reconcile::{affected_blocks, reconcile, Reconciler, TextBlock, TextBlocks};
pub use scan::{scan, scan_bytes, scan_into, scan_with};
pub use span::LinkSpan;
pub use step::{Assoc, EditBatch, EditStep, Replacement};
