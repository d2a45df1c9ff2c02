//! Change reconciler: keeps auto-generated links in step with edits.
//!
//! Given the text blocks an edit batch touched, the reconciler:
//! 1. Removes every auto-generated link inside each block
//! 2. Re-scans each block's current text
//! 3. Adds an auto-generated link for every span found
//!
//! User-created links are never named by the emitted operations. Blocks
//! the batch did not touch are never scanned.

use rustc_hash::FxHashSet;

use crate::annotation::{AnnotationOp, LinkAttrs};
use crate::options::ScanOptions;
use crate::scan::scan_with;
use crate::step::EditBatch;

/// A leaf block of inline text in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlock<'a> {
    pos: usize,
    text: &'a str,
    /// Code-point length of `text`.
    len: usize,
}

impl<'a> TextBlock<'a> {
    /// Block whose first character sits at document position `pos`.
    ///
    /// Counts the code points of `text` once; hosts that already know the
    /// length should use [`TextBlock::with_len`].
    pub fn new(pos: usize, text: &'a str) -> Self {
        Self::with_len(pos, text, text.chars().count())
    }

    /// Block with a known code-point length.
    pub fn with_len(pos: usize, text: &'a str, len: usize) -> Self {
        debug_assert_eq!(len, text.chars().count());
        Self { pos, text, len }
    }

    /// Document position of the first character.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current text content.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length in code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the block has no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Document position right after the last character.
    pub fn end(&self) -> usize {
        self.pos + self.len()
    }

    /// Check if `from..=to` meets the block's content, boundaries included.
    pub fn touches(&self, from: usize, to: usize) -> bool {
        self.pos <= to && from <= self.end()
    }
}

/// Host capability: look up text blocks of the edited document.
pub trait TextBlocks {
    /// Text blocks whose content range meets `from..=to`, in document
    /// order.
    fn blocks_touching(&self, from: usize, to: usize) -> Vec<TextBlock<'_>>;
}

impl TextBlocks for [TextBlock<'_>] {
    fn blocks_touching(&self, from: usize, to: usize) -> Vec<TextBlock<'_>> {
        self.iter()
            .filter(|block| block.touches(from, to))
            .copied()
            .collect()
    }
}

impl TextBlocks for Vec<TextBlock<'_>> {
    fn blocks_touching(&self, from: usize, to: usize) -> Vec<TextBlock<'_>> {
        self.as_slice().blocks_touching(from, to)
    }
}

/// Re-scans changed blocks with a fixed scanner configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler<'o> {
    options: ScanOptions<'o>,
}

impl<'o> Reconciler<'o> {
    pub fn new(options: ScanOptions<'o>) -> Self {
        Self { options }
    }

    /// Scanner options used for every block.
    pub fn options(&self) -> &ScanOptions<'o> {
        &self.options
    }

    /// Annotation edits for the blocks `batch` touched in `doc`.
    ///
    /// `doc` is the document after the batch. A batch that touched no
    /// text yields no operations.
    pub fn reconcile_batch<D>(&self, doc: &D, batch: &EditBatch) -> Vec<AnnotationOp>
    where
        D: TextBlocks + ?Sized,
    {
        self.reconcile(affected_blocks(doc, batch))
    }

    /// Annotation edits for a set of changed blocks.
    ///
    /// Removals for every block come first, then additions, each in
    /// document order. Duplicate blocks are processed once.
    pub fn reconcile<'b, I>(&self, blocks: I) -> Vec<AnnotationOp>
    where
        I: IntoIterator<Item = TextBlock<'b>>,
    {
        let blocks = dedup_blocks(blocks);
        if blocks.is_empty() {
            return Vec::new();
        }

        let mut ops: Vec<AnnotationOp> = blocks
            .iter()
            .map(|block| AnnotationOp::RemoveAutoLinks {
                from: block.pos(),
                to: block.end(),
            })
            .collect();
        let removals = ops.len();

        for block in &blocks {
            for span in scan_with(block.text(), &self.options) {
                ops.push(AnnotationOp::AddLink {
                    from: block.pos() + span.start_usize(),
                    to: block.pos() + span.end_usize(),
                    attrs: LinkAttrs::auto(span.substring(block.text())),
                });
            }
        }

        log::debug!(
            "reconciled {} blocks: {} removals, {} links",
            blocks.len(),
            removals,
            ops.len() - removals
        );
        ops
    }
}

/// Text blocks in `doc` touched by any step of `batch`, deduplicated and in
/// document order.
pub fn affected_blocks<'d, D>(doc: &'d D, batch: &EditBatch) -> Vec<TextBlock<'d>>
where
    D: TextBlocks + ?Sized,
{
    let ranges = batch.changed_ranges();
    let blocks = ranges
        .iter()
        .flat_map(|range| doc.blocks_touching(range.start, range.end));
    let blocks = dedup_blocks(blocks);
    log::debug!(
        "{} changed ranges touch {} text blocks",
        ranges.len(),
        blocks.len()
    );
    blocks
}

/// Annotation edits for `blocks` with the built-in scanner options.
///
/// # Example
/// ```
/// use autolinker::{reconcile, AnnotationOp, LinkAttrs, TextBlock};
///
/// let ops = reconcile([TextBlock::new(1, "see a.com")]);
/// assert_eq!(
///     ops,
///     vec![
///         AnnotationOp::RemoveAutoLinks { from: 1, to: 10 },
///         AnnotationOp::AddLink { from: 5, to: 10, attrs: LinkAttrs::auto("a.com") },
///     ]
/// );
/// ```
pub fn reconcile<'b, I>(blocks: I) -> Vec<AnnotationOp>
where
    I: IntoIterator<Item = TextBlock<'b>>,
{
    Reconciler::default().reconcile(blocks)
}

fn dedup_blocks<'b>(blocks: impl IntoIterator<Item = TextBlock<'b>>) -> Vec<TextBlock<'b>> {
    let mut seen = FxHashSet::default();
    let mut unique: Vec<TextBlock<'b>> = blocks
        .into_iter()
        .filter(|block| seen.insert(block.pos()))
        .collect();
    unique.sort_unstable_by_key(|block| block.pos());
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::EditStep;

    fn blocks() -> Vec<TextBlock<'static>> {
        vec![
            TextBlock::new(1, "first a.com"),
            TextBlock::new(14, "second"),
            TextBlock::new(22, "http://b.com/x c.co"),
        ]
    }

    #[test]
    fn test_block_geometry() {
        let block = TextBlock::new(3, "a\u{554a}b");
        assert_eq!(block.len(), 3);
        assert!(!block.is_empty());
        assert_eq!(block, TextBlock::with_len(3, "a\u{554a}b", 3));
        assert_eq!(block.end(), 6);
        assert!(block.touches(6, 6));
        assert!(block.touches(0, 3));
        assert!(!block.touches(7, 9));
        assert!(!block.touches(0, 2));
    }

    #[test]
    fn test_blocks_touching_slice() {
        let blocks = blocks();
        let found = blocks.blocks_touching(12, 14);
        assert_eq!(found.iter().map(|b| b.pos()).collect::<Vec<_>>(), vec![1, 14]);
    }

    #[test]
    fn test_affected_blocks_single_step() {
        let blocks = blocks();
        let batch = EditBatch::from(EditStep::insert(16, 1));
        let affected = affected_blocks(&blocks, &batch);
        assert_eq!(affected, vec![TextBlock::new(14, "second")]);
    }

    #[test]
    fn test_affected_blocks_dedup_and_order() {
        let blocks = blocks();
        let batch: EditBatch = [
            EditStep::insert(30, 1),
            EditStep::insert(2, 1),
            EditStep::delete(25, 26),
        ]
        .into_iter()
        .collect();
        let affected = affected_blocks(&blocks, &batch);
        assert_eq!(affected.iter().map(|b| b.pos()).collect::<Vec<_>>(), vec![1, 22]);
    }

    #[test]
    fn test_empty_batch_touches_nothing() {
        let blocks = blocks();
        assert!(affected_blocks(&blocks, &EditBatch::new()).is_empty());
        let reconciler = Reconciler::default();
        assert!(reconciler.reconcile_batch(&blocks, &EditBatch::new()).is_empty());
    }

    #[test]
    fn test_removals_precede_additions() {
        let ops = reconcile(blocks());
        let first_add = ops.iter().position(AnnotationOp::is_add).unwrap();
        assert_eq!(first_add, 3);
        assert!(ops[first_add..].iter().all(AnnotationOp::is_add));
    }

    #[test]
    fn test_links_use_document_positions() {
        let ops = reconcile([TextBlock::new(22, "http://b.com/x c.co")]);
        assert_eq!(
            ops,
            vec![
                AnnotationOp::RemoveAutoLinks { from: 22, to: 41 },
                AnnotationOp::AddLink {
                    from: 22,
                    to: 36,
                    attrs: LinkAttrs::auto("http://b.com/x"),
                },
            ]
        );
    }

    #[test]
    fn test_target_is_substring_for_non_ascii_block() {
        let ops = reconcile([TextBlock::new(1, "\u{554a} a.com")]);
        assert_eq!(
            ops[1],
            AnnotationOp::AddLink {
                from: 3,
                to: 8,
                attrs: LinkAttrs::auto("a.com"),
            }
        );
    }

    #[test]
    fn test_duplicate_blocks_processed_once() {
        let block = TextBlock::new(1, "a.com");
        assert_eq!(reconcile([block, block]).len(), 2);
    }

    #[test]
    fn test_custom_options() {
        let options = ScanOptions::new(&[".co"], &[]).unwrap();
        let reconciler = Reconciler::new(options);
        assert_eq!(reconciler.options(), &options);
        assert!(reconciler.options().schemes().is_empty());
        let ops = reconciler.reconcile([TextBlock::new(0, "c.co")]);
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1].range(), 0..4);
    }
}
