//! Minimal in-memory host document.
//!
//! A flat list of paragraphs with link annotations. Positions count code
//! points; every paragraph occupies one position for its opening boundary,
//! its text, and one position for its closing boundary, so the first
//! paragraph's text starts at position 1.
//!
//! Text edits return the [`EditStep`] they performed. Links follow the text
//! they cover: typing strictly inside a link extends it, typing at either
//! edge does not, and deleting text clips the link or drops it once empty.

use crate::annotation::{Annotation, AnnotationOp, LinkAttrs};
use crate::error::EditError;
use crate::reconcile::{TextBlock, TextBlocks};
use crate::step::EditStep;
use crate::LinkSpan;

/// One paragraph: text plus links relative to its first character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Paragraph {
    text: String,
    /// Code-point length of `text`.
    len: usize,
    links: Vec<(LinkSpan, LinkAttrs)>,
}

impl Paragraph {
    fn new(text: String) -> Self {
        let len = text.chars().count();
        Self {
            text,
            len,
            links: Vec::new(),
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    /// Replace `from..to` (code points) with `insert`.
    fn replace(&mut self, from: usize, to: usize, insert: &str) -> usize {
        let start = self.byte_offset(from);
        let end = self.byte_offset(to);
        self.text.replace_range(start..end, insert);
        let inserted = insert.chars().count();
        self.len = self.len - (to - from) + inserted;

        self.links.retain_mut(|(span, _)| {
            let (start, end) = shift_link(span.start_usize(), span.end_usize(), from, to, inserted);
            *span = LinkSpan::from_usize(start, end);
            start < end
        });
        inserted
    }
}

/// Move a link `start..end` across the replacement of `from..to` by
/// `inserted` positions.
fn shift_link(start: usize, end: usize, from: usize, to: usize, inserted: usize) -> (usize, usize) {
    let removed = to - from;
    let clip = |pos: usize| {
        if pos <= from {
            pos
        } else if pos >= to {
            pos - removed
        } else {
            from
        }
    };
    let (start, end) = (clip(start), clip(end));
    if inserted == 0 || start >= end {
        (start, end)
    } else if from <= start {
        (start + inserted, end + inserted)
    } else if from < end {
        (start, end + inserted)
    } else {
        (start, end)
    }
}

/// Reference host document made of paragraphs.
///
/// # Example
/// ```
/// use autolinker::{Document, EditBatch, Reconciler};
///
/// let mut doc = Document::from_paragraphs(["a.co"]);
/// let step = doc.insert_text(5, "m").unwrap();
/// let ops = Reconciler::default().reconcile_batch(&doc, &EditBatch::from(step));
/// doc.apply(&ops).unwrap();
///
/// let links = doc.annotations();
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].attrs.target, "a.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with one paragraph per item.
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: paragraphs
                .into_iter()
                .map(|text| Paragraph::new(text.into()))
                .collect(),
        }
    }

    /// Number of paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Text of the paragraph at `index`.
    pub fn paragraph_text(&self, index: usize) -> Option<&str> {
        self.paragraphs.get(index).map(|p| p.text.as_str())
    }

    /// Concatenated text of all paragraphs.
    pub fn text_content(&self) -> String {
        self.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }

    /// Total size in positions, boundaries included.
    pub fn size(&self) -> usize {
        self.paragraphs.iter().map(|p| p.len + 2).sum()
    }

    /// Paragraphs with the position of their first character.
    fn positioned(&self) -> impl Iterator<Item = (usize, &Paragraph)> + '_ {
        self.paragraphs.iter().scan(1, |pos, p| {
            let start = *pos;
            *pos += p.len + 2;
            Some((start, p))
        })
    }

    /// Index and content start of the paragraph whose text holds `pos`.
    fn locate(&self, pos: usize) -> Result<(usize, usize), EditError> {
        self.positioned()
            .enumerate()
            .find(|(_, (start, p))| (*start..=start + p.len).contains(&pos))
            .map(|(index, (start, _))| (index, start))
            .ok_or(EditError::OutOfBounds { pos })
    }

    /// Index and content start of the paragraph holding all of `from..to`.
    fn locate_range(&self, from: usize, to: usize) -> Result<(usize, usize), EditError> {
        if from > to {
            return Err(EditError::Inverted { from, to });
        }
        let (index, start) = self.locate(from)?;
        if to > start + self.paragraphs[index].len {
            return Err(EditError::CrossesBlocks { from, to });
        }
        Ok((index, start))
    }

    /// Replace `from..to` with `text`.
    ///
    /// # Errors
    /// Fails if the range is inverted, out of bounds, or spans paragraphs.
    pub fn replace(&mut self, from: usize, to: usize, text: &str) -> Result<EditStep, EditError> {
        let (index, start) = self.locate_range(from, to)?;
        let inserted = self.paragraphs[index].replace(from - start, to - start, text);
        Ok(EditStep::replace(from, to, inserted))
    }

    /// Insert `text` at `pos`.
    ///
    /// # Errors
    /// Fails if `pos` is not inside a paragraph's text.
    pub fn insert_text(&mut self, pos: usize, text: &str) -> Result<EditStep, EditError> {
        self.replace(pos, pos, text)
    }

    /// Delete `from..to`.
    ///
    /// # Errors
    /// Fails if the range is inverted, out of bounds, or spans paragraphs.
    pub fn delete(&mut self, from: usize, to: usize) -> Result<EditStep, EditError> {
        self.replace(from, to, "")
    }

    /// Append a paragraph at the end of the document.
    pub fn push_paragraph(&mut self, text: impl Into<String>) -> EditStep {
        let at = self.size();
        let paragraph = Paragraph::new(text.into());
        let step = EditStep::insert(at, paragraph.len + 2);
        self.paragraphs.push(paragraph);
        step
    }

    /// Mark `from..to` as a user-created link to the covered text.
    ///
    /// # Errors
    /// Fails if the range is inverted, out of bounds, or spans paragraphs.
    pub fn add_user_link(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        let (index, start) = self.locate_range(from, to)?;
        let paragraph = &mut self.paragraphs[index];
        let span = LinkSpan::from_usize(from - start, to - start);
        let attrs = LinkAttrs::user(span.substring(&paragraph.text));
        // A user link replaces any link on the same text.
        paragraph.links.retain(|(other, _)| !other.overlaps(&span));
        paragraph.links.push((span, attrs));
        Ok(())
    }

    /// Apply reconciler output, in order.
    ///
    /// An auto-generated link is not added over text that already carries
    /// a user-created link.
    ///
    /// # Errors
    /// Fails on the first operation whose range is not inside one
    /// paragraph; earlier operations stay applied.
    pub fn apply(&mut self, ops: &[AnnotationOp]) -> Result<(), EditError> {
        for op in ops {
            match op {
                AnnotationOp::RemoveAutoLinks { from, to } => self.remove_auto_links(*from, *to),
                AnnotationOp::AddLink { from, to, attrs } => {
                    let (index, start) = self.locate_range(*from, *to)?;
                    let span = LinkSpan::from_usize(from - start, to - start);
                    let links = &mut self.paragraphs[index].links;
                    if attrs.auto_generated
                        && links
                            .iter()
                            .any(|(other, a)| !a.auto_generated && other.overlaps(&span))
                    {
                        log::debug!("skip auto link {from}..{to} over a user link");
                        continue;
                    }
                    links.push((span, attrs.clone()));
                }
            }
        }
        Ok(())
    }

    fn remove_auto_links(&mut self, from: usize, to: usize) {
        let mut pos = 1;
        for paragraph in &mut self.paragraphs {
            let start = pos;
            pos += paragraph.len + 2;
            if start > to || start + paragraph.len < from {
                continue;
            }
            paragraph.links.retain(|(span, attrs)| {
                let (s, e) = (start + span.start_usize(), start + span.end_usize());
                !(attrs.auto_generated && s < to && from < e)
            });
        }
    }

    /// All links in document order, with absolute positions.
    pub fn annotations(&self) -> Vec<Annotation> {
        let mut out: Vec<Annotation> = self
            .positioned()
            .flat_map(|(start, p)| {
                p.links.iter().map(move |(span, attrs)| Annotation {
                    from: start + span.start_usize(),
                    to: start + span.end_usize(),
                    attrs: attrs.clone(),
                })
            })
            .collect();
        out.sort_by_key(|a| (a.from, a.to));
        out
    }
}

impl TextBlocks for Document {
    fn blocks_touching(&self, from: usize, to: usize) -> Vec<TextBlock<'_>> {
        self.positioned()
            .skip_while(|(start, p)| start + p.len < from)
            .take_while(|(start, _)| *start <= to)
            .map(|(start, p)| TextBlock::with_len(start, &p.text, p.len))
            .collect()
    }
}
