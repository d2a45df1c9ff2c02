//! Edit steps and position mapping.
//!
//! A step is a set of replaced regions expressed in the coordinates of the
//! document before that step. A batch is an ordered list of steps; the
//! regions each step touched are carried forward through every later step
//! so the reconciler can look them up in the final document.

use std::ops::Range;

use smallvec::SmallVec;

/// Side a position sticks to when an insertion happens exactly at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Assoc {
    /// Stay before inserted content.
    #[default]
    Before,
    /// Move after inserted content.
    After,
}

/// One replaced region of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// Start, in the coordinates before the step.
    pub from: usize,
    /// Length of the replaced content.
    pub old_len: usize,
    /// Length of the content that replaced it.
    pub new_len: usize,
}

impl Replacement {
    /// End of the replaced content, before the step.
    #[inline]
    pub const fn old_end(&self) -> usize {
        self.from + self.old_len
    }
}

/// A single edit: sorted, non-overlapping replaced regions.
///
/// A step with no regions (for example one that only changes annotations)
/// touches no text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStep {
    replacements: SmallVec<[Replacement; 1]>,
}

impl EditStep {
    /// A step that changes no text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replace `from..to` with `new_len` positions of new content.
    pub fn replace(from: usize, to: usize, new_len: usize) -> Self {
        debug_assert!(from <= to);
        Self::from_replacements([Replacement {
            from,
            old_len: to - from,
            new_len,
        }])
    }

    /// Insert `len` positions at `at`.
    pub fn insert(at: usize, len: usize) -> Self {
        Self::replace(at, at, len)
    }

    /// Delete `from..to`.
    pub fn delete(from: usize, to: usize) -> Self {
        Self::replace(from, to, 0)
    }

    /// Build a step from regions given in any order.
    ///
    /// No-op regions (nothing removed, nothing inserted) are dropped.
    pub fn from_replacements(replacements: impl IntoIterator<Item = Replacement>) -> Self {
        let mut replacements: SmallVec<[Replacement; 1]> = replacements
            .into_iter()
            .filter(|r| r.old_len != 0 || r.new_len != 0)
            .collect();
        replacements.sort_unstable_by_key(|r| r.from);
        debug_assert!(
            replacements.windows(2).all(|w| w[0].old_end() <= w[1].from),
            "overlapping replacements in one step"
        );
        Self { replacements }
    }

    /// Replaced regions, sorted by position.
    #[inline]
    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// Check if the step touches no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Map a position from before this step to after it.
    ///
    /// Positions inside a replaced region collapse to its start or end;
    /// positions exactly at an insertion follow `assoc`.
    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        let mut shift: isize = 0;
        for r in &self.replacements {
            if r.from > pos {
                break;
            }
            if pos <= r.old_end() {
                let side = if r.old_len == 0 {
                    assoc
                } else if pos == r.from {
                    Assoc::Before
                } else if pos == r.old_end() {
                    Assoc::After
                } else {
                    assoc
                };
                let base = r.from.saturating_add_signed(shift);
                return match side {
                    Assoc::Before => base,
                    Assoc::After => base + r.new_len,
                };
            }
            shift += r.new_len as isize - r.old_len as isize;
        }
        pos.saturating_add_signed(shift)
    }

    /// Regions this step changed, as `(before, after)` pairs.
    ///
    /// `before` is in the coordinates before the step, `after` in the
    /// coordinates right after it.
    pub fn changed_ranges(&self) -> impl Iterator<Item = (Range<usize>, Range<usize>)> + '_ {
        let mut shift: isize = 0;
        self.replacements.iter().map(move |r| {
            let new_from = r.from.saturating_add_signed(shift);
            shift += r.new_len as isize - r.old_len as isize;
            (r.from..r.old_end(), new_from..new_from + r.new_len)
        })
    }
}

/// Ordered steps of one edit batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    steps: Vec<EditStep>,
}

impl EditBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: EditStep) {
        self.steps.push(step);
    }

    /// Steps in the order they were applied.
    #[inline]
    pub fn steps(&self) -> &[EditStep] {
        &self.steps
    }

    /// Check if no step touches text.
    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(EditStep::is_empty)
    }

    /// Map a position from before the whole batch to after it.
    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        self.steps.iter().fold(pos, |pos, step| step.map(pos, assoc))
    }

    /// Changed regions in the coordinates of the final document.
    ///
    /// Each step's `after` region is carried through the steps that
    /// followed it, start biased before and end biased after, so text
    /// inserted at its edges later on is included.
    pub fn changed_ranges(&self) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        for (i, step) in self.steps.iter().enumerate() {
            let later = &self.steps[i + 1..];
            for (_, after) in step.changed_ranges() {
                let from = later
                    .iter()
                    .fold(after.start, |pos, s| s.map(pos, Assoc::Before));
                let to = later
                    .iter()
                    .fold(after.end, |pos, s| s.map(pos, Assoc::After));
                out.push(from..to.max(from));
            }
        }
        out
    }
}

impl From<EditStep> for EditBatch {
    fn from(step: EditStep) -> Self {
        Self { steps: vec![step] }
    }
}

impl FromIterator<EditStep> for EditBatch {
    fn from_iter<I: IntoIterator<Item = EditStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Extend<EditStep> for EditBatch {
    fn extend<I: IntoIterator<Item = EditStep>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}
