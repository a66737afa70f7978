//! Slice descriptors and index adjustment.
//!
//! Slicing follows list semantics: bounds are half-open, negative bounds
//! count from the end, and out-of-range bounds are clamped rather than
//! rejected. The only invalid slice is one with a zero step.

use core::iter::FusedIterator;
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::SliceError;

/// A `start:stop:step` slice over a sequence.
///
/// Every part is optional. A missing step means `1`; missing bounds mean
/// "from the first element in the step's direction" and "through the last".
///
/// ```
/// use frenchdeck::Slice;
///
/// let every_thirteenth = Slice::new(Some(12), None).with_step(13);
/// let positions: Vec<usize> = every_thirteenth.indices(52).unwrap().into_iter().collect();
/// assert_eq!(positions, [12, 25, 38, 51]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Slice {
    /// First logical index (inclusive).
    pub start: Option<isize>,
    /// Last logical index (exclusive).
    pub stop: Option<isize>,
    /// Distance between selected indices. Negative walks backwards.
    pub step: Option<isize>,
}

impl Slice {
    /// A slice selecting every element in order.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: None,
        }
    }

    /// A slice over `[start, stop)` with the default step.
    #[must_use]
    pub const fn new(start: Option<isize>, stop: Option<isize>) -> Self {
        Self {
            start,
            stop,
            step: None,
        }
    }

    /// Sets the step.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::Slice;
    ///
    /// let reversed = Slice::full().with_step(-1);
    /// assert_eq!(reversed.step, Some(-1));
    /// ```
    #[must_use]
    pub const fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if the step is zero. Any other
    /// combination of bounds succeeds, possibly selecting nothing.
    pub fn indices(&self, len: usize) -> Result<SliceIndices, SliceError> {
        let step = match self.step {
            None => 1,
            Some(0) => return Err(SliceError::ZeroStep),
            // keeps `-step` representable
            Some(step) => step.max(-isize::MAX),
        };
        let len = isize::try_from(len).unwrap_or(isize::MAX);

        // Positions a bound collapses to when it falls off either end.
        let (before, after) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                let shifted = bound + len;
                if shifted < 0 { before } else { shifted }
            } else if bound >= len {
                after
            } else {
                bound
            }
        };

        let start = self
            .start
            .map_or(if step < 0 { after } else { before }, clamp);
        let stop = self
            .stop
            .map_or(if step < 0 { before } else { after }, clamp);

        let count = if step < 0 {
            if stop < start {
                (start - stop - 1) / -step + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok(SliceIndices {
            start,
            step,
            len: count.unsigned_abs(),
        })
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end))
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end))
    }
}

/// A slice resolved against a concrete length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceIndices {
    start: isize,
    step: isize,
    len: usize,
}

impl SliceIndices {
    /// Returns the first selected position.
    ///
    /// Meaningless when [`Self::is_empty`] is true.
    #[must_use]
    pub const fn start(&self) -> isize {
        self.start
    }

    /// Returns the step between selected positions.
    #[must_use]
    pub const fn step(&self) -> isize {
        self.step
    }

    /// Returns the number of selected positions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the slice selects nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl IntoIterator for SliceIndices {
    type Item = usize;
    type IntoIter = Positions;

    fn into_iter(self) -> Self::IntoIter {
        Positions {
            next: self.start,
            step: self.step,
            remaining: self.len,
        }
    }
}

/// Iterator over the positions selected by a [`SliceIndices`].
#[derive(Debug, Clone)]
pub struct Positions {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let position = usize::try_from(self.next).ok()?;
        self.remaining -= 1;
        self.next = self.next.saturating_add(self.step);
        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Positions {}

impl FusedIterator for Positions {}
