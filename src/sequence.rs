//! The sequence capability interface.
//!
//! A container implements [`Sequence`] by providing two primitives, a
//! length and indexed access. Membership, iteration in both directions,
//! slicing, random choice, shuffling and sorting are all derived from those
//! two primitives and are written once here for every implementer.

use alloc::vec::Vec;
use core::iter::{FusedIterator, Rev};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{IndexError, SliceError};
use crate::slice::Slice;

/// Resolves a logical index against a sequence of `len` elements.
///
/// Non-negative indices count from the start and negative indices count
/// from the end, so `-1` is the last element. Nothing is clamped.
///
/// # Errors
///
/// Returns [`IndexError::OutOfRange`] if `index >= len`, or if `index` is
/// negative and `|index| > len`.
///
/// # Example
///
/// ```
/// use frenchdeck::{IndexError, resolve_index};
///
/// assert_eq!(resolve_index(-1, 52), Ok(51));
/// assert_eq!(
///     resolve_index(52, 52),
///     Err(IndexError::OutOfRange { index: 52, len: 52 })
/// );
/// ```
pub const fn resolve_index(index: isize, len: usize) -> Result<usize, IndexError> {
    let distance = index.unsigned_abs();
    if index >= 0 {
        if distance < len {
            return Ok(distance);
        }
    } else if distance <= len {
        return Ok(len - distance);
    }
    Err(IndexError::OutOfRange { index, len })
}

/// A fixed-length container with indexed access.
///
/// Implementers supply [`len`](Self::len) and [`at`](Self::at); everything
/// else is provided.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at a logical index.
    ///
    /// Implementations should resolve the index with [`resolve_index`] so
    /// that negative indexing behaves the same for every sequence.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if the index has no element.
    fn at(&self, index: isize) -> Result<&Self::Item, IndexError>;

    /// Returns whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether some element equals `item`.
    ///
    /// This is always a linear scan through [`at`](Self::at).
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|candidate| candidate == item)
    }

    /// Returns a forward iterator over the elements.
    ///
    /// Each call starts a fresh traversal from the first element.
    fn iter(&self) -> Iter<'_, Self> {
        Iter {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Returns an iterator from the last element to the first.
    fn iter_rev(&self) -> Rev<Iter<'_, Self>> {
        self.iter().rev()
    }

    /// Returns a new vector with the elements selected by `slice`.
    ///
    /// Out-of-range bounds are clamped, so this only fails on a zero step.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::ZeroStep`] if the step is zero.
    fn slice(&self, slice: impl Into<Slice>) -> Result<Vec<Self::Item>, SliceError>
    where
        Self::Item: Clone,
    {
        let indices = slice.into().indices(self.len())?;
        Ok(indices
            .into_iter()
            .filter_map(|position| self.at(isize::try_from(position).ok()?).ok())
            .cloned()
            .collect())
    }

    /// Returns a uniformly chosen element, or `None` if the sequence is empty.
    fn choose<R: Rng>(&self, rng: &mut R) -> Option<&Self::Item> {
        if self.is_empty() {
            return None;
        }
        let position = rng.random_range(0..self.len());
        self.at(isize::try_from(position).ok()?).ok()
    }

    /// Returns the elements in a shuffled order determined by `seed`.
    ///
    /// The sequence itself is left untouched.
    fn shuffled(&self, seed: u64) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut items: Vec<Self::Item> = self.iter().cloned().collect();
        items.shuffle(&mut rng);
        log::trace!("shuffled {} elements with seed {seed}", items.len());
        items
    }

    /// Returns the elements stably sorted by `key`.
    ///
    /// Elements with equal keys keep their sequence order. The sequence
    /// itself is left untouched.
    fn sorted_by_key<K, F>(&self, key: F) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<Self::Item> = self.iter().cloned().collect();
        items.sort_by_key(key);
        log::trace!("sorted {} elements", items.len());
        items
    }
}

/// Iterator over a [`Sequence`], driven by repeated indexed access.
///
/// Created by [`Sequence::iter`] and [`Sequence::iter_rev`].
#[derive(Debug)]
pub struct Iter<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.at(isize::try_from(self.front).ok()?).ok()?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.at(isize::try_from(self.back - 1).ok()?).ok()?;
        self.back -= 1;
        Some(item)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}
