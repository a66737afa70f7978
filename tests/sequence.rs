//! Sequence protocol tests over a deck and a minimal custom container.

use frenchdeck::{FrenchDeck, IndexError, Sequence, Slice, SliceError, resolve_index};
use proptest::prelude::*;

/// A container that only supplies the two required primitives.
struct Letters(Vec<char>);

impl Sequence for Letters {
    type Item = char;

    fn len(&self) -> usize {
        self.0.len()
    }

    fn at(&self, index: isize) -> Result<&char, IndexError> {
        let position = resolve_index(index, self.0.len())?;
        self.0
            .get(position)
            .ok_or(IndexError::OutOfRange {
                index,
                len: self.0.len(),
            })
    }
}

fn letters(text: &str) -> Letters {
    Letters(text.chars().collect())
}

#[test]
fn custom_container_gains_derived_behavior() {
    let word = letters("deck");

    assert_eq!(word.len(), 4);
    assert_eq!(word.at(-1), Ok(&'k'));
    assert!(word.contains(&'c'));
    assert!(!word.contains(&'z'));
    assert_eq!(word.iter().collect::<String>(), "deck");
    assert_eq!(word.iter_rev().collect::<String>(), "kced");
    assert_eq!(word.slice(1..3).unwrap(), ['e', 'c']);
    assert_eq!(word.slice(Slice::full().with_step(2)).unwrap(), ['d', 'c']);
    assert_eq!(word.sorted_by_key(|&letter| letter), ['c', 'd', 'e', 'k']);
    assert_eq!(word.iter().collect::<String>(), "deck");
}

#[test]
fn empty_container_is_total() {
    let empty = letters("");

    assert!(empty.is_empty());
    assert_eq!(empty.iter().next(), None);
    assert_eq!(empty.iter_rev().next(), None);
    assert!(!empty.contains(&'a'));
    assert!(empty.slice(..).unwrap().is_empty());
    assert!(empty.slice(Slice::full().with_step(-1)).unwrap().is_empty());
    assert!(empty.shuffled(1).is_empty());
    assert_eq!(
        empty.at(-1),
        Err(IndexError::OutOfRange { index: -1, len: 0 })
    );
}

#[test]
fn resolve_index_boundaries() {
    assert_eq!(resolve_index(0, 1), Ok(0));
    assert_eq!(resolve_index(-1, 1), Ok(0));
    assert_eq!(
        resolve_index(1, 1),
        Err(IndexError::OutOfRange { index: 1, len: 1 })
    );
    assert_eq!(
        resolve_index(-2, 1),
        Err(IndexError::OutOfRange { index: -2, len: 1 })
    );
    assert_eq!(resolve_index(isize::MIN, usize::MAX), Ok(usize::MAX / 2));
}

#[test]
fn slice_indices_clamp_extreme_steps() {
    let indices = Slice::full().with_step(isize::MIN).indices(52).unwrap();
    assert_eq!(indices.len(), 1);
    assert_eq!(indices.start(), 51);
    assert_eq!(indices.step(), -isize::MAX);

    let indices = Slice::full().with_step(isize::MAX).indices(52).unwrap();
    assert_eq!(indices.into_iter().collect::<Vec<_>>(), [0]);

    assert_eq!(
        Slice::new(Some(3), Some(3)).with_step(0).indices(52),
        Err(SliceError::ZeroStep)
    );
}

fn bound() -> impl Strategy<Value = Option<isize>> {
    proptest::option::of(-80isize..80)
}

fn step() -> impl Strategy<Value = isize> {
    prop_oneof![-60isize..=-1, 1isize..=60]
}

proptest! {
    #[test]
    fn at_succeeds_exactly_inside_bounds(index in -200isize..200) {
        let deck = FrenchDeck::new();
        let inside = (-52..52).contains(&index);
        prop_assert_eq!(deck.at(index).is_ok(), inside);
        if index < 0 && inside {
            prop_assert_eq!(deck.at(index), deck.at(52 + index));
        }
    }

    #[test]
    fn slice_never_fails_for_nonzero_step(start in bound(), stop in bound(), step in step()) {
        let deck = FrenchDeck::new();
        let slice = Slice { start, stop, step: Some(step) };

        let cards = deck.slice(slice).unwrap();
        let indices = slice.indices(deck.len()).unwrap();
        prop_assert_eq!(cards.len(), indices.len());
        prop_assert!(cards.iter().all(|card| deck.contains(card)));
        prop_assert!(indices.into_iter().all(|position| position < deck.len()));
    }

    #[test]
    fn forward_slice_matches_skip_take(start in 0usize..60, stop in 0usize..60) {
        let deck = FrenchDeck::new();
        let slice = Slice::new(Some(start as isize), Some(stop as isize));

        let expected: Vec<_> = deck
            .iter()
            .skip(start)
            .take(stop.min(deck.len()).saturating_sub(start))
            .cloned()
            .collect();
        prop_assert_eq!(deck.slice(slice).unwrap(), expected);
    }

    #[test]
    fn reversed_slice_mirrors_forward_slice(step in 1isize..60) {
        let deck = FrenchDeck::new();

        let forward = deck.slice(Slice::full().with_step(step)).unwrap();
        let backward = deck.slice(Slice::full().with_step(-step)).unwrap();
        prop_assert_eq!(forward.len(), backward.len());
        prop_assert_eq!(backward.first(), deck.at(-1).ok());
    }

    #[test]
    fn shuffled_keeps_every_card(seed in any::<u64>()) {
        let deck = FrenchDeck::new();
        let shuffled = deck.shuffled(seed);

        prop_assert_eq!(shuffled.len(), deck.len());
        prop_assert!(shuffled.iter().all(|card| deck.contains(card)));
    }
}
