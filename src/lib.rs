//! An immutable French deck built on a sequence protocol, with optional
//! `no_std` support.
//!
//! The crate provides a [`Sequence`] trait with two required primitives,
//! a length and indexed access. Membership, forward and reverse iteration,
//! slicing, random choice and sorting are derived from them once for every
//! implementer. [`FrenchDeck`] is the fixed 52-card sequence built on top.
//!
//! # Example
//!
//! ```
//! use frenchdeck::{Card, FrenchDeck, OrderingKey, Sequence, Slice};
//!
//! let deck = FrenchDeck::new();
//! assert_eq!(deck.len(), 52);
//! assert_eq!(deck.at(13), Ok(&Card::new("2", "diamonds")));
//!
//! let aces = deck.slice(Slice::new(Some(12), None).with_step(13)).unwrap();
//! assert!(aces.iter().all(|card| card.rank() == "A"));
//!
//! let sorted = deck.sorted(&OrderingKey::default());
//! assert_eq!(sorted.last(), Some(&Card::new("A", "spades")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod ordering;
pub mod sequence;
pub mod slice;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, SUITS};
pub use deck::FrenchDeck;
pub use error::{IndexError, SliceError};
pub use options::DeckOptions;
pub use ordering::{OrderingKey, SPADES_HIGH, spades_high};
pub use sequence::{Iter, Sequence, resolve_index};
pub use slice::{Positions, Slice, SliceIndices};
