//! Ordering keys for sorting cards.
//!
//! A key packs a card's rank position and suit weight into one dense integer,
//! `rank_index * suit_count + suit_weight`, so sorting by the key orders cards
//! by rank first and breaks ties by suit.

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, RANKS};

/// Suits from lowest to highest weight for [`spades_high`].
pub const SPADES_HIGH: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];

/// Returns the spades-high ordering key of a card.
///
/// Aces rank highest and suits weigh clubs < diamonds < hearts < spades, so
/// the 2 of clubs maps to `0` and the ace of spades to `51`. Returns `None`
/// for a rank or suit outside the canonical tables.
///
/// # Example
///
/// ```
/// use frenchdeck::{Card, spades_high};
///
/// assert_eq!(spades_high(&Card::new("2", "clubs")), Some(0));
/// assert_eq!(spades_high(&Card::new("3", "diamonds")), Some(5));
/// assert_eq!(spades_high(&Card::new("A", "spades")), Some(51));
/// assert_eq!(spades_high(&Card::new("Q", "dogs")), None);
/// ```
#[must_use]
pub fn spades_high(card: &Card) -> Option<usize> {
    let rank = RANKS.iter().position(|&rank| rank == card.rank())?;
    let weight = SPADES_HIGH.iter().position(|&suit| suit == card.suit())?;
    Some(rank * SPADES_HIGH.len() + weight)
}

/// A configurable rank-then-suit ordering key.
///
/// Ranks and suits are each given dense positions in the order supplied;
/// a repeated entry keeps its first position. Distinct cards over the
/// configured tables always receive distinct keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingKey {
    /// Rank -> position in rank order.
    ranks: HashMap<String, usize>,
    /// Suit -> tie-break weight.
    weights: HashMap<String, usize>,
}

impl OrderingKey {
    /// Creates a key from a rank order and suits listed lowest first.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{Card, OrderingKey};
    ///
    /// let key = OrderingKey::new(["K", "Q"], ["spades", "hearts"]);
    /// assert_eq!(key.key(&Card::new("K", "hearts")), Some(1));
    /// assert_eq!(key.key(&Card::new("Q", "spades")), Some(2));
    /// ```
    #[must_use]
    pub fn new<R, S>(ranks: R, suits_low_to_high: S) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            ranks: dense_positions(ranks),
            weights: dense_positions(suits_low_to_high),
        }
    }

    /// Returns the key of a card, or `None` if its rank or suit is unknown.
    #[must_use]
    pub fn key(&self, card: &Card) -> Option<usize> {
        let rank = self.ranks.get(card.rank())?;
        let weight = self.weights.get(card.suit())?;
        Some(rank * self.weights.len() + weight)
    }

    /// Returns the number of distinct keys, one past the largest key.
    #[must_use]
    pub fn span(&self) -> usize {
        self.ranks.len() * self.weights.len()
    }
}

impl Default for OrderingKey {
    fn default() -> Self {
        Self::new(RANKS, SPADES_HIGH)
    }
}

fn dense_positions<I>(entries: I) -> HashMap<String, usize>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut positions = HashMap::new();
    for entry in entries {
        let next = positions.len();
        positions.entry(entry.into()).or_insert(next);
    }
    positions
}
