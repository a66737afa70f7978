//! Deck configuration options.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{RANKS, SUITS};

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use frenchdeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_ranks(["J", "Q", "K", "A"])
///     .with_suits(["hearts", "spades"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Ranks in generation order.
    pub ranks: Vec<String>,
    /// Suits in generation order.
    pub suits: Vec<String>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            ranks: RANKS.iter().copied().map(String::from).collect(),
            suits: SUITS.iter().copied().map(String::from).collect(),
        }
    }
}

impl DeckOptions {
    /// Sets the ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_ranks(["7", "8", "9"]);
    /// assert_eq!(options.ranks, ["7", "8", "9"]);
    /// ```
    #[must_use]
    pub fn with_ranks<I>(mut self, ranks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.ranks = ranks.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the suits.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_suits(["hearts"]);
    /// assert_eq!(options.suits, ["hearts"]);
    /// ```
    #[must_use]
    pub fn with_suits<I>(mut self, suits: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.suits = suits.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the number of cards a deck built from these options holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }
}
