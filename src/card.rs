//! Card types and the canonical rank and suit tables.

use alloc::string::String;
use core::fmt;

/// Canonical rank order, lowest first.
pub const RANKS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Canonical suit generation order.
pub const SUITS: [&str; 4] = ["spades", "diamonds", "clubs", "hearts"];

/// Number of cards in a canonical deck.
pub const DECK_SIZE: usize = RANKS.len() * SUITS.len();

/// A playing card.
///
/// Cards are plain values: two cards are equal (and hash equally) exactly
/// when their rank and suit strings are equal. Neither field can change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    rank: String,
    suit: String,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate its inputs. A card such as
    /// `Card::new("Q", "dogs")` is representable, it just never appears in a
    /// deck built from the canonical suits.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::Card;
    ///
    /// let card = Card::new("Q", "spades");
    /// assert_eq!(card, Card::new(String::from("Q"), "spades"));
    /// assert_eq!(card.to_string(), "Q of spades");
    /// ```
    #[must_use]
    pub fn new(rank: impl Into<String>, suit: impl Into<String>) -> Self {
        Self {
            rank: rank.into(),
            suit: suit.into(),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}
