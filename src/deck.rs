//! The immutable French deck.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::IndexError;
use crate::options::DeckOptions;
use crate::ordering::OrderingKey;
use crate::sequence::{Iter, Sequence, resolve_index};

/// A fixed, ordered deck of cards.
///
/// The deck is generated once, suit-major and rank-minor: for each suit in
/// the configured order, every rank in the configured order. Position `i`
/// is therefore the same on every run. Nothing can be added, removed or
/// replaced afterwards.
///
/// All access goes through [`Sequence`]:
///
/// ```
/// use frenchdeck::{Card, FrenchDeck, Sequence};
///
/// let deck = FrenchDeck::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.at(0), Ok(&Card::new("2", "spades")));
/// assert_eq!(deck.at(-1), Ok(&Card::new("A", "hearts")));
/// assert!(deck.contains(&Card::new("Q", "spades")));
/// assert!(!deck.contains(&Card::new("Q", "dogs")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrenchDeck {
    /// Cards in generation order.
    cards: Vec<Card>,
    /// Ranks the deck was built from.
    ranks: Vec<String>,
    /// Suits the deck was built from.
    suits: Vec<String>,
}

impl FrenchDeck {
    /// Creates the canonical 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates a deck from the given ranks and suits.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{DeckOptions, FrenchDeck, Sequence};
    ///
    /// let options = DeckOptions::default().with_ranks(["J", "Q", "K"]);
    /// let deck = FrenchDeck::with_options(options);
    /// assert_eq!(deck.len(), 12);
    /// ```
    #[must_use]
    pub fn with_options(options: DeckOptions) -> Self {
        let DeckOptions { ranks, suits } = options;
        let mut cards = Vec::with_capacity(ranks.len() * suits.len());

        for suit in &suits {
            for rank in &ranks {
                cards.push(Card::new(rank.as_str(), suit.as_str()));
            }
        }

        log::debug!(
            "built deck of {} cards ({} ranks x {} suits)",
            cards.len(),
            ranks.len(),
            suits.len()
        );

        Self {
            cards,
            ranks,
            suits,
        }
    }

    /// Returns the ranks in generation order.
    #[must_use]
    pub fn ranks(&self) -> &[String] {
        &self.ranks
    }

    /// Returns the suits in generation order.
    #[must_use]
    pub fn suits(&self) -> &[String] {
        &self.suits
    }

    /// Returns a copy of the deck stably sorted by `key`.
    ///
    /// Cards the key does not cover sort after every covered card and keep
    /// their deck order.
    ///
    /// # Example
    ///
    /// ```
    /// use frenchdeck::{Card, FrenchDeck, OrderingKey};
    ///
    /// let deck = FrenchDeck::new();
    /// let sorted = deck.sorted(&OrderingKey::default());
    /// assert_eq!(sorted[0], Card::new("2", "clubs"));
    /// assert_eq!(sorted[51], Card::new("A", "spades"));
    /// ```
    #[must_use]
    pub fn sorted(&self, key: &OrderingKey) -> Vec<Card> {
        self.sorted_by_key(|card| key.key(card).unwrap_or(usize::MAX))
    }
}

impl Default for FrenchDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequence for FrenchDeck {
    type Item = Card;

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn at(&self, index: isize) -> Result<&Card, IndexError> {
        let position = resolve_index(index, self.cards.len())?;
        self.cards
            .get(position)
            .ok_or(IndexError::OutOfRange {
                index,
                len: self.cards.len(),
            })
    }
}

impl<'a> IntoIterator for &'a FrenchDeck {
    type Item = &'a Card;
    type IntoIter = Iter<'a, FrenchDeck>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
