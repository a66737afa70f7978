//! Prints a deck through the sequence protocol.
//!
//! Run with `RUST_LOG=debug` to see construction logs.

use frenchdeck::{Card, FrenchDeck, OrderingKey, Sequence, Slice};

fn main() {
    env_logger::init();

    let deck = FrenchDeck::new();

    println!("{}", deck.len());
    match deck.at(13) {
        Ok(card) => println!("{card}"),
        Err(err) => println!("Index error: {err}"),
    }

    for (label, slice) in [
        ("first three", Slice::from(0..3)),
        ("aces", Slice::new(Some(12), None).with_step(13)),
    ] {
        match deck.slice(slice) {
            Ok(cards) => println!("{label}: {cards:?}"),
            Err(err) => println!("Slice error: {err}"),
        }
    }

    for card in &deck {
        println!("loop: {card}");
    }
    for card in deck.iter_rev() {
        println!("reversed: {card}");
    }

    for card in [Card::new("Q", "spades"), Card::new("Q", "dogs")] {
        if deck.contains(&card) {
            println!("{card} is in deck");
        } else {
            println!("{card} isn't in deck");
        }
    }

    for card in deck.sorted(&OrderingKey::default()) {
        println!("{card}");
    }
}
