//! Card, suit, and deck model.

use serde::{Deserialize, Serialize};

use crate::bits::SEQUENCE_BITS;
use crate::predicates::ValueSet;

/// Number of cards in a deck, equal to the sequence length.
pub const DECK_SIZE: usize = SEQUENCE_BITS as usize;

/// Card suit. The discriminants match the axis encoding
/// `(hd_bit << 1) | cd_bit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    /// Decodes a suit from the HD and CD axis bits at one deck position.
    pub fn from_axis_bits(hd: bool, cd: bool) -> Suit {
        match (hd, cd) {
            (false, false) => Suit::Spade,
            (false, true) => Suit::Club,
            (true, false) => Suit::Heart,
            (true, true) => Suit::Diamond,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Suit::Spade => 0,
            Suit::Club => 1,
            Suit::Heart => 2,
            Suit::Diamond => 3,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Club => 'C',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
        }
    }
}

const VALUE_LABELS: [&str; 14] = [
    "X", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// A single playing card. `value` runs 1 (ace) through 13 (king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub fn new(suit: Suit, value: u8) -> Card {
        debug_assert!((1..=13).contains(&value));
        Card { suit, value }
    }

    /// Display label for the card value, `A` through `K`.
    pub fn value_label(self) -> &'static str {
        VALUE_LABELS[self.value as usize]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value_label(), self.suit.letter())
    }
}

/// A fully realized deck ordering. Position 0 is the top card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    pub fn new(cards: [Card; DECK_SIZE]) -> Deck {
        Deck { cards }
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Card {
        self.cards[position]
    }

    /// Indicator sequence for a value subset: the bit for position `i` is
    /// set when the card at `i` has a value in `values`. Position 0 maps to
    /// the most significant of the 52 bits, matching the textual form.
    pub fn value_indicator(&self, values: ValueSet) -> u64 {
        let mut sequence = 0u64;
        for card in &self.cards {
            sequence = (sequence << 1) | values.contains(card.value) as u64;
        }
        sequence
    }

    /// True when the deck holds each of the 52 standard cards exactly once.
    pub fn is_complete(&self) -> bool {
        let mut seen = [false; 64];
        for card in &self.cards {
            if !(1..=13).contains(&card.value) {
                return false;
            }
            let slot = card.suit.index() * 16 + card.value as usize;
            if seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }

    pub fn position_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| *c == card)
    }

    /// Rotation offset that puts the nine of diamonds on the bottom of the
    /// displayed deck. Cosmetic only; bracelet validity is cyclic.
    pub fn top_card_index(&self) -> usize {
        match self.position_of(Card::new(Suit::Diamond, 9)) {
            Some(position) => (position + 1) % DECK_SIZE,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordered_deck() -> Deck {
        let mut cards = [Card::new(Suit::Spade, 1); DECK_SIZE];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::new(Suit::ALL[i / 13], (i % 13) as u8 + 1);
        }
        Deck::new(cards)
    }

    #[test]
    fn suit_decoding_matches_axis_encoding() {
        assert_eq!(Suit::from_axis_bits(false, false), Suit::Spade);
        assert_eq!(Suit::from_axis_bits(false, true), Suit::Club);
        assert_eq!(Suit::from_axis_bits(true, false), Suit::Heart);
        assert_eq!(Suit::from_axis_bits(true, true), Suit::Diamond);
        for suit in Suit::ALL {
            assert_eq!(Suit::ALL[suit.index()], suit);
        }
    }

    #[test]
    fn card_labels_render() {
        assert_eq!(Card::new(Suit::Spade, 1).to_string(), "AS");
        assert_eq!(Card::new(Suit::Diamond, 10).to_string(), "10D");
        assert_eq!(Card::new(Suit::Heart, 13).to_string(), "KH");
    }

    #[test]
    fn complete_deck_detection() {
        let deck = ordered_deck();
        assert!(deck.is_complete());

        let mut cards = *deck.cards();
        cards[0] = cards[1];
        assert!(!Deck::new(cards).is_complete());
    }

    #[test]
    fn value_indicator_orientation() {
        // Only position 0 holds an ace, so only bit 51 is set.
        let deck = ordered_deck();
        let mut aces = 0u64;
        for (i, card) in deck.cards().iter().enumerate() {
            if card.value == 1 {
                aces |= 1 << (51 - i);
            }
        }
        assert_eq!(deck.value_indicator(ValueSet::of(&[1])), aces);
    }

    #[test]
    fn top_card_index_follows_the_nine_of_diamonds() {
        let deck = ordered_deck();
        let nine_position = deck.position_of(Card::new(Suit::Diamond, 9)).unwrap();
        assert_eq!(deck.top_card_index(), (nine_position + 1) % DECK_SIZE);
    }
}
