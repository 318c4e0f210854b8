//! Deck scoring.
//!
//! A deck's score packs the supported-predicate count into the high 16
//! bits and the spread score into the low 16, so more predicates always
//! beat a better spread and the spread breaks ties.

use bracelet_core::{Deck, PredicateBits, DECK_SIZE};

fn gap_penalty(gap: usize) -> u32 {
    match gap {
        1 => 32,
        2 => 16,
        3 => 8,
        4 => 4,
        5 => 2,
        6 => 1,
        _ => 0,
    }
}

/// Sum of penalties over every cyclically adjacent pair of equal-valued
/// cards. Each pair of neighbouring occurrences is counted exactly once,
/// the pair across the wrap included. Runs inside the 2^16 realization
/// loop, so it is a single pass with no allocation.
pub fn spread_penalty(deck: &Deck) -> u32 {
    const UNSEEN: usize = usize::MAX;
    let mut first_position = [UNSEEN; 13];
    let mut last_position = [UNSEEN; 13];

    let mut penalty = 0;
    for (position, card) in deck.cards().iter().enumerate() {
        let value = card.value as usize - 1;
        if last_position[value] == UNSEEN {
            first_position[value] = position;
        } else {
            penalty += gap_penalty(position - last_position[value]);
        }
        last_position[value] = position;
    }

    for value in 0..13 {
        // The wrap gap; a lone occurrence gives 52, which costs nothing.
        if first_position[value] != UNSEEN {
            penalty += gap_penalty(DECK_SIZE - last_position[value] + first_position[value]);
        }
    }

    penalty
}

/// Spread score, higher is better: `65535 - penalty`.
pub fn spread_score(deck: &Deck) -> u16 {
    (65535 - spread_penalty(deck).min(65535)) as u16
}

/// Packs predicate count and spread into the total deck order.
pub fn packed_score(bits: PredicateBits, spread: u16) -> u32 {
    (bits.count() << 16) | spread as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracelet_core::{Card, Suit};

    fn deck_by_suit_runs() -> Deck {
        // A..K of spades, clubs, hearts, diamonds in order. Equal values
        // sit exactly 13 apart, so the spread penalty is zero.
        let mut cards = [Card::new(Suit::Spade, 1); DECK_SIZE];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::new(Suit::ALL[i / 13], (i % 13) as u8 + 1);
        }
        Deck::new(cards)
    }

    #[test]
    fn well_spread_deck_has_no_penalty() {
        let deck = deck_by_suit_runs();
        assert_eq!(spread_penalty(&deck), 0);
        assert_eq!(spread_score(&deck), 65535);
    }

    #[test]
    fn adjacent_duplicates_cost_the_most() {
        let mut cards = *deck_by_suit_runs().cards();
        // Swap the spade two with the club ace. Aces land at 0, 1, 26, 39
        // (gap 1, penalty 32) and twos at 13, 14, 27, 40 (gap 1, another
        // 32); every other value keeps its 13-apart spacing.
        cards.swap(1, 13);
        let deck = Deck::new(cards);
        assert_eq!(spread_penalty(&deck), 64);
    }

    #[test]
    fn wrap_pairs_are_penalized_once() {
        let mut cards = *deck_by_suit_runs().cards();
        // Swap the diamond ace with the diamond queen. Aces land at 0,
        // 13, 26, 50 with a wrap gap of 52 - 50 + 0 = 2 (penalty 16);
        // queens land at 11, 24, 37, 39 with a linear gap of 2 (another
        // 16).
        cards.swap(39, 50);
        let deck = Deck::new(cards);
        assert_eq!(spread_penalty(&deck), 32);
    }

    #[test]
    fn predicate_count_dominates_spread() {
        let nine = PredicateBits(0x1FF);
        let ten = PredicateBits(0x3FF);
        // Nine predicates with a perfect spread lose to ten predicates
        // with a terrible one.
        assert!(packed_score(ten, 10) > packed_score(nine, 40000));
        // Same predicates: the better spread wins.
        assert!(packed_score(nine, 40000) > packed_score(nine, 39999));
    }
}
