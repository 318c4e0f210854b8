//! Deck realization: resolving the ambiguous pairs of a candidate block.
//!
//! A block fixes every position's suit and narrows its value to a single
//! card or one of four ambiguous pairs. Each (pair, suit) combination
//! occurs at exactly two positions, which leaves sixteen independent
//! binary choices. All 65,536 realizations are built and scored; the best
//! one is kept.

use bracelet_core::bits::SEQUENCE_BITS;
use bracelet_core::predicates::catalog;
use bracelet_core::{is_bracelet_valid, Card, Deck, PredicateBits, Suit, DECK_SIZE};

use crate::parse::{block_axes, CandidateBlock};
use crate::scheme::{CellCode, ValueScheme};
use crate::score::{packed_score, spread_score};
use crate::CandidateError;

/// Suit order of the sixteen enumeration bits. Bit `suit_slot * 4 + pair`
/// chooses the orientation of that pair within that suit.
const ENUMERATION_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

/// The winning realization of one candidate block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealizedDeck {
    pub deck: Deck,
    pub predicate_bits: PredicateBits,
    /// Packed (predicate count, spread) score.
    pub score: u32,
}

impl RealizedDeck {
    /// Count of supported predicates, the high half of the score.
    pub fn major_sequence_count(&self) -> u32 {
        self.score >> 16
    }

    /// Spread penalty as displayed in reports: `65535 - spread`.
    pub fn spread_display(&self) -> u32 {
        65535 - (self.score & 65535)
    }
}

/// Checks that every axis of a block is bracelet-valid. A failure means
/// the candidate file is corrupt and processing must stop.
pub fn validate_block(block: &CandidateBlock) -> Result<(), CandidateError> {
    for (label, sequence) in block_axes(block) {
        if !is_bracelet_valid(sequence) {
            return Err(CandidateError::InvalidSequence { label });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Default)]
struct PairSlots {
    positions: [usize; 2],
    count: u8,
}

/// Realizes the best-scoring deck for one candidate block.
pub fn realize_best(
    block: &CandidateBlock,
    scheme: &ValueScheme,
    find_all: bool,
) -> Result<RealizedDeck, CandidateError> {
    // Decode suit and value code per position. Ambiguous positions keep a
    // placeholder card until the enumeration fills them.
    let mut template = [Card::new(Suit::Spade, 1); DECK_SIZE];
    let mut slots = [[PairSlots::default(); 4]; 4];

    for position in 0..DECK_SIZE {
        let bit = SEQUENCE_BITS as usize - 1 - position;
        let suit = Suit::from_axis_bits(block.red >> bit & 1 != 0, block.cd >> bit & 1 != 0);
        let code = ((block.odd >> bit & 1) << 3)
            | ((block.c7k >> bit & 1) << 2)
            | ((block.c8k >> bit & 1) << 1)
            | (block.c4t >> bit & 1);

        match scheme.table[code as usize] {
            CellCode::None => {
                return Err(CandidateError::IllegalValueCode {
                    position,
                    code: code as u8,
                });
            }
            CellCode::Value(value) => template[position] = Card::new(suit, value),
            CellCode::Pair(pair) => {
                let slot = &mut slots[pair][suit.index()];
                if slot.count < 2 {
                    slot.positions[slot.count as usize] = position;
                }
                slot.count = slot.count.saturating_add(1);
            }
        }
    }

    for (pair, suits) in slots.iter().enumerate() {
        for (suit_index, slot) in suits.iter().enumerate() {
            if slot.count != 2 {
                return Err(CandidateError::AmbiguityLayout {
                    pair,
                    suit: Suit::ALL[suit_index],
                    count: slot.count,
                });
            }
        }
    }

    let realize = |choice: u32| -> RealizedDeck {
        let mut cards = template;
        for (suit_slot, suit) in ENUMERATION_SUITS.iter().enumerate() {
            for (pair, values) in scheme.pairs.iter().enumerate() {
                let slot = &slots[pair][suit.index()];
                let pick = (choice >> (suit_slot * 4 + pair) & 1) as usize;
                cards[slot.positions[pick]] = Card::new(*suit, values.low);
                cards[slot.positions[1 - pick]] = Card::new(*suit, values.high);
            }
        }
        let deck = Deck::new(cards);

        let mut bits = scheme.guaranteed;
        for predicate in scheme.tested {
            if is_bracelet_valid(deck.value_indicator(predicate.values)) {
                bits |= predicate.bit;
            }
        }
        if find_all {
            for predicate in catalog::SPECIALS {
                if is_bracelet_valid(deck.value_indicator(predicate.values)) {
                    bits |= predicate.bit;
                }
            }
        }

        let score = packed_score(bits, spread_score(&deck));
        RealizedDeck {
            deck,
            predicate_bits: bits,
            score,
        }
    };

    let mut best = realize(0);
    if !best.deck.is_complete() {
        return Err(CandidateError::IncompleteDeck);
    }

    let mut beyond_guaranteed = best.predicate_bits != scheme.guaranteed;
    for choice in 1..(1u32 << 16) {
        let candidate = realize(choice);
        beyond_guaranteed |= candidate.predicate_bits != scheme.guaranteed;
        // Strict improvement only: ties keep the earlier realization.
        if candidate.score > best.score {
            best = candidate;
        }
    }

    if !beyond_guaranteed {
        tracing::debug!(
            scheme = scheme.name,
            "no realization supported a predicate beyond the guaranteed set"
        );
    }

    Ok(best)
}
