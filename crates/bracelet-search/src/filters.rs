//! Population and overlap gates applied to axis combinations.
//!
//! Each gate is a cheap pure predicate; the driver chains them with early
//! rejection so the expensive stages only ever see survivors.

use bracelet_core::bits::{popcount, SEQUENCE_BITS, SEQUENCE_MASK};

pub const CARDS_PER_SUIT: u32 = 13;

/// Per-suit odd and even card counts on a legal deck.
const ODD_CARDS_PER_SUIT: u32 = 7;
const EVEN_CARDS_PER_SUIT: u32 = 6;

/// The exact 16-bin joint distribution of (HD, CD, ODD, 7K) bits a bundle
/// must show to decode to a legal deck. Indexed by
/// `(hd << 3) | (cd << 2) | (odd << 1) | c7k`.
pub const DECK_HISTOGRAM: [u8; 16] = [3, 3, 3, 4, 3, 3, 3, 4, 3, 3, 3, 4, 3, 3, 3, 4];

/// Position masks of the four suits, derived from the HD and CD axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitMasks {
    pub spade: u64,
    pub club: u64,
    pub heart: u64,
    pub diamond: u64,
}

impl SuitMasks {
    /// Splits the deck positions by suit. Returns `None` unless the axes
    /// differ and every suit receives exactly thirteen positions.
    pub fn split(red: u64, cd: u64) -> Option<SuitMasks> {
        if red == cd {
            return None;
        }

        let inv_red = !red & SEQUENCE_MASK;
        let inv_cd = !cd & SEQUENCE_MASK;

        let diamond = red & cd;
        let spade = inv_red & inv_cd;
        let club = inv_red & cd;
        let heart = red & inv_cd;

        for mask in [diamond, spade, club, heart] {
            if popcount(mask) != CARDS_PER_SUIT {
                return None;
            }
        }

        Some(SuitMasks {
            spade,
            club,
            heart,
            diamond,
        })
    }

    /// The derived HC axis: positions held by hearts or clubs.
    pub fn hc(&self) -> u64 {
        self.club | self.heart
    }
}

/// True when every suit holds seven odd and six even cards under `odd`.
pub fn has_odd_split(suits: &SuitMasks, odd: u64) -> bool {
    let even = !odd & SEQUENCE_MASK;

    for suit_mask in [suits.spade, suits.heart, suits.club, suits.diamond] {
        if popcount(suit_mask & odd) != ODD_CARDS_PER_SUIT
            || popcount(suit_mask & even) != EVEN_CARDS_PER_SUIT
        {
            return false;
        }
    }

    true
}

fn zero_zero_count(seq0: u64, seq1: u64) -> u32 {
    popcount(!seq0 & !seq1 & SEQUENCE_MASK)
}

/// True when `c7k` leaves exactly twelve positions unset against each of
/// the four established axes.
pub fn has_high_axis_overlap(red: u64, cd: u64, hc: u64, odd: u64, c7k: u64) -> bool {
    [odd, red, cd, hc]
        .into_iter()
        .all(|axis| zero_zero_count(axis, c7k) == 12)
}

/// Joint distribution of the four axis bits over the 52 positions.
pub fn joint_histogram(red: u64, cd: u64, odd: u64, c7k: u64) -> [u8; 16] {
    let mut counts = [0u8; 16];

    for i in 0..SEQUENCE_BITS {
        let index = ((red >> i & 1) << 3) | ((cd >> i & 1) << 2) | ((odd >> i & 1) << 1)
            | (c7k >> i & 1);
        counts[index as usize] += 1;
    }

    counts
}

/// True when the joint distribution matches [`DECK_HISTOGRAM`], the
/// necessary condition for the four-axis code to decode to a legal deck.
pub fn has_deck_histogram(red: u64, cd: u64, odd: u64, c7k: u64) -> bool {
    joint_histogram(red, cd, odd, c7k) == DECK_HISTOGRAM
}
