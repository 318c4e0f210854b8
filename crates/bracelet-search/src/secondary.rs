//! Synthesis of the 8K and 4T secondary axes from an accepted bundle.
//!
//! Neither axis is drawn from a cache file. The 8K axis clears one bit per
//! suit from the 7K axis (the four sevens become low cards); the 4T axis
//! rearranges twelve more bits of the 7K axis by suit and parity class.
//! Both solvers return the first bracelet-valid combination in a fixed
//! iteration order.

use bracelet_core::bits::SEQUENCE_BITS;
use bracelet_core::{is_bracelet_valid, Suit};

use crate::driver::PrimaryAxes;

/// A synthesized 8K axis and the four bits it cleared from 7K.
#[derive(Debug, Clone, Copy)]
pub struct C8kSolution {
    pub c8k: u64,
    /// `c7k ^ c8k`: the positions of the four sevens.
    pub diff: u64,
}

/// Searches for an 8K axis by clearing one odd 7K bit per suit.
///
/// Candidates per suit are the positions where both ODD and 7K are set.
/// The spade choice varies slowest and the diamond choice fastest; the
/// first valid combination wins. With `sevens_apart` set, the cleared bits
/// must additionally satisfy [`sevens_apart`].
pub fn solve_c8k(axes: &PrimaryAxes, require_sevens_apart: bool) -> Option<C8kSolution> {
    let mut candidates: [Vec<u64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

    for i in 0..SEQUENCE_BITS {
        let bit = 1u64 << i;
        if axes.c7k & bit != 0 && axes.odd & bit != 0 {
            let suit = Suit::from_axis_bits(axes.red & bit != 0, axes.cd & bit != 0);
            candidates[suit.index()].push(bit);
        }
    }

    for &spade in &candidates[Suit::Spade.index()] {
        for &heart in &candidates[Suit::Heart.index()] {
            for &club in &candidates[Suit::Club.index()] {
                for &diamond in &candidates[Suit::Diamond.index()] {
                    let c8k = axes.c7k & !(spade | heart | club | diamond);
                    if !is_bracelet_valid(c8k) {
                        continue;
                    }
                    let diff = axes.c7k ^ c8k;
                    if require_sevens_apart && !sevens_apart(diff) {
                        continue;
                    }
                    return Some(C8kSolution { c8k, diff });
                }
            }
        }
    }

    tracing::debug!("no valid 8K axis for this bundle");
    None
}

/// True when the set bits of `diff` sit at cyclic gaps of at least six
/// positions, the gap across the wrap included.
pub fn sevens_apart(diff: u64) -> bool {
    let mut positions: Vec<u32> = Vec::with_capacity(4);
    for i in 0..SEQUENCE_BITS {
        if diff & (1u64 << i) != 0 {
            positions.push(i);
        }
    }

    if positions.len() < 2 {
        return true;
    }

    for pair in positions.windows(2) {
        if pair[1] - pair[0] < 6 {
            return false;
        }
    }

    let first = positions[0];
    let last = positions[positions.len() - 1];
    SEQUENCE_BITS + first - last >= 6
}

/// Candidate positions of one suit, partitioned by (ODD, 7K) class.
#[derive(Debug, Default)]
struct SuitBins {
    odd_low: Vec<u64>,
    even_low: Vec<u64>,
    odd_high: Vec<u64>,
    even_high: Vec<u64>,
}

/// Suits are decided in this order; it fixes which valid 4T axis is found
/// first.
const SUIT_ORDER: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

/// Searches for a 4T axis by rearranging 7K bits per suit.
///
/// Positions in `pinned` (the sevens fixed by the 8K solve) never move.
/// Per suit the transform clears a cyclically adjacent pair of odd-high
/// bits, sets an adjacent pair of even-low bits, clears one even-high bit,
/// and sets one odd-low bit. The first bracelet-valid result wins.
pub fn solve_c4t(axes: &PrimaryAxes, pinned: u64) -> Option<u64> {
    let mut bins = [
        SuitBins::default(),
        SuitBins::default(),
        SuitBins::default(),
        SuitBins::default(),
    ];

    for i in 0..SEQUENCE_BITS {
        let bit = 1u64 << i;
        if pinned & bit != 0 {
            continue;
        }
        let suit = Suit::from_axis_bits(axes.red & bit != 0, axes.cd & bit != 0);
        let bin = &mut bins[suit.index()];
        match (axes.odd & bit != 0, axes.c7k & bit != 0) {
            (true, false) => bin.odd_low.push(bit),
            (false, false) => bin.even_low.push(bit),
            (true, true) => bin.odd_high.push(bit),
            (false, true) => bin.even_high.push(bit),
        }
    }

    let found = search_suits(&bins, 0, 0, 0, axes.c7k);
    if found.is_none() {
        tracing::debug!("no valid 4T axis for this bundle");
    }
    found
}

fn search_suits(bins: &[SuitBins; 4], depth: usize, clear: u64, set: u64, c7k: u64) -> Option<u64> {
    if depth == SUIT_ORDER.len() {
        let candidate = (c7k & !clear) | set;
        return is_bracelet_valid(candidate).then_some(candidate);
    }

    let bin = &bins[SUIT_ORDER[depth].index()];
    if bin.even_low.len() < 2
        || bin.odd_high.len() < 2
        || bin.even_high.is_empty()
        || bin.odd_low.is_empty()
    {
        return None;
    }

    for el in 0..bin.even_low.len() {
        let set_pair = bin.even_low[el] | bin.even_low[(el + 1) % bin.even_low.len()];
        for &even_high in &bin.even_high {
            for &odd_low in &bin.odd_low {
                for oh in 0..bin.odd_high.len() {
                    let clear_pair =
                        bin.odd_high[oh] | bin.odd_high[(oh + 1) % bin.odd_high.len()];
                    let found = search_suits(
                        bins,
                        depth + 1,
                        clear | clear_pair | even_high,
                        set | set_pair | odd_low,
                        c7k,
                    );
                    if found.is_some() {
                        return found;
                    }
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_accepts_wide_gaps() {
        let diff = (1u64 << 0) | (1 << 6) | (1 << 12) | (1 << 18);
        assert!(sevens_apart(diff));

        let spread = (1u64 << 2) | (1 << 15) | (1 << 28) | (1 << 41);
        assert!(sevens_apart(spread));
    }

    #[test]
    fn spacing_rejects_close_bits() {
        let diff = (1u64 << 0) | (1 << 5) | (1 << 12) | (1 << 18);
        assert!(!sevens_apart(diff));
    }

    #[test]
    fn spacing_rejects_close_wrap() {
        // Gap across the wrap is 52 - 48 + 0 = 4.
        let diff = (1u64 << 0) | (1 << 10) | (1 << 20) | (1 << 48);
        assert!(!sevens_apart(diff));
    }

    #[test]
    fn spacing_is_trivially_true_for_few_bits() {
        assert!(sevens_apart(0));
        assert!(sevens_apart(1 << 17));
    }

    #[test]
    fn c8k_candidates_come_from_odd_high_positions() {
        // No position has both ODD and 7K set, so no candidate exists in
        // any suit and the solver must fail.
        let axes = PrimaryAxes {
            red: 0,
            cd: 0,
            hc: 0,
            odd: 0x5555555555555 & bracelet_core::SEQUENCE_MASK,
            c7k: 0xAAAAAAAAAAAAA & bracelet_core::SEQUENCE_MASK,
        };
        assert!(solve_c8k(&axes, false).is_none());
    }

    #[test]
    fn c4t_fails_without_enough_candidates() {
        // Everything is a low card: the odd-high bins stay empty.
        let axes = PrimaryAxes {
            red: 0,
            cd: 0,
            hc: 0,
            odd: 0x5555555555555 & bracelet_core::SEQUENCE_MASK,
            c7k: 0,
        };
        assert!(solve_c4t(&axes, 0).is_none());
    }
}
