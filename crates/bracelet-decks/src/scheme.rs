//! Value schemes: how the four value axes decode to card values.
//!
//! The 4-bit code of a position is `(odd << 3) | (x << 2) | (y << 1) | z`
//! where x, y, z are the three non-ODD value axes of the scheme. Ten of
//! the sixteen codes are reachable on a legal bundle; four of those stand
//! for an ambiguous pair of values resolved by the realizer.

use bracelet_core::predicates::{catalog, PredicateBits, ValuePredicate};

/// One ambiguous value pair. The realizer decides which of the pair's two
/// positions receives `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousPair {
    pub low: u8,
    pub high: u8,
}

/// Entry of the 16-way value-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCode {
    /// The code cannot occur on a legal bundle.
    None,
    /// A single concrete card value.
    Value(u8),
    /// Index into the scheme's pair table.
    Pair(usize),
}

/// A deck-building scheme.
#[derive(Debug)]
pub struct ValueScheme {
    pub name: &'static str,
    /// Display labels for the three non-ODD value axes, padded as they
    /// appear in reports. `x` maps to the 7K file slot, `y` to 8K, `z` to
    /// 4T.
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub z_label: &'static str,
    /// Indexed by the 4-bit value code.
    pub table: [CellCode; 16],
    /// The four ambiguous pairs, in enumeration-bit order.
    pub pairs: [AmbiguousPair; 4],
    /// Predicates true by construction on every deck this scheme builds.
    pub guaranteed: PredicateBits,
    /// Range predicates re-tested on every realization.
    pub tested: &'static [&'static ValuePredicate],
}

/// Axes 7K, 8K, and 4T; pairs A/3, 4/6, 8/10, and J/K.
pub const UMAKE: ValueScheme = ValueScheme {
    name: "umake",
    x_label: " 7K",
    y_label: " 8K",
    z_label: " 4T",
    table: [
        CellCode::Value(2),  // 0000
        CellCode::Pair(1),   // 0001  four or six
        CellCode::None,      // 0010
        CellCode::None,      // 0011
        CellCode::None,      // 0100
        CellCode::None,      // 0101
        CellCode::Value(12), // 0110
        CellCode::Pair(2),   // 0111  eight or ten
        CellCode::Pair(0),   // 1000  ace or three
        CellCode::Value(5),  // 1001
        CellCode::None,      // 1010
        CellCode::None,      // 1011
        CellCode::None,      // 1100
        CellCode::Value(7),  // 1101
        CellCode::Pair(3),   // 1110  jack or king
        CellCode::Value(9),  // 1111
    ],
    pairs: [
        AmbiguousPair { low: 1, high: 3 },
        AmbiguousPair { low: 4, high: 6 },
        AmbiguousPair { low: 8, high: 10 },
        AmbiguousPair { low: 11, high: 13 },
    ],
    guaranteed: PredicateBits(
        PredicateBits::A6.0
            | PredicateBits::A7.0
            | PredicateBits::C4T.0
            | PredicateBits::EV.0
            | PredicateBits::HD.0
            | PredicateBits::CD.0
            | PredicateBits::HC.0,
    ),
    tested: &[
        &catalog::C27,
        &catalog::C28,
        &catalog::C38,
        &catalog::C39,
        &catalog::C49,
        &catalog::C5T,
        &catalog::C5J,
        &catalog::C6J,
        &catalog::C6Q,
        &catalog::C7Q,
    ],
};

/// Axes 92, T2, and 6Q read from the 7K/8K/4T file slots; pairs A/K, 3/5,
/// 6/8, and 10/Q.
pub const UPLUS2: ValueScheme = ValueScheme {
    name: "uplus2",
    x_label: " 92",
    y_label: " T2",
    z_label: " 6Q",
    table: [
        CellCode::Value(4),  // 0000
        CellCode::Pair(2),   // 0001  six or eight
        CellCode::None,      // 0010
        CellCode::None,      // 0011
        CellCode::None,      // 0100
        CellCode::None,      // 0101
        CellCode::Value(2),  // 0110
        CellCode::Pair(3),   // 0111  ten or queen
        CellCode::Pair(1),   // 1000  three or five
        CellCode::Value(7),  // 1001
        CellCode::None,      // 1010
        CellCode::None,      // 1011
        CellCode::None,      // 1100
        CellCode::Value(9),  // 1101
        CellCode::Pair(0),   // 1110  ace or king
        CellCode::Value(11), // 1111
    ],
    pairs: [
        AmbiguousPair { low: 1, high: 13 },
        AmbiguousPair { low: 3, high: 5 },
        AmbiguousPair { low: 6, high: 8 },
        AmbiguousPair { low: 10, high: 12 },
    ],
    guaranteed: PredicateBits(
        PredicateBits::C38.0
            | PredicateBits::C39.0
            | PredicateBits::C6Q.0
            | PredicateBits::EV.0
            | PredicateBits::HD.0
            | PredicateBits::CD.0
            | PredicateBits::HC.0,
    ),
    tested: &[
        &catalog::A6,
        &catalog::A7,
        &catalog::C27,
        &catalog::C28,
        &catalog::C49,
        &catalog::C4T,
        &catalog::C5T,
        &catalog::C5J,
        &catalog::C6J,
        &catalog::C7Q,
    ],
};
