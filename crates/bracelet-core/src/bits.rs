//! 52-bit cyclic sequence primitives.
//!
//! Sequences live in the low 52 bits of a `u64`. Bit `i` corresponds to
//! position `51 - i` of the deck, so the first character of the textual
//! form (position 0) is the most significant of the 52 bits.

/// Number of bits in a deck sequence.
pub const SEQUENCE_BITS: u32 = 52;

/// Mask selecting the low 52 bits.
pub const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Number of bits in a cyclic window.
pub const WINDOW_BITS: u32 = 6;

/// Mask selecting one window.
pub const WINDOW_MASK: u64 = (1 << WINDOW_BITS) - 1;

/// Returns true when all 52 cyclic 6-bit windows of `sequence` are distinct.
///
/// The low 5 bits are replicated above bit 51 so the 5 windows that straddle
/// the wrap are read with a plain shift. This is the hot inner loop of the
/// whole pipeline; it runs 52 constant-time steps and allocates nothing.
pub fn is_bracelet_valid(sequence: u64) -> bool {
    let mut seq = sequence | ((sequence & 0x1F) << SEQUENCE_BITS);
    let mut seen = 0u64;

    for _ in 0..SEQUENCE_BITS {
        let window_bit = 1u64 << (seq & WINDOW_MASK);
        if seen & window_bit != 0 {
            return false;
        }
        seen |= window_bit;
        seq >>= 1;
    }

    true
}

/// Returns true when any cyclic 6-bit window is all zeros or all ones.
pub fn has_long_uniform_run(sequence: u64) -> bool {
    let mut seq = sequence | (sequence << SEQUENCE_BITS);

    for _ in 0..SEQUENCE_BITS {
        let window = seq & WINDOW_MASK;
        if window == 0 || window == WINDOW_MASK {
            return true;
        }
        seq >>= 1;
    }

    false
}

/// Population count of the low 52 bits.
pub fn popcount(sequence: u64) -> u32 {
    (sequence & SEQUENCE_MASK).count_ones()
}

/// Rotates the low 52 bits left by `n` positions.
pub fn rotate_left_52(sequence: u64, n: u32) -> u64 {
    let n = n % SEQUENCE_BITS;
    if n == 0 {
        return sequence & SEQUENCE_MASK;
    }
    let seq = sequence & SEQUENCE_MASK;
    ((seq << n) | (seq >> (SEQUENCE_BITS - n))) & SEQUENCE_MASK
}

/// Bit-string parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitStringError {
    #[error("empty bit string")]
    Empty,
    #[error("invalid character {character:?} at column {column}")]
    InvalidCharacter { character: char, column: usize },
    #[error("expected {expected} binary digits, found {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Parses an MSB-first binary string of up to 64 digits.
///
/// Interior spaces and tabs are skipped; parsing stops at a newline. Any
/// other character is an error. Returns the value and the digit count.
pub fn parse_bit_string(text: &str) -> Result<(u64, usize), BitStringError> {
    let mut value = 0u64;
    let mut digits = 0usize;

    for (column, character) in text.chars().enumerate() {
        match character {
            ' ' | '\t' => continue,
            '\n' | '\r' => break,
            '0' | '1' => {
                if digits == 64 {
                    return Err(BitStringError::WrongLength {
                        expected: 64,
                        found: digits + 1,
                    });
                }
                value = (value << 1) | (character == '1') as u64;
                digits += 1;
            }
            _ => return Err(BitStringError::InvalidCharacter { character, column }),
        }
    }

    if digits == 0 {
        return Err(BitStringError::Empty);
    }

    Ok((value, digits))
}

/// Parses a 52-digit MSB-first binary string into a deck sequence.
pub fn parse_sequence(text: &str) -> Result<u64, BitStringError> {
    let (value, digits) = parse_bit_string(text)?;
    if digits != SEQUENCE_BITS as usize {
        return Err(BitStringError::WrongLength {
            expected: SEQUENCE_BITS as usize,
            found: digits,
        });
    }
    Ok(value)
}

/// Formats the low `length` bits MSB-first.
pub fn format_bits(sequence: u64, length: u32) -> String {
    let mut text = String::with_capacity(length as usize);
    for i in (0..length).rev() {
        text.push(if sequence & (1 << i) != 0 { '1' } else { '0' });
    }
    text
}

/// Formats a 52-bit sequence rotated so that position `top_index` of the
/// deck is printed first. Used when a deck is displayed cut to a different
/// top card; the rotation is cosmetic and does not change validity.
pub fn format_bits_rotated(sequence: u64, top_index: usize) -> String {
    let text = format_bits(sequence, SEQUENCE_BITS);
    let top_index = top_index % SEQUENCE_BITS as usize;
    let mut rotated = String::with_capacity(text.len());
    rotated.push_str(&text[top_index..]);
    rotated.push_str(&text[..top_index]);
    rotated
}
