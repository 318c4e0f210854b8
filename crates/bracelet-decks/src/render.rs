//! Report rendering for realized decks.

use std::fmt::Write as _;

use bracelet_core::{Deck, PredicateBits, DECK_SIZE};

/// Renders a deck eight cards per line, comma separated, rotated so that
/// position `top_index` prints first. Ends with a blank line.
pub fn render_deck(deck: &Deck, top_index: usize) -> String {
    let mut text = String::with_capacity(256);

    for i in 0..DECK_SIZE {
        let card = deck.card((i + top_index) % DECK_SIZE);
        let _ = write!(text, "{card}");
        if i != DECK_SIZE - 1 {
            text.push_str(", ");
        }
        if (i + 1) % 8 == 0 {
            text.push('\n');
        }
    }
    text.push_str("\n\n");

    text
}

/// Renders one `<name> sequence is supported.` line per set predicate,
/// followed by a blank line.
pub fn render_supported(bits: PredicateBits) -> String {
    let mut text = String::new();
    for name in bits.names() {
        let _ = writeln!(text, "{name} sequence is supported.");
    }
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracelet_core::{Card, Suit};

    fn ordered_deck() -> Deck {
        let mut cards = [Card::new(Suit::Spade, 1); DECK_SIZE];
        for (i, card) in cards.iter_mut().enumerate() {
            *card = Card::new(Suit::ALL[i / 13], (i % 13) as u8 + 1);
        }
        Deck::new(cards)
    }

    #[test]
    fn deck_renders_eight_per_line() {
        let text = render_deck(&ordered_deck(), 0);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("AS, 2S, 3S, 4S, 5S, 6S, 7S, 8S,"));
        // 52 cards over lines of 8: six full lines, a final four, and the
        // closing blank line.
        assert_eq!(lines.len(), 8);
        assert!(lines[6].ends_with("KD"));
        assert_eq!(lines[7], "");
        assert!(text.ends_with("\n\n"));
        assert_eq!(text.matches(", ").count(), 51);
    }

    #[test]
    fn rotation_moves_the_top_card() {
        let text = render_deck(&ordered_deck(), 13);
        assert!(text.starts_with("AC, "));
        // The last displayed card wraps back to the king of spades.
        assert!(text.trim_end().ends_with("KS"));
    }

    #[test]
    fn supported_lines_follow_catalog_order() {
        let bits = PredicateBits::HD | PredicateBits::A6;
        let text = render_supported(bits);
        assert_eq!(
            text,
            " A6 sequence is supported.\n HD sequence is supported.\n\n"
        );
    }
}
