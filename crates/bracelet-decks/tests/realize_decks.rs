//! Integration tests for the realizer.
//!
//! Axis bundles are derived from a known deck ordering, so they are
//! structurally consistent (balanced suits, two positions per ambiguous
//! pair) even though they are not bracelet-valid. `realize_best` only
//! depends on the structure; validity of the inputs is the driver's
//! concern and is tested separately.

use bracelet_core::predicates::ValueSet;
use bracelet_core::{Card, Deck, Suit, DECK_SIZE};
use bracelet_decks::{
    process_candidates, realize_best, CandidateBlock, DeckRunOptions, UMAKE, UPLUS2,
};

fn ordered_deck() -> Deck {
    let mut cards = [Card::new(Suit::Spade, 1); DECK_SIZE];
    for (i, card) in cards.iter_mut().enumerate() {
        *card = Card::new(Suit::ALL[i / 13], (i % 13) as u8 + 1);
    }
    Deck::new(cards)
}

fn suit_indicator(deck: &Deck, suits: &[Suit]) -> u64 {
    let mut sequence = 0u64;
    for card in deck.cards() {
        sequence = (sequence << 1) | suits.contains(&card.suit) as u64;
    }
    sequence
}

/// Derives the axis bundle a search would have produced for this deck.
fn derive_block(deck: &Deck, x: ValueSet, y: ValueSet, z: ValueSet) -> CandidateBlock {
    let red = suit_indicator(deck, &[Suit::Heart, Suit::Diamond]);
    let cd = suit_indicator(deck, &[Suit::Club, Suit::Diamond]);
    let hc = suit_indicator(deck, &[Suit::Heart, Suit::Club]);
    CandidateBlock {
        red,
        cd,
        hc,
        odd: deck.value_indicator(ValueSet::of(&[1, 3, 5, 7, 9, 11, 13])),
        c7k: deck.value_indicator(x),
        c8k: deck.value_indicator(y),
        c4t: deck.value_indicator(z),
    }
}

fn umake_block(deck: &Deck) -> CandidateBlock {
    derive_block(
        deck,
        ValueSet::range(7, 13),
        ValueSet::range(8, 13),
        ValueSet::range(4, 10),
    )
}

fn uplus2_block(deck: &Deck) -> CandidateBlock {
    derive_block(
        deck,
        ValueSet::of(&[9, 10, 11, 12, 13, 1, 2]),
        ValueSet::of(&[10, 11, 12, 13, 1, 2]),
        ValueSet::range(6, 12),
    )
}

#[test]
fn umake_realization_builds_a_complete_deck() {
    let deck = ordered_deck();
    let block = umake_block(&deck);

    let realized = realize_best(&block, &UMAKE, false).unwrap();
    assert!(realized.deck.is_complete());
    assert!(realized.predicate_bits.contains(UMAKE.guaranteed));
    assert!(realized.major_sequence_count() >= 7);

    // Concrete positions are preserved: a five stays a five.
    for (position, card) in deck.cards().iter().enumerate() {
        if card.value == 5 {
            assert_eq!(realized.deck.card(position), *card);
        }
    }
}

#[test]
fn uplus2_realization_builds_a_complete_deck() {
    let deck = ordered_deck();
    let block = uplus2_block(&deck);

    let realized = realize_best(&block, &UPLUS2, true).unwrap();
    assert!(realized.deck.is_complete());
    assert!(realized.predicate_bits.contains(UPLUS2.guaranteed));
    assert!(realized.major_sequence_count() >= 7);

    // Ambiguous positions resolve within their pair: where the source
    // deck held an ace, the realization holds an ace or a king.
    for (position, card) in deck.cards().iter().enumerate() {
        if card.value == 1 {
            let value = realized.deck.card(position).value;
            assert!(value == 1 || value == 13, "got {value}");
            assert_eq!(realized.deck.card(position).suit, card.suit);
        }
    }
}

#[test]
fn realization_is_deterministic() {
    let block = umake_block(&ordered_deck());
    let first = realize_best(&block, &UMAKE, false).unwrap();
    let second = realize_best(&block, &UMAKE, false).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ambiguity_layout_errors_are_reported() {
    let deck = ordered_deck();
    let mut block = umake_block(&deck);
    // Forcing the ODD axis to zero moves ace/three codes (1000) to the
    // two code (0000): the ace-or-three pair disappears entirely.
    block.odd = 0;
    assert!(realize_best(&block, &UMAKE, false).is_err());
}

#[test]
fn corrupt_candidate_files_abort_processing() {
    // A structurally complete block whose sequences are not bracelet
    // valid: the driver must treat the file as corrupt.
    let block = umake_block(&ordered_deck());
    let mut text = String::new();
    for (label, sequence) in [
        (" 7K", block.c7k),
        (" 8K", block.c8k),
        (" 4T", block.c4t),
        ("ODD", block.odd),
        ("RED", block.red),
        (" CD", block.cd),
        (" HC", block.hc),
    ] {
        text.push_str(&format!(
            "{label} sequence:  {}\n",
            bracelet_core::format_bits(sequence, 52)
        ));
    }
    text.push('\n');

    let mut out = Vec::new();
    let result = process_candidates(
        text.as_bytes(),
        &UMAKE,
        &DeckRunOptions::default(),
        &mut out,
    );
    assert!(result.is_err());
}

#[test]
fn malformed_groups_are_skipped_not_fatal() {
    let text = "\
Found suit sequences.
RED sequence:  1010

";
    let mut out = Vec::new();
    let stats = process_candidates(
        text.as_bytes(),
        &UMAKE,
        &DeckRunOptions::default(),
        &mut out,
    )
    .unwrap();
    assert_eq!(stats.groups, 1);
    assert_eq!(stats.skipped_records, 1);
    assert_eq!(stats.realized, 0);
    assert!(out.is_empty());
}
