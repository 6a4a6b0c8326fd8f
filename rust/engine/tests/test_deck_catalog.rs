use std::collections::HashSet;

use tarot_engine::cards::{Arcana, Locale, Rank, Suit, DECK_SIZE, MAJOR_COUNT};
use tarot_engine::deck::Deck;

#[test]
fn both_locales_build_78_cards() {
    for locale in [Locale::En, Locale::Zh] {
        let deck = Deck::build(locale);
        assert_eq!(deck.len(), DECK_SIZE, "locale {:?}", locale);
        assert_eq!(deck.locale(), locale);
    }
}

#[test]
fn index_refers_to_same_card_in_every_locale() {
    let en = Deck::build(Locale::En);
    let zh = Deck::build(Locale::Zh);
    for (a, b) in en.cards().iter().zip(zh.cards()) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.arcana, b.arcana);
        assert_eq!(a.name_en, b.name_en);
    }
    assert_ne!(en.display_name(13), zh.display_name(13));
}

#[test]
fn english_names_are_unique() {
    let deck = Deck::build(Locale::En);
    let names: HashSet<&str> = deck.cards().iter().map(|c| c.name_en.as_str()).collect();
    assert_eq!(names.len(), DECK_SIZE, "duplicate English name in catalog");
}

#[test]
fn minors_follow_suit_major_order() {
    let deck = Deck::build(Locale::En);
    let first_cups = deck.get(MAJOR_COUNT + 3 * 14).unwrap();
    assert_eq!(
        first_cups.arcana,
        Arcana::Minor {
            suit: Suit::Cups,
            rank: Rank::Ace
        }
    );
    assert_eq!(first_cups.name_en, "Ace of Cups");
    assert_eq!(first_cups.name_zh, "圣杯一");

    let knight = deck.get(MAJOR_COUNT + 11).unwrap();
    assert_eq!(knight.name_en, "Knight of Wands");
}

#[test]
fn majors_keep_traditional_numbering() {
    let deck = Deck::build(Locale::Zh);
    assert_eq!(deck.display_name(0), Some("愚者"));
    assert_eq!(deck.display_name(10), Some("命运之轮"));
    assert_eq!(deck.display_name(21), Some("世界"));
    assert_eq!(deck.get(5).map(|c| c.name_en.as_str()), Some("The Pope"));
}
