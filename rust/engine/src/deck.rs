use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cards::{full_arcana, Arcana, Locale, DECK_SIZE};

/// Immutable identity of one card in the catalog.
///
/// `index` is the join key between names, draw order and artwork path. Both
/// names are always present; which one is shown depends on the deck locale.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardIdentity {
    /// Position in the catalog (0..78)
    pub index: usize,
    /// Logical card
    pub arcana: Arcana,
    /// Canonical English name, also the artwork file stem
    pub name_en: String,
    /// Simplified Chinese name
    pub name_zh: String,
}

impl CardIdentity {
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.name_en,
            Locale::Zh => &self.name_zh,
        }
    }

    /// `<asset_root>/<English name>.<ext>`; never depends on the display locale.
    pub fn artwork_path(&self, asset_root: &Path, ext: &str) -> PathBuf {
        asset_root.join(format!("{}.{}", self.name_en, ext))
    }
}

/// The fixed 78-card catalog, built once per process.
///
/// ```
/// use tarot_engine::cards::Locale;
/// use tarot_engine::deck::Deck;
///
/// let en = Deck::build(Locale::En);
/// let zh = Deck::build(Locale::Zh);
/// assert_eq!(en.len(), 78);
/// assert_eq!(en.cards(), zh.cards());
/// assert_eq!(zh.display_name(0), Some("愚者"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Deck {
    locale: Locale,
    cards: Vec<CardIdentity>,
}

impl Deck {
    pub fn build(locale: Locale) -> Self {
        let cards = full_arcana()
            .into_iter()
            .enumerate()
            .map(|(index, arcana)| CardIdentity {
                index,
                arcana,
                name_en: arcana.name(Locale::En),
                name_zh: arcana.name(Locale::Zh),
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(cards.len(), DECK_SIZE);
        Self { locale, cards }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardIdentity> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[CardIdentity] {
        &self.cards
    }

    /// Name of the card at `index` in the deck's display locale.
    pub fn display_name(&self, index: usize) -> Option<&str> {
        self.get(index).map(|c| c.name(self.locale))
    }
}
