use serde::{Deserialize, Serialize};

/// Display locale for card names and interface strings.
/// `English` is the canonical locale: artwork file names are always derived
/// from English names regardless of which locale is displayed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (canonical)
    #[default]
    En,
    /// Simplified Chinese
    Zh,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }
}

/// One of the four minor arcana suits, in canonical deck order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    Wands,
    Pentacles,
    Swords,
    Cups,
}

impl Suit {
    pub fn name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, Suit::Wands) => "Wands",
            (Locale::En, Suit::Pentacles) => "Pentacles",
            (Locale::En, Suit::Swords) => "Swords",
            (Locale::En, Suit::Cups) => "Cups",
            (Locale::Zh, Suit::Wands) => "权杖",
            (Locale::Zh, Suit::Pentacles) => "星币",
            (Locale::Zh, Suit::Swords) => "宝剑",
            (Locale::Zh, Suit::Cups) => "圣杯",
        }
    }
}

/// Rank of a minor arcana card. The declaration order is the canonical deck
/// order (court cards are not sorted by precedence).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    King,
    Knight,
    Page,
    Queen,
}

impl Rank {
    pub fn name(&self, locale: Locale) -> &'static str {
        const EN: [&str; 14] = [
            "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
            "King", "Knight", "Page", "Queen",
        ];
        const ZH: [&str; 14] = [
            "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "国王", "骑士", "侍从",
            "王后",
        ];
        let i = *self as usize;
        match locale {
            Locale::En => EN[i],
            Locale::Zh => ZH[i],
        }
    }
}

pub const MAJOR_COUNT: usize = 22;
pub const MINOR_COUNT: usize = 56;
pub const DECK_SIZE: usize = MAJOR_COUNT + MINOR_COUNT;

const MAJOR_EN: [&str; MAJOR_COUNT] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Pope",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "The Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

const MAJOR_ZH: [&str; MAJOR_COUNT] = [
    "愚者",
    "魔术师",
    "女祭司",
    "女皇",
    "皇帝",
    "教皇",
    "恋人",
    "战车",
    "力量",
    "隐士",
    "命运之轮",
    "正义",
    "倒吊人",
    "死神",
    "节制",
    "恶魔",
    "塔",
    "星星",
    "月亮",
    "太阳",
    "审判",
    "世界",
];

/// The logical card behind a deck index, independent of locale.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// Major arcana, numbered 0 (The Fool) through 21 (The World)
    Major(u8),
    /// Minor arcana card of a suit and rank
    Minor { suit: Suit, rank: Rank },
}

impl Arcana {
    /// Card name in the given locale.
    ///
    /// ```
    /// use tarot_engine::cards::{Arcana, Locale, Rank, Suit};
    ///
    /// let card = Arcana::Minor { suit: Suit::Cups, rank: Rank::Queen };
    /// assert_eq!(card.name(Locale::En), "Queen of Cups");
    /// assert_eq!(card.name(Locale::Zh), "圣杯王后");
    /// assert_eq!(Arcana::Major(0).name(Locale::Zh), "愚者");
    /// ```
    pub fn name(&self, locale: Locale) -> String {
        match *self {
            Arcana::Major(n) => {
                let table = match locale {
                    Locale::En => &MAJOR_EN,
                    Locale::Zh => &MAJOR_ZH,
                };
                table[usize::from(n) % MAJOR_COUNT].to_string()
            }
            Arcana::Minor { suit, rank } => match locale {
                Locale::En => format!("{} of {}", rank.name(locale), suit.name(locale)),
                Locale::Zh => format!("{}{}", suit.name(locale), rank.name(locale)),
            },
        }
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Wands, Suit::Pentacles, Suit::Swords, Suit::Cups]
}

pub fn all_ranks() -> [Rank; 14] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::King,
        Rank::Knight,
        Rank::Page,
        Rank::Queen,
    ]
}

/// Every logical card in deck order: majors first, then minors suit-major.
pub fn full_arcana() -> Vec<Arcana> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for n in 0..MAJOR_COUNT as u8 {
        v.push(Arcana::Major(n));
    }
    for &suit in &all_suits() {
        for &rank in &all_ranks() {
            v.push(Arcana::Minor { suit, rank });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_arcana_has_78_cards_majors_first() {
        let cards = full_arcana();
        assert_eq!(cards.len(), DECK_SIZE);
        assert!(cards[..MAJOR_COUNT]
            .iter()
            .all(|c| matches!(c, Arcana::Major(_))));
        assert_eq!(
            cards[MAJOR_COUNT],
            Arcana::Minor {
                suit: Suit::Wands,
                rank: Rank::Ace
            }
        );
        assert_eq!(
            cards[DECK_SIZE - 1],
            Arcana::Minor {
                suit: Suit::Cups,
                rank: Rank::Queen
            }
        );
    }

    #[test]
    fn english_minor_names_use_rank_of_suit() {
        let card = Arcana::Minor {
            suit: Suit::Pentacles,
            rank: Rank::Knight,
        };
        assert_eq!(card.name(Locale::En), "Knight of Pentacles");
    }

    #[test]
    fn chinese_minor_names_put_suit_first() {
        let card = Arcana::Minor {
            suit: Suit::Swords,
            rank: Rank::Ten,
        };
        assert_eq!(card.name(Locale::Zh), "宝剑十");
    }

    #[test]
    fn major_names_are_unique_per_locale() {
        for locale in [Locale::En, Locale::Zh] {
            let mut names: Vec<String> = (0..MAJOR_COUNT as u8)
                .map(|n| Arcana::Major(n).name(locale))
                .collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), MAJOR_COUNT);
        }
    }
}
