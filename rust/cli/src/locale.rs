//! Locale selection and interface strings.
//!
//! The Chinese interface needs a CJK font. With `auto`, Chinese is used
//! only when the configured font file is present; otherwise English.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tarot_engine::cards::Locale;
use tarot_engine::reveal::Orientation;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSetting {
    /// Chinese if the font file exists, English otherwise
    #[default]
    Auto,
    En,
    Zh,
}

impl LocaleSetting {
    pub fn resolve(self, font_path: &Path) -> Locale {
        match self {
            LocaleSetting::En => Locale::En,
            LocaleSetting::Zh => Locale::Zh,
            LocaleSetting::Auto => {
                if font_path.is_file() {
                    Locale::Zh
                } else {
                    Locale::En
                }
            }
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(LocaleSetting::Auto),
            "en" => Some(LocaleSetting::En),
            "zh" => Some(LocaleSetting::Zh),
            _ => None,
        }
    }
}

/// Interface text for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub title: &'static str,
    pub count_label: &'static str,
    pub picker: &'static str,
    pub slot_label: &'static str,
    pub duplicate: &'static str,
    pub result: &'static str,
    pub upright: &'static str,
    pub reversed: &'static str,
    pub card: &'static str,
    pub no_artwork: &'static str,
    pub rotated: &'static str,
    pub reshuffled: &'static str,
    pub prompt: &'static str,
}

const EN: Strings = Strings {
    title: "Tarot Picker",
    count_label: "How many tarot cards? (1~78)",
    picker: "Card picker",
    slot_label: "Card index (0~77)",
    duplicate: "Duplicate cards, please check your choice.",
    result: "Result:",
    upright: "Upright",
    reversed: "Reversed",
    card: "card",
    no_artwork: "no image",
    rotated: "rotated 180°",
    reshuffled: "Done. The deck has been reshuffled.",
    prompt: "Enter command (count/pick/set/confirm/reshuffle/show/help/q): ",
};

const ZH: Strings = Strings {
    title: "塔罗选牌",
    count_label: "请选择要选择的牌的数目（1~78）",
    picker: "塔罗牌选择",
    slot_label: "塔罗牌序号选择（0~77）",
    duplicate: "存在重复牌，请重新选牌",
    result: "结果",
    upright: "正位",
    reversed: "逆位",
    card: "牌",
    no_artwork: "无图片",
    rotated: "倒置",
    reshuffled: "占卜完毕，已重新洗牌",
    prompt: "请输入命令（count/pick/set/confirm/reshuffle/show/help/q）：",
};

impl Strings {
    pub fn for_locale(locale: Locale) -> &'static Strings {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }

    pub fn orientation(&self, orientation: Orientation) -> &'static str {
        match orientation {
            Orientation::Upright => self.upright,
            Orientation::Reversed => self.reversed,
        }
    }

    /// "card 3" / "牌3"
    pub fn card_ordinal(&self, n: usize) -> String {
        if self.card.is_ascii() {
            format!("{} {}", self.card, n)
        } else {
            format!("{}{}", self.card, n)
        }
    }
}
