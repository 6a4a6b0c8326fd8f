//! Card catalog listing.

use std::io::Write;

use tarot_engine::cards::Locale;
use tarot_engine::deck::Deck;

use crate::config;
use crate::error::CliError;
use crate::formatters::display_width;
use crate::locale::LocaleSetting;

/// Print every card as `index  primary-name  other-name`, the primary name
/// being the one in the resolved locale.
pub fn handle_deck_command(
    locale: Option<LocaleSetting>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let locale = locale.unwrap_or(cfg.locale).resolve(&cfg.font_path);
    let deck = Deck::build(locale);
    let other = match locale {
        Locale::En => Locale::Zh,
        Locale::Zh => Locale::En,
    };

    let width = deck
        .cards()
        .iter()
        .map(|c| display_width(c.name(locale)))
        .max()
        .unwrap_or(0);
    for card in deck.cards() {
        let primary = card.name(locale);
        let fill = width - display_width(primary);
        writeln!(
            out,
            "{:>2}  {}{}  {}",
            card.index,
            primary,
            " ".repeat(fill),
            card.name(other)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_cards_with_both_names() {
        let mut out = Vec::new();
        handle_deck_command(Some(LocaleSetting::En), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 78);
        assert!(lines[0].starts_with(" 0  The Fool"));
        assert!(lines[0].ends_with("愚者"));
    }
}
