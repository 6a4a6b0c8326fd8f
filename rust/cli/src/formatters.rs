//! Text rendering of a session for the terminal.
//!
//! Pure functions from engine state to strings. The result table puts
//! three cards per row inside a bordered grid; the artwork list below it
//! follows the same three-per-row layout and marks reversed artwork as
//! rotated.
//!
//! ```rust
//! use tarot_cli::formatters::display_width;
//!
//! assert_eq!(display_width("Death"), 5);
//! assert_eq!(display_width("死神"), 4);
//! assert_eq!(display_width("180°"), 4);
//! ```

use tarot_engine::cards::Locale;
use tarot_engine::reveal::RevealedCard;
use tarot_engine::session::{SessionStatus, SessionView};

use crate::locale::Strings;

/// Cards per row in the result table and artwork list.
pub const CARDS_PER_ROW: usize = 3;

/// Terminal columns taken by `s`; East Asian wide characters count as two.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match u32::from(c) {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// "The Fool -> Upright" / "愚者正位"
pub fn format_card_cell(card: &RevealedCard, locale: Locale) -> String {
    let strings = Strings::for_locale(locale);
    let name = card.identity.name(locale);
    let label = strings.orientation(card.orientation);
    match locale {
        Locale::En => format!("{} -> {}", name, label),
        Locale::Zh => format!("{}{}", name, label),
    }
}

/// Bordered grid of `cells`, [`CARDS_PER_ROW`] per row. The last row is
/// padded with empty cells.
pub fn format_table(cells: &[String]) -> String {
    if cells.is_empty() {
        return String::new();
    }
    let columns = CARDS_PER_ROW.min(cells.len());
    let mut widths = vec![0usize; columns];
    for (i, cell) in cells.iter().enumerate() {
        let col = i % columns;
        widths[col] = widths[col].max(display_width(cell));
    }

    let border = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in cells.chunks(columns) {
        out.push('|');
        for (col, w) in widths.iter().enumerate() {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(&pad(cell, *w));
            out.push_str(" |");
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// One entry of the artwork list.
pub fn format_artwork_entry(card: &RevealedCard, locale: Locale, strings: &Strings) -> String {
    let ordinal = strings.card_ordinal(card.slot + 1);
    match &card.artwork {
        Some(art) => {
            let mut s = format!(
                "[{}] {}x{} #{}",
                ordinal,
                art.width,
                art.height,
                art.handle.id()
            );
            if card.orientation.is_reversed() {
                s.push_str(&format!(" ({})", strings.rotated));
            }
            s
        }
        None => format!(
            "[{}] {} ({})",
            ordinal,
            card.identity.name(locale),
            strings.no_artwork
        ),
    }
}

/// Artwork list, [`CARDS_PER_ROW`] entries per line.
pub fn format_artwork_rows(cards: &[RevealedCard], locale: Locale) -> String {
    let strings = Strings::for_locale(locale);
    let mut out = String::new();
    for row in cards.chunks(CARDS_PER_ROW) {
        let line = row
            .iter()
            .map(|c| format_artwork_entry(c, locale, strings))
            .collect::<Vec<_>>()
            .join("   ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Result section: heading, card table, then the artwork rows.
pub fn format_result(cards: &[RevealedCard], locale: Locale) -> String {
    let strings = Strings::for_locale(locale);
    let cells = cards
        .iter()
        .map(|c| format_card_cell(c, locale))
        .collect::<Vec<_>>();
    let mut out = format!("{}\n", strings.result);
    out.push_str(&format_table(&cells));
    out.push('\n');
    out.push_str(&format_artwork_rows(cards, locale));
    out
}

/// Picker section: one line per slot with its position, plus the
/// duplicate warning when the last confirmation was rejected.
pub fn format_selection(view: &SessionView<'_>) -> String {
    let strings = Strings::for_locale(view.locale);
    let mut out = format!("{}\n", strings.picker);
    out.push_str(&format!("{}: {}\n", strings.count_label, view.positions.len()));
    out.push_str(&format!("{}\n", strings.slot_label));
    for (slot, pos) in view.positions.iter().enumerate() {
        out.push_str(&format!("  {}: {}\n", strings.card_ordinal(slot + 1), pos));
    }
    if let SessionStatus::Duplicate { positions } = view.status {
        out.push_str(&format!("{} {:?}\n", strings.duplicate, positions));
    }
    out
}

/// Full frame: picker, and the result while a generation is live. A
/// rejected re-confirm keeps the previous generation, so its warning and
/// result are shown together.
pub fn format_session(view: &SessionView<'_>) -> String {
    let mut out = format_selection(view);
    if !view.revealed.is_empty() {
        out.push('\n');
        out.push_str(&format_result(view.revealed, view.locale));
    }
    out
}
