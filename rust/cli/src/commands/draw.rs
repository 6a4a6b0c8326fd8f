//! # Draw Command
//!
//! Interactive drawing session. Reads one command per line from stdin,
//! applies it to a [`Session`] and redraws the affected part of the
//! display. Rejected commands print an error and the session continues.
//!
//! Commands:
//!
//! - `count N`: draw N cards (resets picks)
//! - `pick SLOT VALUE`: set slot SLOT (1-based) to draw position VALUE
//! - `set V1 V2 ...`: set every slot at once
//! - `confirm`: reveal the picks
//! - `reshuffle`: hide the result, reshuffle and reset picks
//! - `show`, `help`, `q`

use std::io::{BufRead, Write};

use tarot_engine::artwork::ArtworkLoader;
use tarot_engine::cards::Locale;
use tarot_engine::errors::SessionError;
use tarot_engine::session::Session;
use tracing::debug;

use super::resolve_settings;
use crate::artwork::FsArtworkLoader;
use crate::error::CliError;
use crate::formatters::{format_result, format_selection, format_session};
use crate::io_utils::read_stdin_line;
use crate::locale::{LocaleSetting, Strings};
use crate::ui;
use crate::validation::{ParseResult, SessionCommand, parse_session_command};

const HELP: &str = "\
Commands:
  count N            draw N cards (1-78), resets picks
  pick SLOT VALUE    set card SLOT (from 1) to draw position VALUE (0-77)
  set V1 V2 ...      set every card at once
  confirm            reveal the picked cards
  reshuffle          hide the result and reshuffle the deck
  show               print the current state
  help               this list
  q                  quit";

/// Handle the draw command: interactive session on `stdin`.
///
/// # Arguments
///
/// * `count` - Initial number of cards (default: config `default_count`)
/// * `seed` - RNG seed (default: config, then random)
/// * `locale` - Interface language (default: config)
/// * `out` - Session display
/// * `err` - Rejected commands and warnings
/// * `stdin` - One command per line; EOF ends the session
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_draw_command(Some(3), Some(7), None, &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_draw_command(
    count: Option<i64>,
    seed: Option<u64>,
    locale: Option<LocaleSetting>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let settings = resolve_settings(locale, seed, count)?;
    let strings = Strings::for_locale(settings.locale);

    writeln!(out, "{}", strings.title)?;
    writeln!(
        out,
        "draw: seed={} locale={}",
        settings.seed,
        settings.locale.as_str()
    )?;

    let mut session = Session::new(
        settings.locale,
        Some(settings.seed),
        FsArtworkLoader::new(),
        settings.source,
    );
    session.set_card_count(settings.count)?;
    write!(out, "{}", format_session(&session.snapshot()))?;

    loop {
        write!(out, "{}", strings.prompt)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        match parse_session_command(&line) {
            ParseResult::Command(cmd) => apply_command(&mut session, cmd, out, err)?,
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }

    let released = session.release_artwork();
    debug!(released, "draw session closed");
    writeln!(out)?;
    Ok(())
}

/// Apply one command. Session rejections are reported on `err`; only I/O
/// failures end the loop.
fn apply_command<L: ArtworkLoader>(
    session: &mut Session<L>,
    cmd: SessionCommand,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let locale = session.deck().locale();
    let strings = Strings::for_locale(locale);

    match cmd {
        SessionCommand::Count(n) => match session.set_card_count(n) {
            Ok(()) => write!(out, "{}", format_selection(&session.snapshot()))?,
            Err(e) => ui::write_error(err, &e.to_string())?,
        },
        SessionCommand::Pick { slot, value } => {
            let count = session.selection().count();
            if slot == 0 || slot > count {
                ui::write_error(
                    err,
                    &format!("Card {} does not exist (1-{})", slot, count),
                )?;
                return Ok(());
            }
            match session.set_position(slot - 1, value) {
                Ok(()) => write!(out, "{}", format_selection(&session.snapshot()))?,
                Err(e) => ui::write_error(err, &e.to_string())?,
            }
        }
        SessionCommand::Set(values) => match session.set_all(&values) {
            Ok(()) => write!(out, "{}", format_selection(&session.snapshot()))?,
            Err(e) => ui::write_error(err, &e.to_string())?,
        },
        SessionCommand::Confirm => write_confirmation(session, locale, out)?,
        SessionCommand::Reshuffle => {
            session.reshuffle();
            writeln!(out, "{}", strings.reshuffled)?;
            write!(out, "{}", format_selection(&session.snapshot()))?;
        }
        SessionCommand::Show => write!(out, "{}", format_session(&session.snapshot()))?,
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
    }
    Ok(())
}

fn write_confirmation<L: ArtworkLoader>(
    session: &mut Session<L>,
    locale: Locale,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let strings = Strings::for_locale(locale);
    match session.confirm() {
        Ok(cards) => write!(out, "{}", format_result(cards, locale))?,
        Err(SessionError::DuplicateSelection { positions }) => {
            writeln!(out, "{} {:?}", strings.duplicate, positions)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tarot_engine::artwork::{ArtworkSource, MemoryLoader};

    fn session() -> Session<MemoryLoader> {
        Session::new(
            Locale::En,
            Some(5),
            MemoryLoader::serving_all(300, 520),
            ArtworkSource::default(),
        )
    }

    #[test]
    fn pick_uses_one_based_slots() {
        let mut s = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        apply_command(&mut s, SessionCommand::Pick { slot: 1, value: 9 }, &mut out, &mut err)
            .unwrap();
        assert_eq!(s.selection().positions(), &[9]);
        assert!(err.is_empty());
    }

    #[test]
    fn pick_slot_zero_is_rejected_without_change() {
        let mut s = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        apply_command(&mut s, SessionCommand::Pick { slot: 0, value: 9 }, &mut out, &mut err)
            .unwrap();
        assert_eq!(s.selection().positions(), &[0]);
        assert!(String::from_utf8(err).unwrap().starts_with("Error: Card 0"));
    }

    #[test]
    fn duplicate_confirm_prints_warning_and_keeps_going() {
        let mut s = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        apply_command(&mut s, SessionCommand::Count(2), &mut out, &mut err).unwrap();
        apply_command(&mut s, SessionCommand::Confirm, &mut out, &mut err).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Duplicate cards, please check your choice. [0]"));
        assert!(s.revealed().is_empty());
    }

    #[test]
    fn reshuffle_releases_revealed_artwork() {
        let mut s = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        apply_command(&mut s, SessionCommand::Confirm, &mut out, &mut err).unwrap();
        assert_eq!(s.loader().live(), 1);
        apply_command(&mut s, SessionCommand::Reshuffle, &mut out, &mut err).unwrap();
        assert_eq!(s.loader().live(), 0);
        assert!(String::from_utf8(out).unwrap().contains("reshuffled"));
    }

    #[test]
    fn eof_ends_session() {
        let mut input = Cursor::new("show\n");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        handle_draw_command(
            Some(1),
            Some(1),
            Some(LocaleSetting::En),
            &mut out,
            &mut err,
            &mut input,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Tarot Picker\ndraw: seed=1 locale=en"));
    }
}
