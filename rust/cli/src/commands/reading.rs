//! One-shot reading: pick the given draw positions and print the result.

use std::io::Write;

use tarot_engine::errors::SessionError;
use tarot_engine::session::Session;

use super::resolve_settings;
use crate::artwork::FsArtworkLoader;
use crate::error::CliError;
use crate::formatters::format_result;
use crate::locale::{LocaleSetting, Strings};
use crate::ui;
use crate::validation::parse_positions;

/// Handle the reading command.
///
/// `positions` is a comma or space separated list of draw positions; its
/// length is the number of cards. Repeated positions print the duplicate
/// warning and fail with [`CliError::Session`].
pub fn handle_reading_command(
    positions: &str,
    seed: Option<u64>,
    locale: Option<LocaleSetting>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let values = parse_positions(positions).map_err(CliError::InvalidInput)?;
    let settings = resolve_settings(locale, seed, None)?;
    let strings = Strings::for_locale(settings.locale);

    let mut session = Session::new(
        settings.locale,
        Some(settings.seed),
        FsArtworkLoader::new(),
        settings.source,
    );
    session.set_card_count(values.len() as i64)?;
    session.set_all(&values)?;

    writeln!(
        out,
        "reading: seed={} locale={} positions={:?}",
        settings.seed,
        settings.locale.as_str(),
        values
    )?;
    match session.confirm() {
        Ok(cards) => {
            let missing = cards.iter().filter(|c| c.artwork.is_none()).count();
            write!(out, "{}", format_result(cards, settings.locale))?;
            if missing > 0 {
                ui::display_warning(
                    err,
                    &format!("{} of {} cards have no artwork", missing, values.len()),
                )?;
            }
        }
        Err(e) => {
            if let SessionError::DuplicateSelection { .. } = e {
                writeln!(err, "{}", strings.duplicate)?;
            }
            return Err(e.into());
        }
    }
    Ok(())
}
