//! Command handler modules for the tarot CLI.
//!
//! Each subcommand lives in its own file and exposes
//! `handle_<name>_command(...) -> Result<(), CliError>`. Output streams are
//! passed in so tests can drive handlers with in-memory buffers.

mod cfg;
mod deck;
mod draw;
mod reading;
mod shuffle;

pub use cfg::handle_cfg_command;
pub use deck::handle_deck_command;
pub use draw::handle_draw_command;
pub use reading::handle_reading_command;
pub use shuffle::handle_shuffle_command;

use tarot_engine::artwork::ArtworkSource;
use tarot_engine::cards::Locale;

use crate::config;
use crate::error::CliError;
use crate::locale::LocaleSetting;

/// Configuration merged with command-line flags.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub locale: Locale,
    pub seed: u64,
    pub count: i64,
    pub source: ArtworkSource,
}

/// Flags win over environment and file values. A missing seed is drawn
/// from entropy here so it can be printed and replayed.
pub(crate) fn resolve_settings(
    locale: Option<LocaleSetting>,
    seed: Option<u64>,
    count: Option<i64>,
) -> Result<Settings, CliError> {
    let cfg = config::load()?;
    let setting = locale.unwrap_or(cfg.locale);
    Ok(Settings {
        locale: setting.resolve(&cfg.font_path),
        seed: seed.or(cfg.seed).unwrap_or_else(rand::random),
        count: count.unwrap_or(cfg.default_count),
        source: ArtworkSource::new(cfg.asset_root, cfg.artwork_ext),
    })
}
