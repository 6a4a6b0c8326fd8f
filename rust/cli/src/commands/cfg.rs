//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, file or environment) as pretty JSON.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "locale": {
//!     "value": "auto",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the configuration file or environment is
/// invalid, `CliError::Io` if writing fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "locale": {
            "value": config.locale,
            "source": sources.locale,
        },
        "font_path": {
            "value": config.font_path,
            "source": sources.font_path,
        },
        "asset_root": {
            "value": config.asset_root,
            "source": sources.asset_root,
        },
        "artwork_ext": {
            "value": config.artwork_ext,
            "source": sources.artwork_ext,
        },
        "default_count": {
            "value": config.default_count,
            "source": sources.default_count,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
