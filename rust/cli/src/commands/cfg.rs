//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with where
//! it came from (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "players": {
//!     "value": 3,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "dice_per_player": {
            "value": config.dice_per_player,
            "source": sources.dice_per_player,
        },
        "wild_ones": {
            "value": config.wild_ones,
            "source": sources.wild_ones,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "ai_profiles": {
            "value": config.ai_profiles,
            "source": sources.ai_profiles,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
