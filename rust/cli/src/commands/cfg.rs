//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! configuration settings with their sources (default, environment, or
//! configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "format": {
//!     "value": "text",
//!     "source": "default"
//!   },
//!   "prompt": {
//!     "value": true,
//!     "source": "env"
//!   }
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
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "format": {
            "value": config.format,
            "source": sources.format,
        },
        "prompt": {
            "value": config.prompt,
            "source": sources.prompt,
        }
    });
    let json_str = serde_json::to_string_pretty(&display)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
