// SPDX-FileCopyrightText: Biyebari Contributors
//
// SPDX-License-Identifier: MIT

//! Handles the application settings via a config file and environment variables.
//!
//! See [`shared::settings`] for the settings types and the environment
//! override rules.

use crate::cli::Args;
use config::ConfigError;
use std::path::Path;
use std::sync::Arc;

pub use shared::settings::*;

/// Reload the settings from the `config_path` & the environment
///
/// The stored settings are swapped wholesale. The database pool, bind address
/// and TLS context keep running on their startup configuration until the
/// process is restarted.
pub(crate) fn reload_settings(
    shared_settings: SharedSettings,
    config_path: &Path,
) -> Result<(), ConfigError> {
    let new_settings = Settings::load(config_path)?;

    shared_settings.store(Arc::new(new_settings));

    Ok(())
}

/// Loads settings from program arguments and config file
pub fn load_settings(args: &Args) -> Result<Settings, ConfigError> {
    Settings::load(&args.config)
}

#[cfg(test)]
mod test {
    use super::Settings;
    use config::ConfigError;
    use std::path::Path;

    #[test]
    fn example_toml() -> Result<(), ConfigError> {
        Settings::load(Path::new("../../extra/example.toml"))?;

        Ok(())
    }
}
