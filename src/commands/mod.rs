mod build;
mod inspect;

pub use build::*;
pub use inspect::*;

use std::path::Path;

use anyhow::Context;

use crate::data::Config;

/// Reads the config named on the command line, or iconsheet.toml from the
/// current directory if there is one.
fn load_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    match config_path {
        Some(path) => Config::read_from_folder_or_file(path)
            .with_context(|| format!("couldn't load config from {}", path.display())),

        None => match Config::read_from_folder("") {
            Ok(config) => Ok(config),
            Err(err) if err.is_not_found() => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
            Err(err) => Err(err).context("couldn't load config"),
        },
    }
}
