//! Configuration management for atlas
//!
//! This crate provides functionality for managing the atlas configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use atlas_common::{
    constants::{CONFIG_DIR, DEFAULT_COUNTRIES_URL, DEFAULT_TIMEOUT},
    utils::io::file::{delete_path, read_file, write_file},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use std::path::PathBuf;
use tracing::{error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    override_usage = "atlas config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. Commands fall back to
/// these values when the matching flag is not given.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    /// The URL of the countries endpoint
    pub countries_url: String,

    /// The request timeout, in seconds
    pub timeout: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration { countries_url: DEFAULT_COUNTRIES_URL.to_string(), timeout: DEFAULT_TIMEOUT }
    }
}

/// Returns the path of the configuration file, `$HOME/.atlas/config.toml`.
#[allow(deprecated)]
fn config_path() -> Result<String, Error> {
    let mut home: PathBuf = home_dir().ok_or_else(|| {
        Error::Generic(
            "failed to get home directory. does your os support `std::env::home_dir()`?"
                .to_string(),
        )
    })?;
    home.push(CONFIG_DIR);
    home.push("config.toml");

    home.to_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))
}

impl Configuration {
    /// Returns the current configuration, creating the file with defaults if it does not exist.
    pub fn load() -> Result<Self, Error> {
        let path = config_path()?;

        if !std::path::Path::new(&path).exists() {
            let config = Configuration::default();
            config.save()?;
        }

        let contents = read_file(&path)
            .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        write_file(
            &config_path()?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))
    }

    /// Deletes the configuration file at `$HOME/.atlas/config.toml`.
    pub fn delete() -> Result<(), Error> {
        if !delete_path(&config_path()?) {
            return Err(Error::Generic("failed to delete config file".to_string()));
        }

        Ok(())
    }

    /// Update a single key/value pair in the configuration and write it to disk.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        match key {
            "countries_url" => {
                self.countries_url = value.to_string();
            }
            "timeout" => {
                self.timeout = value.parse::<u64>().ok().filter(|t| *t > 0).ok_or_else(|| {
                    Error::ParseError(format!(
                        "invalid value: \'{value}\' is not a valid timeout in seconds."
                    ))
                })?;
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        self.save()
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            error!("found key but no value to set. Please specify a value to set, use `atlas config --help` for more information.");
        }
    } else {
        println!("{:#?}", Configuration::load()?);
        info!("use `atlas config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}
