//! Configuration management for the calculator.
//!
//! The configuration only holds user preferences: how many fields the form
//! starts with, whether the focus moves on after a completed field, and the
//! default output format. Entries and totals are never stored.
//!
//! ## Configuration Structure
//!
//! Each group of settings is an optional module, so a file may configure only
//! what the user cares about:
//!
//! - **Form Config**: initial number of fields and auto-advance
//! - **Output Config**: JSON output and the entries table
//!
//! ## Storage
//!
//! The configuration is stored as pretty-printed JSON in the platform data
//! directory resolved by [`DataStorage`]. A missing file yields the defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use calchora::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Form starts with {} fields", config.form_or_default().slots);
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::slots::DEFAULT_SLOTS;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A group of settings offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard
    pub key: String,
    /// Display name shown in the module list
    pub name: String,
}

/// Settings of the interactive form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormConfig {
    /// Number of empty fields the form starts with. Values below one are
    /// treated as one.
    pub slots: usize,

    /// Move on to the next field as soon as one holds four digits.
    pub auto_advance: bool,
}

/// Settings of how totals are printed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct OutputConfig {
    /// Print totals as JSON instead of a table.
    pub json: bool,

    /// Print the table of entries before the total.
    pub show_entries: bool,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<FormConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

impl Default for FormConfig {
    /// Three fields with auto-advance, like a fresh form.
    fn default() -> Self {
        FormConfig {
            slots: DEFAULT_SLOTS,
            auto_advance: true,
        }
    }
}

impl FormConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "form".to_string(),
            name: "Form".to_string(),
        }
    }

    pub fn init(config: &Option<FormConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleForm);
        Ok(FormConfig {
            slots: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptInitialSlots.to_string())
                .default(default.slots)
                .validate_with(|slots: &usize| if *slots >= 1 { Ok(()) } else { Err("at least one field is required") })
                .interact_text()?,
            auto_advance: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAutoAdvance.to_string())
                .default(default.auto_advance)
                .interact()?,
        })
    }
}

impl OutputConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "output".to_string(),
            name: "Output".to_string(),
        }
    }

    pub fn init(config: &Option<OutputConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleOutput);
        Ok(OutputConfig {
            json: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptJsonOutput.to_string())
                .default(default.json)
                .interact()?,
            show_entries: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptShowEntries.to_string())
                .default(default.show_entries)
                .interact()?,
        })
    }
}

impl Config {
    /// Reads the configuration, falling back to the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Reads the configuration for a command run.
    ///
    /// Read errors are reported as a warning and the defaults are used.
    pub fn read_or_default() -> Config {
        Self::read().unwrap_or_else(|error| {
            msg_warning!(Message::ConfigReadFailed(error.to_string()));
            Config::default()
        })
    }

    /// Writes the configuration as pretty-printed JSON, replacing any existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, starting from the current configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![FormConfig::module(), OutputConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "form" => config.form = Some(FormConfig::init(&config.form)?),
                "output" => config.output = Some(OutputConfig::init(&config.output)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn form_or_default(&self) -> FormConfig {
        self.form.clone().unwrap_or_default()
    }

    pub fn output_or_default(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }
}
