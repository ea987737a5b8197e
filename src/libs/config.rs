//! Application configuration.
//!
//! Stored as pretty-printed JSON (`config.json`) in the data directory. Every
//! section is optional; a missing file or section means "use the defaults".
//! The API key for text generation is deliberately not part of this file, see
//! [`crate::libs::secret`].
//!
//! ```rust,no_run
//! use fieldlog::libs::config::Config;
//!
//! let config = Config::read()?;
//! let day = config.reminder_day();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::summary::DEFAULT_REMINDER_DAY;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REFINE_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_INSIGHTS_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A selectable section in the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub api_url: String,
    pub refine_model: String,
    pub insights_model: String,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refine_model: DEFAULT_REFINE_MODEL.to_string(),
            insights_model: DEFAULT_INSIGHTS_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeneratorConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "generator".to_string(),
            name: Message::ConfigModuleGenerator.to_string(),
        }
    }

    pub fn init(current: &Option<Self>) -> Result<Self> {
        let default = current.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleGenerator);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(default.api_url)
                .interact_text()?,
            refine_model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptRefineModel.to_string())
                .default(default.refine_model)
                .interact_text()?,
            insights_model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptInsightsModel.to_string())
                .default(default.insights_model)
                .interact_text()?,
            timeout_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTimeout.to_string())
                .default(default.timeout_secs)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Day of month from which the closing reminder is shown.
    pub day: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self { day: DEFAULT_REMINDER_DAY }
    }
}

impl ReminderConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "reminder".to_string(),
            name: Message::ConfigModuleReminder.to_string(),
        }
    }

    pub fn init(current: &Option<Self>) -> Result<Self> {
        let default = current.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReminder);

        let day: u32 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReminderDay.to_string())
            .default(default.day)
            .validate_with(|day: &u32| if (1..=31).contains(day) { Ok(()) } else { Err("expected a day between 1 and 31") })
            .interact_text()?;

        Ok(Self { day })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_in(&DataStorage::new())
    }

    pub fn read_in(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_in(&DataStorage::new())
    }

    pub fn save_in(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;

        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete_in(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;

        Ok(true)
    }

    /// Interactive setup: pick the sections to edit, then prompt for each field
    /// with the current value as default.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [GeneratorConfig::module(), ReminderConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "generator" => config.generator = Some(GeneratorConfig::init(&config.generator)?),
                "reminder" => config.reminder = Some(ReminderConfig::init(&config.reminder)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn generator(&self) -> GeneratorConfig {
        self.generator.clone().unwrap_or_default()
    }

    pub fn reminder_day(&self) -> u32 {
        self.reminder.as_ref().map_or(DEFAULT_REMINDER_DAY, |reminder| reminder.day)
    }
}
