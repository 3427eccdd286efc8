use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
    pub past_preview: usize,
    pub today: Option<NaiveDate>,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from("index.yaml"),
            output_dir: PathBuf::from("."),
            title: "Container Training".to_string(),
            past_preview: 5,
            today: None,
            debug: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_file_and_env(Path::new("site.toml"))
    }

    /// Defaults, then `config_file` when it exists, then `APP_*` variables.
    pub fn from_file_and_env(config_file: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("input", "index.yaml")?
            .set_default("output_dir", ".")?
            .set_default("title", "Container Training")?
            .set_default("past_preview", 5)?
            .set_default("debug", false)?
            .add_source(File::from(config_file).required(false))
            // APP_OUTPUT_DIR, APP_TODAY, ...
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
