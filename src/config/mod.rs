use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
    #[serde(default = "default_output")]
    pub output_file: String,
    #[serde(default = "default_title")]
    pub chart_title: String,
    #[serde(default)]
    pub color_seed: u64,
}

fn default_prefix() -> String {
    "Prod".to_string()
}
fn default_output() -> String {
    "gantt_chart.html".to_string()
}
fn default_title() -> String {
    "Activity Schedule".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_prefix: default_prefix(),
            output_file: default_output(),
            chart_title: default_title(),
            color_seed: 0,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftgantt")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftgantt")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftgantt.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file is reported and replaced by defaults for the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring malformed config file: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Could not read config file: {e}"));
                Self::default()
            }
        }
    }

    /// Write the default configuration file.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(&Config::default())
                .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        success(format!("Config file: {:?}", Self::config_file()));
        Ok(())
    }
}
