use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tt";
const CONFIG_FILE_NAME: &str = "tt.conf";
const DATA_FILE_NAME: &str = "time.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_file: String,
    pub delimiter: String,
    pub output_dir: String,
    pub workday_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::data_file_path().to_string_lossy().to_string(),
            delimiter: ",".to_string(),
            output_dir: "report".to_string(),
            workday_hours: 8.0,
            font: None,
            opener: None,
        }
    }
}

impl Config {
    /// Per-user configuration directory (`~/.config/tt` on Linux)
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }

    /// Per-user data directory (`~/.local/share/tt` on Linux)
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn data_file_path() -> PathBuf {
        Self::data_dir().join(DATA_FILE_NAME)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Data file as a path, with `~/` expanded
    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_file)
    }

    /// Delimiter as the single byte the csv crate expects
    pub fn delimiter_byte(&self) -> AppResult<u8> {
        parse_delimiter(&self.delimiter)
    }
}

pub fn parse_delimiter(raw: &str) -> AppResult<u8> {
    let unescaped = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };

    match unescaped.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(AppError::InvalidDelimiter(raw.to_string())),
    }
}
