// src/config.rs

//! Settings for the translator, read from a JSON file.
//!
//! Every field has a default, so a partial file (or no file at all) is fine.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "trunic-translate";
const CONFIG_FILE: &str = "config.json";
const DATABASE_FILE: &str = "words.bin";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Where the vocabulary lives. Defaults to the user's local data directory.
    pub database_path: Option<PathBuf>,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Draw the horizontal word line through each glyph.
    pub word_line: bool,
    /// Glyph scale on the page.
    pub scale: f32,
    /// Page width before words wrap to the next row, in pixels.
    pub wrap_width: f32,
    /// Space around the page and between rows, in pixels.
    pub margin: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_line: true,
            scale: 1.0,
            wrap_width: 600.0,
            margin: 10.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// `<config dir>/trunic-translate/config.json`, falling back to the
    /// working directory when the platform has no config directory.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    }

    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        let mut path = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(DATABASE_FILE);
        path
    }
}
