use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

pub const DATA_DIR_ENV: &str = "STARLENS_DATA_DIR";
pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\starlens")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/starlens")
    }
}

/// Optional overrides read from `config.json` in the data directory.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    database: Option<PathBuf>,
    log_file: Option<PathBuf>,
    search_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    pub search_url: String,
}

impl Config {
    /// Resolves the data directory from the environment, then applies the
    /// config file if there is one.
    pub fn load() -> AppResult<Self> {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        Self::from_dir(&data_dir)
    }

    pub fn from_dir(data_dir: &Path) -> AppResult<Self> {
        let file_path = data_dir.join(CONFIG_FILE);
        let file = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str::<ConfigFile>(&content)?
        } else {
            ConfigFile::default()
        };

        // Relative paths in the file are relative to the data directory.
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { data_dir.join(p) };

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            db_path: file
                .database
                .map(resolve)
                .unwrap_or_else(|| data_dir.join("astronomy_app.db")),
            log_path: file
                .log_file
                .map(resolve)
                .unwrap_or_else(|| data_dir.join("starlens.log")),
            search_url: file
                .search_url
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        })
    }
}
