//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TASK_FILE: &str = "tasks.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the task file lives; defaults to `<app dir>/tasks.txt`
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Name used in the greeting
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            user_name: default_user_name(),
        }
    }
}

fn default_user_name() -> String {
    "Patrick".to_string()
}

impl Config {
    /// The task file path: the configured override, or the default inside
    /// the app dir.
    pub fn task_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(get_app_dir()?.join(DEFAULT_TASK_FILE)),
        }
    }
}

/// The app directory, `~/.sbo`. Created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    let dir = home.join(".sbo");
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create app dir {:?}", dir))?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

/// Load `config.toml` from the app dir; defaults when it does not exist.
/// A file that exists but cannot be read or parsed is an error, not a
/// silent fallback.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {:?}", path))?;
    let config = toml::from_str(&content).with_context(|| format!("invalid config {:?}", path))?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).with_context(|| format!("failed to write {:?}", path))?;
    Ok(())
}
