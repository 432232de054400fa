//! CLI configuration — `~/.pantry/config.yaml` plus environment and flag
//! overrides.
//!
//! Resolution order for each setting: flag → environment → config file.
//! `resolve_at` takes an explicit home so tests can point it at a
//! `TempDir`; `resolve` derives home from `dirs::home_dir()`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const SERVER_URL_ENV: &str = "PANTRY_SERVER_URL";
pub const TOKEN_ENV: &str = "PANTRY_TOKEN";

/// On-disk config file shape. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub server_url: Option<String>,
    pub token: Option<String>,
}

/// Fully resolved settings for a push.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub token: Option<String>,
}

/// `<home>/.pantry/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".pantry").join("config.yaml")
}

/// Load the config file if present; a missing file is an empty config.
pub fn load_at(home: &Path) -> Result<FileConfig> {
    let path = config_path_at(home);
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_yaml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn resolve(server_flag: Option<String>, token_flag: Option<String>) -> Result<Settings> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    resolve_at(&home, server_flag, token_flag)
}

pub fn resolve_at(
    home: &Path,
    server_flag: Option<String>,
    token_flag: Option<String>,
) -> Result<Settings> {
    let file = load_at(home)?;
    let server_url = server_flag
        .or_else(|| std::env::var(SERVER_URL_ENV).ok())
        .or(file.server_url)
        .context(
            "no policy server configured; pass --server, set PANTRY_SERVER_URL, \
             or add server_url to ~/.pantry/config.yaml",
        )?;
    let token = token_flag
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .or(file.token);
    Ok(Settings { server_url, token })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
