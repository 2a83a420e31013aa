use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the settings file, resolved against the working directory.
pub const ENV_FILE: &str = ".env";

/// Key holding the bearer token for the completion endpoint.
pub const API_KEY_VAR: &str = "CHAT_GPT_API_KEY";

/// Key holding the completion endpoint URL.
pub const API_URL_VAR: &str = "CHAT_GPT_API_URL";

/// API settings read from the `.env` file.
///
/// Both values are empty until a matching line assigns them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Bearer token sent in the `Authorization` header.
    pub api_key: String,
    /// URL the completion request is posted to.
    pub api_url: String,
}

impl Settings {
    /// Parses `KEY=VALUE` lines.
    ///
    /// Only lines with exactly one `=` are considered. Unknown keys are
    /// ignored and a later line overrides an earlier one.
    pub fn parse(contents: &str) -> Self {
        let mut settings = Self::default();

        for line in contents.lines() {
            let mut parts = line.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                continue;
            };

            match key.trim() {
                API_KEY_VAR => value.trim().clone_into(&mut settings.api_key),
                API_URL_VAR => value.trim().clone_into(&mut settings.api_url),
                _ => {}
            }
        }

        settings
    }

    /// Returns `true` if a non-empty API key was configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Loads settings from the `.env` file.
pub struct ConfigManager {
    env_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager reading `.env` from the working directory.
    pub fn new() -> Self {
        Self::with_path(ENV_FILE)
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            env_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    pub fn load(&self) -> Result<Settings> {
        let bytes = fs::read(&self.env_path).with_context(|| {
            format!("Failed to read settings file: {}", self.env_path.display())
        })?;

        // A stray non-UTF-8 byte only spoils its own line.
        Ok(Settings::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Loads settings, treating an unreadable file as "no configuration".
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
