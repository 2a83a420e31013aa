mod manager;

pub use manager::{API_KEY_VAR, API_URL_VAR, ConfigManager, ENV_FILE, Settings};
