//! Backend connection settings.
//!
//! The Login page stores the connection as TOML in `localStorage`;
//! without it the embedded development default is used.

use contracts::shared::config::{default_config, parse_config, AppConfig, BackendConfig};
use web_sys::window;

const CONFIG_KEY: &str = "cms_backend_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn fallback_config() -> AppConfig {
    default_config().unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig {
            backend: BackendConfig::new("http://localhost:54321", ""),
        }
    })
}

/// Stored connection, or the embedded default
pub fn load_config() -> AppConfig {
    let stored = get_local_storage().and_then(|s| s.get_item(CONFIG_KEY).ok().flatten());
    match stored {
        Some(text) => match parse_config(&text) {
            Ok(config) => {
                log::debug!("Using stored backend config: {}", config.backend.url);
                config
            }
            Err(e) => {
                log::warn!("Stored backend config ignored: {}", e);
                fallback_config()
            }
        },
        None => {
            log::debug!("Using embedded backend config");
            fallback_config()
        }
    }
}

pub fn backend() -> BackendConfig {
    load_config().backend
}

pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let text = config.to_toml().map_err(|e| e.to_string())?;
    let storage = get_local_storage().ok_or_else(|| "localStorage is not available".to_string())?;
    storage
        .set_item(CONFIG_KEY, &text)
        .map_err(|e| format!("Failed to save config: {:?}", e))
}

pub fn clear_config() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(CONFIG_KEY);
    }
}
