use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub backend: BackendConfig,
}

/// Подключение к REST-эндпоинту бэкенда (PostgREST / Supabase)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_schema() -> String {
    "public".to_string()
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[backend]
url = "http://localhost:54321"
anon_key = ""
schema = "public"
"#;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(String),
    #[error("Backend URL is required")]
    MissingUrl,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
            schema: default_schema(),
        }
    }

    /// Базовый адрес REST API без завершающего `/`
    pub fn rest_base(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }
}

/// Разобрать конфигурацию из TOML
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig =
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.backend.url = config.backend.url.trim().trim_end_matches('/').to_string();
    if config.backend.url.is_empty() {
        return Err(ConfigError::MissingUrl);
    }
    Ok(config)
}

/// Встроенная конфигурация по умолчанию
pub fn default_config() -> anyhow::Result<AppConfig> {
    Ok(parse_config(DEFAULT_CONFIG)?)
}

impl AppConfig {
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.backend.url, "http://localhost:54321");
        assert_eq!(config.backend.schema, "public");
        assert_eq!(config.backend.rest_base(), "http://localhost:54321/rest/v1");
    }

    #[test]
    fn test_missing_url() {
        let text = "[backend]\nurl = \"  \"\n";
        assert_eq!(parse_config(text), Err(ConfigError::MissingUrl));
        assert!(matches!(parse_config("nonsense ="), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_toml_roundtrip_and_trailing_slash() {
        let config = AppConfig {
            backend: BackendConfig::new("https://demo.supabase.co/", "key"),
        };
        assert_eq!(config.backend.url, "https://demo.supabase.co");
        let text = config.to_toml().unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
