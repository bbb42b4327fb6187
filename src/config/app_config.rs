use serde::Deserialize;

use crate::infrastructure::llm::DEFAULT_COMPLETIONS_URL;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Token signing configuration
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Hex-encoded secp256k1 private scalar; a fresh key is generated when unset
    pub private_key_hex: Option<String>,
    /// Header `alg` that presented tokens must carry; blank disables the check
    pub pinned_algorithm: Option<String>,
}

/// Upstream LLM configuration
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            private_key_hex: None,
            pinned_algorithm: Some("ES256K".to_string()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_COMPLETIONS_URL.to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "private_key_hex",
                &self.private_key_hex.as_ref().map(|_| "[hidden]"),
            )
            .field("pinned_algorithm", &self.pinned_algorithm)
            .finish()
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[hidden]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Load layered configuration
    ///
    /// Order, lowest first: `OPENAI_API_URL`/`OPENAI_API_KEY`,
    /// `config/default`, `config/local`, then `APP__*` variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            std::env::var("OPENAI_API_URL").ok(),
            std::env::var("OPENAI_API_KEY").ok(),
            app_environment(),
        )
    }

    fn load_from(
        openai_api_url: Option<String>,
        openai_api_key: Option<String>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(url) = openai_api_url {
            builder = builder.set_default("llm.api_url", url)?;
        }
        if let Some(key) = openai_api_key {
            builder = builder.set_default("llm.api_key", key)?;
        }

        let config = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        config.try_deserialize()
    }
}

fn app_environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        app_environment().source(Some(vars))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert!(matches!(config.logging.format, LogFormat::Pretty));
        assert!(config.auth.private_key_hex.is_none());
        assert_eq!(config.auth.pinned_algorithm.as_deref(), Some("ES256K"));
        assert_eq!(config.llm.api_url, "https://api.openai.com/v1/completions");
        assert_eq!(config.llm.timeout_secs, 60);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let source = r#"
            [server]
            port = 9000

            [logging]
            format = "json"

            [auth]
            private_key_hex = "abcd"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.auth.private_key_hex.as_deref(), Some("abcd"));
        assert_eq!(config.auth.pinned_algorithm.as_deref(), Some("ES256K"));
        assert_eq!(config.llm.api_url, "https://api.openai.com/v1/completions");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let mut config = AppConfig::default();
        config.auth.private_key_hex = Some("deadbeef".to_string());
        config.llm.api_key = Some("sk-secret".to_string());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("deadbeef"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::load_from(
            Some("http://llm.local/v1".to_string()),
            Some("sk-fallback".to_string()),
            environment(&[
                ("APP__SERVER__PORT", "9100"),
                ("APP__AUTH__PRIVATE_KEY_HEX", "abcd"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.auth.private_key_hex.as_deref(), Some("abcd"));
        assert_eq!(config.llm.api_url, "http://llm.local/v1");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-fallback"));
    }

    #[test]
    fn test_invalid_setting_is_an_error() {
        let result = AppConfig::load_from(
            None,
            Some("sk-fallback".to_string()),
            environment(&[
                ("APP__SERVER__PORT", "not-a-port"),
                ("APP__AUTH__PRIVATE_KEY_HEX", "abcd"),
            ]),
        );

        let err = result.unwrap_err();
        assert!(err.to_string().contains("server.port"), "{}", err);
    }
}
