mod app_config;

pub use app_config::{AppConfig, AuthConfig, LlmConfig, LogFormat, LoggingConfig, ServerConfig};
