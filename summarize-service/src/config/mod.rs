use config::{Config as Cfg, File};
use secrecy::Secret;
use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Public Gemini endpoint root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    #[error("Invalid configuration: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub base_url: String,
}

/// Values sourced from `configuration.*` and `APP__*` variables.
#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    log_format: LogFormat,
    #[serde(default = "default_gemini_base_url")]
    gemini_base_url: String,
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,summarize_service=debug".to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

impl Config {
    /// Load configuration once at startup. Fails when the API key is absent.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings: Settings = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        let api_key = api_key_from(env::var(API_KEY_ENV).ok())?;

        Ok(Config {
            port: settings.port,
            log_level: settings.log_level,
            log_format: settings.log_format,
            gemini: GeminiSettings {
                api_key,
                base_url: settings.gemini_base_url,
            },
        })
    }
}

fn api_key_from(value: Option<String>) -> Result<Secret<String>, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(Secret::new(key)),
        _ => Err(ConfigError::MissingApiKey(API_KEY_ENV)),
    }
}
