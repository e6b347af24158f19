use serde::Deserialize;
use std::env;

/// Default bind address of the generation service
const DEFAULT_SPEECH_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub speech_api_url: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            speech_api_url: env::var("SPEECH_API_URL")
                .unwrap_or_else(|_| DEFAULT_SPEECH_API_URL.to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speech_api_url: DEFAULT_SPEECH_API_URL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
