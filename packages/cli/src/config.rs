use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
    pub openai_api_key: String,
    pub openai_model: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "3001".to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_path = env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("taskhub.db"));

        let openai_api_key = env::var("OPENAI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

        let openai_model = env::var("OPENAI_MODEL").ok();

        Ok(Config {
            port,
            database_path,
            openai_api_key,
            openai_model,
        })
    }
}
