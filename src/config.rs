// src/config.rs
//! Runtime configuration read from the environment (and `.env` via dotenvy)

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Which answer engine backs the `/ask` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerEngine {
    KnowledgeBase,
    Predefined,
}

impl AnswerEngine {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "knowledge_base" | "knowledge-base" | "kb" => Some(AnswerEngine::KnowledgeBase),
            "predefined" => Some(AnswerEngine::Predefined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub answer_engine: AnswerEngine,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::Pretty,
            answer_engine: AnswerEngine::KnowledgeBase,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests don't have to touch the process env
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?,
            None => defaults.port,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let answer_engine = match lookup("ANSWER_ENGINE") {
            Some(value) => AnswerEngine::parse(&value)
                .ok_or(ConfigError::InvalidValue { key: "ANSWER_ENGINE", value })?,
            None => defaults.answer_engine,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|bytes| *bytes > 0)
                .ok_or(ConfigError::InvalidValue { key: "MAX_BODY_BYTES", value })?,
            None => defaults.max_body_bytes,
        };

        Ok(Self {
            host,
            port,
            log_format,
            answer_engine,
            max_body_bytes,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                key: "HOST",
                value: self.host.clone(),
            })
    }
}
