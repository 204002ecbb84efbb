// src/config.rs
use std::{env, net::SocketAddr, path::PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::services::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiConfig};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Command-line flags; each one also has an environment fallback.
#[derive(Parser, Debug, Default)]
#[command(name = "legal-advisor")]
#[command(about = "AI legal advisor and document drafter")]
pub struct Args {
    /// Verbose logging
    #[arg(long, env = "APP_DEBUG")]
    pub debug: bool,

    /// Listen address, e.g. 127.0.0.1:5000
    #[arg(long, value_name = "ADDR", env = "BIND_ADDR")]
    pub bind: Option<String>,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub public_dir: PathBuf,
    pub debug: bool,
}

impl Config {
    pub fn from_env(args: &Args) -> Result<Self, ConfigError> {
        let bind = args
            .bind
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: bind.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            google_api_key: env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            api_base: env_or("GEMINI_API_BASE", DEFAULT_API_BASE),
            bind_addr,
            public_dir: PathBuf::from(env_or("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
            debug: args.debug,
        })
    }

    /// `None` when no credential is configured.
    pub fn gemini(&self) -> Option<GeminiConfig> {
        self.google_api_key.as_ref().map(|key| GeminiConfig {
            api_key: key.clone(),
            model: self.model.clone(),
            api_base: self.api_base.clone(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
