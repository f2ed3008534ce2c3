use crate::error::{Error, Result};
use crate::services::matching_service::MatchPolicy;
use axum::http::HeaderValue;
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub database_max_connections: u32,
    pub client_origin: Option<HeaderValue>,
    pub match_policy: MatchPolicy,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            database_max_connections: get_env_parse_or("DATABASE_MAX_CONNECTIONS", 10)?,
            client_origin: env::var("CLIENT_ORIGIN")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| parse_client_origin(&v))
                .transpose()?,
            match_policy: get_env_parse_or("MATCH_POLICY", MatchPolicy::default())?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

/// A set origin must be usable as an `Access-Control-Allow-Origin` value.
fn parse_client_origin(raw: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(raw.trim())
        .map_err(|e| Error::Config(format!("Invalid value for CLIENT_ORIGIN: {}", e)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
