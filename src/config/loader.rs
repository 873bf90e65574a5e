//! Load settings from environment variables (after an optional `.env`).

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

/// Read settings from the real process environment.
pub fn from_env() -> Result<Settings, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Read settings through an arbitrary key lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let host = parse_or(&get, "HOST", Settings::default().host)?;
    let port = parse_or(&get, "PORT", DEFAULT_PORT)?;
    let max_body_bytes = parse_or(&get, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?;

    let endpoint = match get("MONGODB_URI") {
        Some(uri) => MongoEndpoint::Uri(uri),
        None => MongoEndpoint::Srv {
            host: get("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.into()),
            user: get("DB_USER"),
            password: get("DB_PASS"),
        },
    };

    let settings = Settings {
        host,
        port,
        max_body_bytes,
        mongo: MongoSettings {
            endpoint,
            database: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            toys_collection: get("TOYS_COLLECTION").unwrap_or_else(|| DEFAULT_TOYS_COLLECTION.into()),
            reviews_collection: get("REVIEWS_COLLECTION")
                .unwrap_or_else(|| DEFAULT_REVIEWS_COLLECTION.into()),
        },
    };
    validate(&settings)?;
    Ok(settings)
}

fn parse_or<G, T>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
        None => Ok(default),
    }
}
