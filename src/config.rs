use crate::error::ConfigError;
use crate::listing::DEFAULT_PAGE_SIZE;
use std::{env, fmt::Display, str::FromStr, time::Duration};
use tracing::{info, warn};

const DEFAULT_SOURCE: &str = "properties.json";

/// Where property records come from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(String),
    Rest(String),
}

impl Source {
    /// http(s) URLs go to the REST store, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Source::Rest(raw.to_string())
        } else {
            Source::File(raw.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub api_key: Option<String>,
    pub page_size: usize,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let source = var("LISTINGS_SOURCE").unwrap_or_else(|| {
            info!("LISTINGS_SOURCE not set, using default: {DEFAULT_SOURCE}");
            DEFAULT_SOURCE.to_string()
        });

        let page_size: usize = try_load("LISTINGS_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "LISTINGS_PAGE_SIZE",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            source: Source::parse(&source),
            api_key: var("LISTINGS_API_KEY"),
            page_size,
            http_timeout: Duration::from_secs(try_load("LISTINGS_HTTP_TIMEOUT_SECS", 30u64)?),
        })
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_select_rest_store() {
        assert_eq!(
            Source::parse("https://db.example.com/rest/v1"),
            Source::Rest("https://db.example.com/rest/v1".to_string())
        );
        assert_eq!(
            Source::parse(" data/properties.json "),
            Source::File("data/properties.json".to_string())
        );
    }
}
