use std::{env, time::Duration};

use thiserror::Error;

use crate::contact::DEFAULT_CONTACT_ENDPOINT;

const DEFAULT_CONTACT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} must be an http(s) url, got {value:?}")]
    InvalidEndpoint { name: &'static str, value: String },
}

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_endpoint: String,
    pub contact_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            contact_timeout: Duration::from_secs(DEFAULT_CONTACT_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let contact_endpoint = match get("CONTACT_ENDPOINT") {
            Some(v) if v.starts_with("http://") || v.starts_with("https://") => v,
            Some(v) => {
                return Err(ConfigError::InvalidEndpoint {
                    name: "CONTACT_ENDPOINT",
                    value: v,
                })
            }
            None => defaults.contact_endpoint,
        };

        let contact_timeout = match get("CONTACT_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: "CONTACT_TIMEOUT_SECS",
                    value: v,
                })?,
            None => defaults.contact_timeout,
        };

        Ok(Self {
            contact_endpoint,
            contact_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_vars(vars(&[])).expect("defaults are valid");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_vars(vars(&[
            ("CONTACT_ENDPOINT", "https://forms.example.com/f/abc"),
            ("CONTACT_TIMEOUT_SECS", " 3 "),
        ]))
        .expect("overrides are valid");
        assert_eq!(config.contact_endpoint, "https://forms.example.com/f/abc");
        assert_eq!(config.contact_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values() {
        let err = SiteConfig::from_vars(vars(&[("CONTACT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

        let err = SiteConfig::from_vars(vars(&[("CONTACT_ENDPOINT", "formspree")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint { .. }));
    }
}
