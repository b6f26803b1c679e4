//! Environment-variable configuration for the Pokedex API.
//!
//! The service reads everything it needs from the environment:
//!
//! - `DATABASE_URL` -- `PostgreSQL` connection URL (required)
//! - `HOST` -- listen address (default `0.0.0.0`)
//! - `PORT` -- listen port (default `8080`)

/// Default listen address.
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// An environment variable held an unparseable value.
    #[error("invalid value for {var}: {value}")]
    InvalidVar {
        /// The variable's name.
        var: &'static str,
        /// The value that failed to parse.
        value: String,
    },
}

/// Complete API configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Listen address for the HTTP server.
    pub host: String,
    /// Listen port for the HTTP server.
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `DATABASE_URL` is not
    /// set, or [`ConfigError::InvalidVar`] if `PORT` is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Split out from [`ApiConfig::from_env`] so tests can inject
    /// values without mutating the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| String::from(DEFAULT_HOST));

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| (*v).to_owned())
        }
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            ApiConfig::from_lookup(env(&[("DATABASE_URL", "postgresql://localhost/pokedex")]))
                .unwrap();
        assert_eq!(config.database_url, "postgresql://localhost/pokedex");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn explicit_host_and_port_override_defaults() {
        let config = ApiConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgresql://localhost/pokedex"),
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = ApiConfig::from_lookup(env(&[]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar("DATABASE_URL"))
        ));
    }

    #[test]
    fn unparseable_port_is_an_error() {
        let result = ApiConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgresql://localhost/pokedex"),
            ("PORT", "not-a-port"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidVar { var: "PORT", .. })));
    }
}
