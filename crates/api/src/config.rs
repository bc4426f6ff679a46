//! Server settings read from the process environment.
//!
//! Every setting except `DATABASE_URL` and `JWT_SECRET` has a local
//! development default:
//!
//! | Env Var                | Default                 |
//! |------------------------|-------------------------|
//! | `DATABASE_URL`         | required                |
//! | `JWT_SECRET`           | required                |
//! | `JWT_EXPIRY_MINS`      | `480`                   |
//! | `HOST`                 | `0.0.0.0`               |
//! | `PORT`                 | `3000`                  |
//! | `CORS_ORIGINS`         | `http://localhost:5173` |
//! | `REQUEST_TIMEOUT_SECS` | `30`                    |

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;

use crate::auth::jwt::JwtConfig;

/// A setting that is missing or cannot be parsed. Startup stops on it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Front-end origins allowed to call the API with credentials.
    pub cors_origins: Vec<HeaderValue>,
    /// Requests running longer than this are answered with 408.
    pub request_timeout: Duration,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the settings from any name-to-value source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(&lookup);

        Ok(Self {
            host: env.parsed("HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: env.parsed("PORT", 3000)?,
            database_url: env.required("DATABASE_URL")?,
            cors_origins: parse_origins(
                &env.get("CORS_ORIGINS")
                    .unwrap_or_else(|| "http://localhost:5173".into()),
            )?,
            request_timeout: Duration::from_secs(env.parsed("REQUEST_TIMEOUT_SECS", 30)?),
            jwt: JwtConfig {
                secret: env.required("JWT_SECRET")?,
                expiry_mins: env.parsed("JWT_EXPIRY_MINS", JwtConfig::DEFAULT_EXPIRY_MINS)?,
            },
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

struct Env<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Env<'_, F> {
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.get(name).ok_or(ConfigError::Missing(name))
    }

    fn parsed<T: std::str::FromStr>(&self, name: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value }),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: origin.to_string(),
            })
        })
        .collect()
}
