//! Server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Runtime settings for the web binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Tournaments not accessed for this long are removed.
    pub inactivity_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            inactivity_timeout: Duration::from_secs(12 * 3600),
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `INACTIVITY_TIMEOUT_HOURS`; unset or invalid values keep the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let inactivity_timeout = match lookup("INACTIVITY_TIMEOUT_HOURS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(hours) if hours > 0 => Duration::from_secs(hours * 3600),
                _ => {
                    log::warn!("Ignoring invalid INACTIVITY_TIMEOUT_HOURS {:?}", raw);
                    defaults.inactivity_timeout
                }
            },
            None => defaults.inactivity_timeout,
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            inactivity_timeout,
        }
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
