//! Server configuration.
//!
//! Read from environment variables at startup:
//!
//! | Variable | Default |
//! |---|---|
//! | `NAVI_ADDR` | `127.0.0.1:8080` |
//! | `NAVI_DATA_HOST` | the fantasy-transit provider |
//! | `NAVI_FIXTURES` | unset (use the remote provider) |
//! | `NAVI_CACHE_TTL_SECS` | `300` |
//! | `NAVI_CACHE_CAPACITY` | `64` |
//! | `NAVI_STATIC_DIR` | `static` |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::network::{DEFAULT_BASE_URL, NetworkClientConfig};

/// Error returned for an environment variable that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Base URL of the network data provider.
    pub data_host: String,

    /// Serve worlds from this directory instead of the provider.
    pub fixtures_dir: Option<PathBuf>,

    /// How long built networks stay cached (seconds).
    pub cache_ttl_secs: u64,

    /// Maximum number of cached worlds.
    pub cache_capacity: u64,

    /// Directory of static assets.
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        Ok(Self {
            addr: parse_var("NAVI_ADDR", get("NAVI_ADDR"))?.unwrap_or(defaults.addr),
            data_host: get("NAVI_DATA_HOST").unwrap_or(defaults.data_host),
            fixtures_dir: get("NAVI_FIXTURES").map(PathBuf::from),
            cache_ttl_secs: parse_var("NAVI_CACHE_TTL_SECS", get("NAVI_CACHE_TTL_SECS"))?
                .unwrap_or(defaults.cache_ttl_secs),
            cache_capacity: parse_var("NAVI_CACHE_CAPACITY", get("NAVI_CACHE_CAPACITY"))?
                .unwrap_or(defaults.cache_capacity),
            static_dir: get("NAVI_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Cache settings derived from this configuration.
    pub fn cache(&self) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(self.cache_ttl_secs),
            max_capacity: self.cache_capacity,
        }
    }

    /// Network client settings derived from this configuration.
    pub fn network_client(&self) -> NetworkClientConfig {
        NetworkClientConfig::new().with_base_url(&self.data_host)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            data_host: DEFAULT_BASE_URL.to_string(),
            fixtures_dir: None,
            cache_ttl_secs: 300,
            cache_capacity: 64,
            static_dir: PathBuf::from("static"),
        }
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim().parse().map_err(|e: T::Err| ConfigError {
                var,
                value: v.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.data_host, DEFAULT_BASE_URL);
        assert_eq!(config.fixtures_dir, None);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.cache_capacity, 64);
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("NAVI_ADDR", "0.0.0.0:3000"),
            ("NAVI_DATA_HOST", "http://localhost:9000"),
            ("NAVI_FIXTURES", "data"),
            ("NAVI_CACHE_TTL_SECS", " 60 "),
            ("NAVI_CACHE_CAPACITY", "8"),
            ("NAVI_STATIC_DIR", "/srv/static"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.data_host, "http://localhost:9000");
        assert_eq!(config.fixtures_dir, Some(PathBuf::from("data")));
        assert_eq!(config.cache().ttl, Duration::from_secs(60));
        assert_eq!(config.cache().max_capacity, 8);
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.network_client().base_url, "http://localhost:9000");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("NAVI_FIXTURES", "  ")])).unwrap();
        assert_eq!(config.fixtures_dir, None);
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = ServerConfig::from_lookup(lookup(&[("NAVI_CACHE_TTL_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid value for NAVI_CACHE_TTL_SECS: \"soon\""));
    }

    #[test]
    fn rejects_bad_addr() {
        assert!(ServerConfig::from_lookup(lookup(&[("NAVI_ADDR", "localhost")])).is_err());
    }
}
