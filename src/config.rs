//! Process configuration.
//!
//! Every option can be given as a flag or through the environment.

use crate::bridge::client::DEFAULT_BRIDGE_TIMEOUT;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "building-search", version, about = "Building address search API")]
pub struct Config {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// GeoJSON FeatureCollection holding the buildings.
    #[arg(long, env = "DATA_FILE", default_value = "data/SF_Final.geojson")]
    pub data_file: PathBuf,

    /// Model generation endpoint of the bridge service.
    #[arg(long, env = "BRIDGE_URL", default_value = "http://127.0.0.1:8010/generate")]
    pub bridge_url: String,

    #[arg(long, env = "BRIDGE_TIMEOUT_SECS", default_value_t = DEFAULT_BRIDGE_TIMEOUT.as_secs())]
    pub bridge_timeout_secs: u64,

    /// Origins allowed to call the API from a browser.
    #[arg(
        long = "cors-origin",
        env = "CORS_ORIGINS",
        value_delimiter = ',',
        default_values = ["http://localhost:3000", "http://127.0.0.1:3000"]
    )]
    pub cors_origins: Vec<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bridge_timeout(&self) -> Duration {
        Duration::from_secs(self.bridge_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "building-search",
            "--bind",
            "0.0.0.0:9000",
            "--data-file",
            "/srv/buildings.geojson",
            "--bridge-timeout-secs",
            "2",
            "--cors-origin",
            "https://map.example.com,https://admin.example.com",
        ])
        .unwrap();

        assert_eq!(config.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file, PathBuf::from("/srv/buildings.geojson"));
        assert_eq!(config.bridge_timeout(), Duration::from_secs(2));
        assert_eq!(
            config.cors_origins,
            vec!["https://map.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        assert!(Config::try_parse_from(["building-search", "--bind", "not-an-addr"]).is_err());
    }
}
