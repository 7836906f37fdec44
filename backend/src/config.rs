//! Process configuration.
//!
//! Read once at start-up (after `.env` has been merged into the environment)
//! and handed to the rest of the backend inside `AppState`. Nothing else in
//! the crate reads environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::Url;
use shared::sheet::{default_sheet, SheetId};
use tracing::warn;

const GATEWAY_URL_VARS: [&str; 2] = ["TILLBOOK_GATEWAY_URL", "APPS_SCRIPT_URL"];
const DEFAULT_SHEET_VARS: [&str; 2] = ["TILLBOOK_DEFAULT_SHEET", "SHEET_NAME"];
const BIND_VAR: &str = "TILLBOOK_BIND";
const STATIC_DIR_VAR: &str = "TILLBOOK_STATIC_DIR";
const CORS_ORIGIN_VAR: &str = "TILLBOOK_CORS_ORIGIN";

const DEFAULT_BIND: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "frontend/dist";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a socket address: {source}")]
    InvalidBindAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var}={value:?} is not an absolute http(s) URL: {reason}")]
    InvalidGatewayUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Spreadsheet web-app endpoint. Optional at start-up; every gateway call
    /// fails with a configuration error while it is unset.
    pub gateway_url: Option<Url>,
    /// Sheet shown by the report and export views when the URL names none.
    pub default_sheet: SheetId,
    pub bind_addr: SocketAddr,
    /// Compiled frontend (`trunk build` output).
    pub static_dir: PathBuf,
    /// Extra origin allowed by CORS, for the Trunk dev server.
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_of = |names: &[&'static str]| {
            names.iter().find_map(|&name| {
                lookup(name)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .map(|v| (name, v))
            })
        };

        let gateway_url = first_of(&GATEWAY_URL_VARS)
            .map(|(var, value)| parse_gateway_url(var, value))
            .transpose()?;
        if gateway_url.is_none() {
            warn!(
                "{} is not set; sheet reads and saves will fail until it is configured",
                GATEWAY_URL_VARS[0]
            );
        }

        let configured_sheet = first_of(&DEFAULT_SHEET_VARS);
        let default_sheet = default_sheet(configured_sheet.as_ref().map(|(_, v)| v.as_str()));
        if let Some((var, value)) = &configured_sheet {
            if value != default_sheet.as_str() {
                warn!(
                    "{}={:?} is not a ddMMyy sheet id, using {}",
                    var, value, default_sheet
                );
            }
        }

        let bind_addr: SocketAddr = match first_of(&[BIND_VAR]) {
            Some((var, value)) => value
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress { var, value, source })?,
            None => DEFAULT_BIND
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddress {
                    var: BIND_VAR,
                    value: DEFAULT_BIND.to_string(),
                    source,
                })?,
        };

        let static_dir = first_of(&[STATIC_DIR_VAR])
            .map(|(_, v)| PathBuf::from(v))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let cors_origin = first_of(&[CORS_ORIGIN_VAR])
            .map(|(_, v)| v)
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            gateway_url,
            default_sheet,
            bind_addr,
            static_dir,
            cors_origin,
        })
    }
}

fn parse_gateway_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url),
        Ok(url) => Err(ConfigError::InvalidGatewayUrl {
            var,
            reason: format!("unsupported scheme {:?}", url.scheme()),
            value,
        }),
        Err(e) => Err(ConfigError::InvalidGatewayUrl {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}
