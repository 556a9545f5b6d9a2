use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org/?format=json";
pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipvigilante.com/";
pub const DEFAULT_PASS_ENDPOINT: &str = "http://api.open-notify.org/iss-pass.json";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Upstream endpoints
    pub ip_endpoint: String,
    pub geo_endpoint: String,
    pub pass_endpoint: String,

    // Transport settings
    pub http_timeout_secs: u64,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            pass_endpoint: DEFAULT_PASS_ENDPOINT.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            debug: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ip_endpoint", &self.ip_endpoint),
            ("geo_endpoint", &self.geo_endpoint),
            ("pass_endpoint", &self.pass_endpoint),
        ] {
            parse_endpoint(name, value)?;
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn ip_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint("ip_endpoint", &self.ip_endpoint)
    }

    pub fn geo_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint("geo_endpoint", &self.geo_endpoint)
    }

    pub fn pass_url(&self) -> Result<Url, ConfigError> {
        parse_endpoint("pass_endpoint", &self.pass_endpoint)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_endpoint(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidEndpoint {
        name,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            name,
            reason: format!("unsupported scheme {:?}", other),
        }),
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid http(s) URL: {reason}")]
    InvalidEndpoint { name: &'static str, reason: String },
    #[error("http_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub fn load_config() -> anyhow::Result<Config> {
    let ip_endpoint = std::env::var("ISSPASS_IP_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_IP_ENDPOINT.to_string());

    let geo_endpoint = std::env::var("ISSPASS_GEO_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_GEO_ENDPOINT.to_string());

    let pass_endpoint = std::env::var("ISSPASS_PASS_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_PASS_ENDPOINT.to_string());

    let http_timeout_secs = std::env::var("ISSPASS_HTTP_TIMEOUT_SECS")
        .unwrap_or_else(|_| DEFAULT_HTTP_TIMEOUT_SECS.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    let debug = std::env::var("DEBUG").is_ok();

    let cfg = Config {
        ip_endpoint,
        geo_endpoint,
        pass_endpoint,
        http_timeout_secs,
        debug,
    };
    cfg.validate()?;

    Ok(cfg)
}
