// src/config.rs
use std::fmt::Debug;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";
pub const CHAT_API_VERSION: &str = "2023-05-29";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Process-wide settings, read once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub region: String,
    pub model_id: String,
    pub iam_url: String,
    pub watsonx_base_url: String,
    pub upstream_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("model_id", &self.model_id)
            .field("iam_url", &self.iam_url)
            .field("watsonx_base_url", &self.watsonx_base_url)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

impl Config {
    /// Config with the production endpoints for `region` and default server settings.
    pub fn new(
        api_key: impl Into<String>,
        region: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Self {
        let region = region.into();
        Self {
            api_key: api_key.into(),
            watsonx_base_url: regional_base_url(&region),
            region,
            model_id: model_id.into(),
            iam_url: DEFAULT_IAM_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let mut config = Self::new(
            required("IBM_API_KEY")?,
            required("IBM_REGION")?,
            required("MODEL_ID")?,
        );

        if let Some(url) = get("IBM_IAM_URL") {
            config.iam_url = url;
        }
        if let Some(url) = get("WATSONX_BASE_URL") {
            config.watsonx_base_url = url.trim_end_matches('/').to_string();
        }
        config.upstream_timeout = Duration::from_secs(parse_or(
            "UPSTREAM_TIMEOUT_SECS",
            get("UPSTREAM_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        ));
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        config.port = parse_or("PORT", get("PORT"), DEFAULT_PORT);
        config.static_dir = get("STATIC_DIR").map(PathBuf::from);

        Ok(config)
    }

    pub fn chat_url(&self) -> String {
        format!(
            "{}/ml/v1/text/chat?version={}",
            self.watsonx_base_url, CHAT_API_VERSION
        )
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn regional_base_url(region: &str) -> String {
    format!("https://{region}.ml.cloud.ibm.com")
}

fn parse_or<T>(var: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        None => default,
    }
}
