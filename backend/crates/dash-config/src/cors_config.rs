use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOWED_ORIGIN};

use http::HeaderValue;
use serde::Deserialize;

/// Cross-origin access is granted to exactly one origin
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: String::from(DEFAULT_ALLOWED_ORIGIN),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.allowed_origin.starts_with("http://")
            || self.allowed_origin.starts_with("https://"))
        {
            return Err(ConfigError::cors(format!(
                "cors.allowed_origin must start with http:// or https://, got '{}'",
                self.allowed_origin
            )));
        }

        if self.allowed_origin.ends_with('/') {
            return Err(ConfigError::cors(
                "cors.allowed_origin must not end with '/'",
            ));
        }

        self.origin_header().map(|_| ())
    }

    /// Allowed origin as a header value
    pub fn origin_header(&self) -> ConfigErrorResult<HeaderValue> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| {
            ConfigError::cors(format!(
                "cors.allowed_origin is not a valid header value: {}",
                e
            ))
        })
    }
}
