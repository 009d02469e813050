//! Caller authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// JWT verification configuration for incoming bearer tokens
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HS256 secret used to verify tokens
    pub secret: String,

    /// Expected issuer claim
    #[serde(default)]
    pub issuer: Option<String>,

    /// Expected audience claim
    #[serde(default)]
    pub audience: Option<String>,

    /// Clock skew tolerance in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: None,
            audience: None,
            leeway_secs: default_leeway(),
        }
    }

    /// Load from `JWT_SECRET`, `JWT_ISSUER`, `JWT_AUDIENCE`, `JWT_LEEWAY_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        Ok(Self {
            secret,
            issuer: std::env::var("JWT_ISSUER").ok().filter(|v| !v.is_empty()),
            audience: std::env::var("JWT_AUDIENCE").ok().filter(|v| !v.is_empty()),
            leeway_secs: env_or("JWT_LEEWAY_SECS", default_leeway()),
        })
    }

    /// Require a specific issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Require a specific audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }
}

fn default_leeway() -> u64 {
    30
}
