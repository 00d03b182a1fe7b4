//! Configuration structures for the Nova client
//!
//! Every recognized option is enumerated here with its default so call sites
//! never pass loose keyword-style parameters.

use serde::{Deserialize, Serialize};

/// Production Nova API host.
pub const DEFAULT_API_BASE_URL: &str = "https://cap-novaapi.kmd.dk";

/// Production token endpoint (client-credentials grant).
pub const DEFAULT_AUTH_TOKEN_URL: &str =
    "https://novaauth.kmd.dk/realms/NovaIntegration/protocol/openid-connect/token";

/// Fixed per-call timeout in seconds. Exceeding it is a transport failure.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client configuration for the Nova API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NovaConfig {
    /// Base URL of the Nova API host
    pub api_base_url: String,

    /// Full URL of the OpenID Connect token endpoint
    pub auth_token_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Security unit granted access to attached documents
    pub security_unit: SecurityUnit,
}

impl Default for NovaConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_token_url: DEFAULT_AUTH_TOKEN_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            security_unit: SecurityUnit::default(),
        }
    }
}

/// Identity of the security unit referenced when attaching documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SecurityUnit {
    pub id: i64,
    pub name: String,
}

impl Default for SecurityUnit {
    fn default() -> Self {
        Self { id: 818_485, name: "Borgerservice".to_string() }
    }
}

/// Client-credentials pair for the token endpoint
///
/// Kept separate from [`NovaConfig`] so configuration can be logged or
/// serialized without carrying the secret along.
#[derive(Debug, Clone)]
pub struct NovaCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl NovaCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production_hosts() {
        let config = NovaConfig::default();
        assert_eq!(config.api_base_url, "https://cap-novaapi.kmd.dk");
        assert!(config.auth_token_url.contains("NovaIntegration"));
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn default_security_unit_is_borgerservice() {
        let unit = SecurityUnit::default();
        assert_eq!(unit.id, 818_485);
        assert_eq!(unit.name, "Borgerservice");
    }
}
