//! Bearer token value object and the client-credentials exchange

use chrono::{DateTime, Utc};
use nova_domain::{NovaCredentials, NovaError, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

/// A bearer credential with its absolute expiry timestamp
///
/// The expiry is computed as `now + expires_in` at the moment the token
/// response is received; clock skew is only compensated by the refresh
/// threshold, not here. Never persisted across process lifetimes.
#[derive(Debug, Clone)]
pub struct BearerToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

impl BearerToken {
    pub(crate) fn new(access_token: String, expires_in: i64) -> Self {
        Self { access_token, expires_at: Utc::now() + chrono::Duration::seconds(expires_in) }
    }

    /// The raw credential string for the `Authorization` header
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Absolute expiration timestamp (UTC)
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check if the token is expired or will expire within the given
    /// threshold
    #[must_use]
    pub fn is_expiring(&self, threshold_seconds: i64) -> bool {
        Utc::now() + chrono::Duration::seconds(threshold_seconds) >= self.expires_at
    }
}

/// Token response from the authorization server (RFC 6749)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Performs the client-credentials grant against the configured endpoint
///
/// The exchange is unauthenticated: the credentials are the payload, not a
/// prior token. A non-success status is fatal for the calling operation; no
/// retry is attempted.
#[derive(Debug, Clone)]
pub(crate) struct TokenProvider {
    http: Client,
    token_url: String,
    credentials: NovaCredentials,
}

impl TokenProvider {
    pub(crate) fn new(http: Client, token_url: String, credentials: NovaCredentials) -> Self {
        Self { http, token_url, credentials }
    }

    /// Obtain a fresh token from the auth service
    pub(crate) async fn obtain(&self) -> Result<BearerToken> {
        debug!(url = %self.token_url, "requesting bearer token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("grant_type", "client_credentials"),
                ("scope", "client"),
            ])
            .send()
            .await
            .map_err(|e| NovaError::Auth(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NovaError::Auth(format!(
                "Token request failed ({}): {}",
                status, error_text
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| NovaError::Auth(format!("Failed to parse token response: {}", e)))?;

        let token = BearerToken::new(token_response.access_token, token_response.expires_in);
        info!(expires_at = %token.expires_at(), "obtained bearer token");
        Ok(token)
    }
}
