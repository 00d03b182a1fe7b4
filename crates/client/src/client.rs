//! The Nova client facade
//!
//! One public operation per remote capability. Every operation asks for a
//! currently valid token (refreshing if near expiry), sends exactly one
//! request, and either maps the body or fails; no retry, no local recovery.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use nova_domain::{NovaCase, NovaConfig, NovaCredentials, NovaDocument, NovaError, Result};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::{BearerToken, TokenProvider, REFRESH_THRESHOLD_SECS};
use crate::requests::{
    CaseSearchQuery, CaseSearchRequest, DocumentFetchRequest, DocumentImportRequest,
    DocumentListRequest, API_VERSION_CASE, API_VERSION_CPR, PAGE_SIZE,
};
use crate::responses::{decode, CaseSearchResponse, DocumentListResponse};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Options for [`NovaClient::download_document_file`]
///
/// Checking a document out signals to Nova that it is being exclusively
/// edited; the optional comment is shown to other users of the system.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    pub checkout: bool,
    pub checkout_comment: Option<String>,
}

/// Client for the KMD Nova ESDH API
///
/// Construction eagerly performs the client-credentials exchange and fails if
/// it does not succeed; afterwards every operation transparently refreshes
/// the token when its expiry is within [`REFRESH_THRESHOLD_SECS`] seconds.
///
/// The token is shared mutable state scoped to this instance. It lives behind
/// a lock, but the client makes no exclusivity guarantee beyond that: callers
/// sharing one instance near expiry simply serialize on the refresh.
pub struct NovaClient {
    http: Client,
    config: NovaConfig,
    token_provider: TokenProvider,
    token: Mutex<BearerToken>,
}

impl NovaClient {
    /// Connect to Nova with the given configuration and credentials
    ///
    /// # Errors
    /// Returns [`NovaError::Auth`] if the initial token exchange fails.
    pub async fn connect(config: NovaConfig, credentials: NovaCredentials) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NovaError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let token_provider =
            TokenProvider::new(http.clone(), config.auth_token_url.clone(), credentials);
        let token = token_provider.obtain().await?;

        Ok(Self { http, config, token_provider, token: Mutex::new(token) })
    }

    /// Get a reference to the client configuration
    #[must_use]
    pub fn config(&self) -> &NovaConfig {
        &self.config
    }

    /// Expiry of the currently cached token
    pub async fn token_expires_at(&self) -> DateTime<Utc> {
        self.token.lock().await.expires_at()
    }

    /// Return the cached token, re-obtaining it first when near expiry.
    ///
    /// The lock is held across the refresh, so concurrent callers observe
    /// exactly one re-obtained token rather than racing their own.
    async fn valid_token(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if token.is_expiring(REFRESH_THRESHOLD_SECS) {
            debug!("bearer token near expiry, re-obtaining");
            *token = self.token_provider.obtain().await?;
        }
        Ok(token.access_token().to_string())
    }

    /// Get the street address of a citizen by their CPR number
    pub async fn get_address_by_cpr(&self, cpr: &str) -> Result<serde_json::Value> {
        let token = self.valid_token().await?;
        let url = format!("{}/api/Cpr/GetAddressByCpr", self.config.api_base_url);
        let transaction_id = Uuid::new_v4().to_string();
        debug!(%transaction_id, "looking up address by CPR");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("TransactionId", transaction_id.as_str()),
                ("Cpr", cpr),
                ("api-version", API_VERSION_CPR),
            ])
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Address lookup failed: {}", e)))?;

        decode(expect_success(response).await?).await
    }

    /// Search for cases by CPR number, case number and/or case title
    ///
    /// At least one filter must be set. Results are limited to the first
    /// [`PAGE_SIZE`] cases; a full page is logged as possibly truncated.
    ///
    /// # Errors
    /// Returns [`NovaError::Config`] without touching the network when the
    /// query is empty.
    pub async fn get_cases(&self, query: &CaseSearchQuery) -> Result<Vec<NovaCase>> {
        if query.is_empty() {
            return Err(NovaError::Config("No search terms given".to_string()));
        }

        let token = self.valid_token().await?;
        let url = format!("{}/api/Case/GetList", self.config.api_base_url);
        let payload = CaseSearchRequest::new(query);

        let response = self
            .http
            .put(&url)
            .query(&[("api-version", API_VERSION_CASE)])
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Case search failed: {}", e)))?;

        let wire: CaseSearchResponse = decode(expect_success(response).await?).await?;
        let cases = wire.into_cases();
        if cases.len() as u32 >= PAGE_SIZE {
            warn!(count = cases.len(), "case search returned a full page; result set may be truncated");
        }
        Ok(cases)
    }

    /// Get metadata for all documents attached to the given case
    ///
    /// The documents returned do not contain the actual files; use
    /// [`Self::download_document_file`] for those. Limited to the first
    /// [`PAGE_SIZE`] documents.
    pub async fn get_documents(&self, case_uuid: &str) -> Result<Vec<NovaDocument>> {
        let token = self.valid_token().await?;
        let url = format!("{}/api/Document/GetList", self.config.api_base_url);
        let payload = DocumentListRequest::new(case_uuid);

        let response = self
            .http
            .put(&url)
            .query(&[("api-version", API_VERSION_CASE)])
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Document list failed: {}", e)))?;

        let wire: DocumentListResponse = decode(expect_success(response).await?).await?;
        let documents = wire.into_documents();
        if documents.len() as u32 >= PAGE_SIZE {
            warn!(count = documents.len(), "document list returned a full page; result set may be truncated");
        }
        Ok(documents)
    }

    /// Upload a document file to Nova
    ///
    /// Generates a fresh document uuid, streams the file as a multipart body
    /// and returns that uuid so the caller can attach it to a case with
    /// [`Self::attach_document_to_case`].
    pub async fn upload_document(&self, document_path: &Path) -> Result<String> {
        let token = self.valid_token().await?;

        let transaction_id = Uuid::new_v4().to_string();
        let document_id = Uuid::new_v4().to_string();
        let url = format!(
            "{}/api/Document/UploadFile/{}/{}",
            self.config.api_base_url, transaction_id, document_id
        );

        let file_name = document_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                NovaError::Config(format!("Not a file path: {}", document_path.display()))
            })?;
        let mime_type =
            mime_guess::from_path(document_path).first_raw().unwrap_or(FALLBACK_MIME_TYPE);
        let bytes = tokio::fs::read(document_path).await.map_err(|e| {
            NovaError::Internal(format!("Failed to read {}: {}", document_path.display(), e))
        })?;

        debug!(%document_id, file = %file_name, mime = mime_type, "uploading document");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type)
            .map_err(|e| NovaError::Internal(format!("Invalid MIME type: {}", e)))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", API_VERSION_CASE)])
            .bearer_auth(&token)
            .header("accept", "*/*")
            .multipart(form)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Document upload failed: {}", e)))?;

        expect_success(response).await?;
        Ok(document_id)
    }

    /// Download the file attached to a Nova document
    ///
    /// Returns the raw bytes; persisting them is up to the caller.
    pub async fn download_document_file(
        &self,
        document_uuid: &str,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>> {
        let token = self.valid_token().await?;
        let url = format!("{}/api/Document/GetFile", self.config.api_base_url);
        let payload = DocumentFetchRequest::new(
            document_uuid,
            options.checkout,
            options.checkout_comment.clone(),
        );

        let response = self
            .http
            .put(&url)
            .query(&[("api-version", API_VERSION_CASE)])
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Document download failed: {}", e)))?;

        let response = expect_success(response).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| NovaError::Network(format!("Failed to read file body: {}", e)))?;
        Ok(bytes.to_vec())
    }

    /// Attach an already-uploaded document to a case
    ///
    /// `document.uuid` must be the id returned by [`Self::upload_document`].
    /// Access is granted to the security unit from the client configuration.
    pub async fn attach_document_to_case(
        &self,
        case_uuid: &str,
        document: &NovaDocument,
    ) -> Result<()> {
        let token = self.valid_token().await?;
        let url = format!("{}/api/Document/Import", self.config.api_base_url);
        let payload =
            DocumentImportRequest::new(case_uuid, document, &self.config.security_unit);

        let response = self
            .http
            .post(&url)
            .query(&[("api-version", API_VERSION_CASE)])
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NovaError::Network(format!("Document attach failed: {}", e)))?;

        expect_success(response).await?;
        Ok(())
    }
}

/// Turn a non-success status into [`NovaError::Api`], keeping status and body
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
    Err(NovaError::Api { status: status.as_u16(), body })
}
