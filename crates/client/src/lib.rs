//! # Nova Client
//!
//! HTTP client for the KMD Nova ESDH API. Read/write access to cases and
//! documents; a bearer token is obtained when the client is constructed and
//! refreshed automatically before it expires.
//!
//! Using api version 1.0. The api docs can be found at
//! <https://novaapi.kmd.dk/swagger/index.html>.
//!
//! ## Architecture
//! - `auth` — token lifecycle (client-credentials grant, expiry tracking)
//! - `requests` — one payload type per remote operation, each carrying a
//!   fresh transaction id
//! - `responses` — explicit wire schemas, validated at the mapping boundary
//! - `client` — the [`NovaClient`] facade composing the above

pub mod auth;
pub mod client;
pub mod requests;
pub mod responses;

// Re-export commonly used items
pub use auth::BearerToken;
pub use client::{DownloadOptions, NovaClient};
pub use nova_domain::{
    CaseParty, NovaCase, NovaConfig, NovaCredentials, NovaDocument, NovaError, Result,
    SecurityUnit,
};
pub use requests::CaseSearchQuery;
