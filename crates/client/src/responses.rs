//! Wire schemas for Nova API responses and their mapping to domain types
//!
//! Required fields are plain struct fields, so a response missing one fails
//! deserialization and surfaces as [`NovaError::Mapping`] instead of a
//! half-built object. Optional fields (`name` on a party, `description` on a
//! document) map to `None`, never a fabricated default.

use nova_domain::{CaseParty, NovaCase, NovaDocument, NovaError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Read the body and decode it against the documented shape.
///
/// A body that cannot be read is a transport failure; a body that does not
/// match the schema is a contract mismatch with the remote system.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|e| NovaError::Network(format!("Failed to read response body: {}", e)))?;
    serde_json::from_str(&body)
        .map_err(|e| NovaError::Mapping(format!("Unexpected response shape: {}", e)))
}

/// PUT `/api/Case/GetList` response
#[derive(Debug, Deserialize)]
pub(crate) struct CaseSearchResponse {
    cases: Vec<WireCase>,
}

impl CaseSearchResponse {
    /// Map every wire case into a domain case, order preserved
    pub(crate) fn into_cases(self) -> Vec<NovaCase> {
        self.cases.into_iter().map(NovaCase::from).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCase {
    common: WireCaseCommon,
    case_attributes: WireCaseAttributes,
    state: WireCaseState,
    case_parties: Vec<WireCaseParty>,
}

#[derive(Debug, Deserialize)]
struct WireCaseCommon {
    uuid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCaseAttributes {
    title: String,
    user_friendly_case_number: String,
    case_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCaseState {
    active_code: String,
    progress_state: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCaseParty {
    identification_type: String,
    identification: String,
    party_role: String,
    name: Option<String>,
}

impl From<WireCase> for NovaCase {
    fn from(wire: WireCase) -> Self {
        Self {
            uuid: wire.common.uuid,
            title: wire.case_attributes.title,
            case_number: wire.case_attributes.user_friendly_case_number,
            case_date: wire.case_attributes.case_date,
            active_code: wire.state.active_code,
            progress_state: wire.state.progress_state,
            case_parties: wire.case_parties.into_iter().map(CaseParty::from).collect(),
        }
    }
}

impl From<WireCaseParty> for CaseParty {
    fn from(wire: WireCaseParty) -> Self {
        Self {
            identification_type: wire.identification_type,
            identification: wire.identification,
            role: wire.party_role,
            name: wire.name,
        }
    }
}

/// PUT `/api/Document/GetList` response
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentListResponse {
    documents: Vec<WireDocument>,
}

impl DocumentListResponse {
    pub(crate) fn into_documents(self) -> Vec<NovaDocument> {
        self.documents.into_iter().map(NovaDocument::from).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDocument {
    document_uuid: String,
    title: String,
    sensitivity: String,
    document_type: String,
    description: Option<String>,
    approved: bool,
    document_date: String,
    file_extension: String,
}

impl From<WireDocument> for NovaDocument {
    fn from(wire: WireDocument) -> Self {
        Self {
            uuid: wire.document_uuid,
            title: wire.title,
            sensitivity: wire.sensitivity,
            document_type: wire.document_type,
            description: wire.description,
            approved: wire.approved,
            document_date: wire.document_date,
            file_extension: wire.file_extension,
        }
    }
}
