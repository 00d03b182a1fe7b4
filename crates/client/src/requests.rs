//! Request payloads for the Nova API
//!
//! One payload type per remote operation. Every payload embeds a fresh v4
//! transaction id so the remote side can trace the request; a transaction id
//! is never reused across calls.
//!
//! Filters that are not set serialize as JSON `null`, which is what the
//! backend expects for "no filter on this field".

use chrono::Utc;
use nova_domain::{NovaDocument, SecurityUnit};
use serde::Serialize;
use uuid::Uuid;

/// Search and list requests always ask for the first page of this many rows.
/// Larger result sets are truncated by the backend; see
/// [`crate::client::NovaClient::get_cases`].
pub const PAGE_SIZE: u32 = 100;

pub(crate) const API_VERSION_CASE: &str = "1.0-Case";
pub(crate) const API_VERSION_CPR: &str = "1.0-Cpr";

/// Search filters for [`crate::client::NovaClient::get_cases`]
///
/// At least one filter must be set; the backend refuses unfiltered searches.
#[derive(Debug, Clone, Default)]
pub struct CaseSearchQuery {
    /// CPR number of a case party, e.g. `"0123456789"`
    pub cpr: Option<String>,
    /// Human-readable case number, e.g. `"S2022-12345"`
    pub case_number: Option<String>,
    /// Case title to search on
    pub case_title: Option<String>,
}

impl CaseSearchQuery {
    /// True when no filter is set at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cpr.is_none() && self.case_number.is_none() && self.case_title.is_none()
    }
}

/// `common` block shared by every JSON payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestCommon {
    transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    uuid: Option<String>,
}

impl RequestCommon {
    fn fresh() -> Self {
        Self { transaction_id: Uuid::new_v4().to_string(), uuid: None }
    }

    fn fresh_for(uuid: &str) -> Self {
        Self { transaction_id: Uuid::new_v4().to_string(), uuid: Some(uuid.to_string()) }
    }

    #[cfg(test)]
    pub(crate) fn transaction_id(&self) -> &str {
        &self.transaction_id
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    start_row: u32,
    number_of_rows: u32,
}

impl Default for Paging {
    fn default() -> Self {
        Self { start_row: 1, number_of_rows: PAGE_SIZE }
    }
}

/// PUT `/api/Case/GetList` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CaseSearchRequest {
    common: RequestCommon,
    paging: Paging,
    case_attributes: CaseAttributesFilter,
    case_party: CasePartyFilter,
    case_get_output: CaseGetOutput,
}

impl CaseSearchRequest {
    pub(crate) fn new(query: &CaseSearchQuery) -> Self {
        Self {
            common: RequestCommon::fresh(),
            paging: Paging::default(),
            case_attributes: CaseAttributesFilter {
                user_friendly_case_number: query.case_number.clone(),
                title: query.case_title.clone(),
            },
            case_party: CasePartyFilter {
                identification_type: "CprNummer",
                identification: query.cpr.clone(),
            },
            case_get_output: CaseGetOutput::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn transaction_id(&self) -> &str {
        self.common.transaction_id()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseAttributesFilter {
    user_friendly_case_number: Option<String>,
    title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CasePartyFilter {
    identification_type: &'static str,
    identification: Option<String>,
}

/// Fixed projection: the fields the mapper relies on, nothing more
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseGetOutput {
    number_of_secondary_parties: bool,
    case_party: CasePartyOutput,
    case_attributes: CaseAttributesOutput,
    state: StateOutput,
}

impl Default for CaseGetOutput {
    fn default() -> Self {
        Self {
            number_of_secondary_parties: true,
            case_party: CasePartyOutput {
                identification_type: true,
                identification: true,
                party_role: true,
                name: true,
            },
            case_attributes: CaseAttributesOutput {
                title: true,
                user_friendly_case_number: true,
                case_date: true,
            },
            state: StateOutput { active_code: true, progress_state: true },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CasePartyOutput {
    identification_type: bool,
    identification: bool,
    party_role: bool,
    name: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CaseAttributesOutput {
    title: bool,
    user_friendly_case_number: bool,
    case_date: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StateOutput {
    active_code: bool,
    progress_state: bool,
}

/// PUT `/api/Document/GetList` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentListRequest {
    common: RequestCommon,
    paging: Paging,
    get_output: DocumentGetOutput,
    case_uuid: String,
}

impl DocumentListRequest {
    pub(crate) fn new(case_uuid: &str) -> Self {
        Self {
            common: RequestCommon::fresh(),
            paging: Paging::default(),
            get_output: DocumentGetOutput::default(),
            case_uuid: case_uuid.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentGetOutput {
    title: bool,
    sensitivity: bool,
    document_type: bool,
    description: bool,
    approved: bool,
    document_date: bool,
    file_extension: bool,
    responsible_department: bool,
    security_unit: bool,
}

impl Default for DocumentGetOutput {
    fn default() -> Self {
        Self {
            title: true,
            sensitivity: true,
            document_type: true,
            description: true,
            approved: true,
            document_date: true,
            file_extension: true,
            responsible_department: true,
            security_unit: true,
        }
    }
}

/// PUT `/api/Document/GetFile` body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentFetchRequest {
    common: RequestCommon,
    check_out_document: bool,
    check_out_comment: Option<String>,
}

impl DocumentFetchRequest {
    pub(crate) fn new(document_uuid: &str, checkout: bool, comment: Option<String>) -> Self {
        Self {
            common: RequestCommon::fresh_for(document_uuid),
            check_out_document: checkout,
            check_out_comment: comment,
        }
    }
}

/// POST `/api/Document/Import` body
///
/// The document date sent is always the attach-time timestamp, not the
/// document's original date; the backend treats import time as the document
/// date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentImportRequest {
    common: RequestCommon,
    case_uuid: String,
    title: String,
    sensitivity: String,
    document_date: String,
    document_type: String,
    description: Option<String>,
    security_unit: SecurityUnitBody,
    approved: bool,
    access_to_documents: bool,
}

impl DocumentImportRequest {
    pub(crate) fn new(case_uuid: &str, document: &NovaDocument, unit: &SecurityUnit) -> Self {
        Self {
            common: RequestCommon::fresh_for(&document.uuid),
            case_uuid: case_uuid.to_string(),
            title: document.title.clone(),
            sensitivity: document.sensitivity.clone(),
            document_date: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            document_type: document.document_type.clone(),
            description: document.description.clone(),
            security_unit: SecurityUnitBody {
                los_identity: LosIdentity {
                    administrative_unit_id: unit.id,
                    full_name: unit.name.clone(),
                },
            },
            approved: document.approved,
            access_to_documents: true,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SecurityUnitBody {
    los_identity: LosIdentity,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LosIdentity {
    administrative_unit_id: i64,
    full_name: String,
}
