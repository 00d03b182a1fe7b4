//! Case-related domain types

use serde::{Deserialize, Serialize};

/// A case as tracked in Nova ESDH.
///
/// Identified both by an internal unique id (`uuid`) and a human-readable
/// case number such as `S2023-61078`. The uuid is immutable once assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NovaCase {
    pub uuid: String,
    pub title: String,
    /// Human-readable case number, e.g. `S2023-61078`
    pub case_number: String,
    pub case_date: String,
    /// Active/inactive status code
    pub active_code: String,
    /// Progress state of the case workflow
    pub progress_state: String,
    /// Parties associated with the case, in the order the backend returned
    /// them. May be empty.
    pub case_parties: Vec<CaseParty>,
}

/// An individual or entity associated with a case in a specific role.
///
/// Owned exclusively by its [`NovaCase`]; only created while mapping a case
/// search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseParty {
    /// Identification scheme, e.g. `CprNummer`
    pub identification_type: String,
    pub identification: String,
    pub role: String,
    /// Display name; the backend omits it for protected parties
    pub name: Option<String>,
}
