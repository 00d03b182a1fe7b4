//! Document-related domain types

use serde::{Deserialize, Serialize};

/// Metadata record for a file attached to, or attachable to, a case.
///
/// The binary content is a separate artifact fetched on demand by document
/// uuid; it is never cached alongside this object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NovaDocument {
    pub uuid: String,
    pub title: String,
    /// Sensitivity classification
    pub sensitivity: String,
    pub document_type: String,
    pub description: Option<String>,
    pub approved: bool,
    pub document_date: String,
    pub file_extension: String,
}
