//! # Nova Domain
//!
//! Business domain types for the KMD Nova ESDH client.
//!
//! This crate contains:
//! - Domain data types (`NovaCase`, `CaseParty`, `NovaDocument`)
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Nova crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
