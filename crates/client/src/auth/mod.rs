//! Token lifecycle for the Nova API
//!
//! Handles the OAuth 2.0 client-credentials grant against the Nova auth
//! realm and tracks the resulting token's expiry. A token is an owned value
//! regenerated whole on refresh; callers never mutate it in place.

mod token;

pub use token::BearerToken;
pub(crate) use token::TokenProvider;

/// Refresh the token when its expiry is within this many seconds of now.
///
/// Guarantees every downstream caller observes a token valid for at least the
/// duration of one outgoing request under normal network conditions.
pub const REFRESH_THRESHOLD_SECS: i64 = 30;
