//! Claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims included in our backend-issued access tokens.
///
/// The email is the identity key; user records are looked up by it when a
/// route needs more than proof of possession.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
