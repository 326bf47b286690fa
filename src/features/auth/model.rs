use serde::{Deserialize, Serialize};

/// How a request satisfied the admin gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAuthMethod {
    /// Bearer session token carrying an admin role claim
    Session,
    /// Static X-Admin-Token shared secret
    StaticToken,
}

/// Request-scoped admin authorization context.
///
/// Produced by `AdminGate::authorize` and inserted into request extensions
/// by the admin middleware; handlers receive it through the
/// `FromRequestParts` extractor in `core::extractor`.
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// Subject of the session token, or "shared-token" for the static path
    pub subject: String,
    pub method: AdminAuthMethod,
}

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}
