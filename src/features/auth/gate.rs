use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::core::config::AdminAuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AdminAuthMethod, AdminContext, SessionClaims};

/// Header carrying the static shared-secret credential.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Role claim value required on session tokens.
const ADMIN_ROLE: &str = "admin";

/// The admin authorization predicate.
///
/// Two independent credential checks are accepted as equally valid: an
/// HS256-signed session token with an admin role claim, or the static
/// shared secret configured at startup. Both checks live behind this one
/// type so either path can be hardened or removed without touching callers.
pub struct AdminGate {
    decoding_key: DecodingKey,
    static_token: Option<String>,
}

impl AdminGate {
    pub fn new(config: &AdminAuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            static_token: config.admin_token.clone(),
        }
    }

    /// Decides whether the request headers carry an admin credential.
    pub fn authorize(&self, headers: &HeaderMap) -> Result<AdminContext> {
        if let Some(token) = Self::bearer_token(headers) {
            return self.check_session_token(token);
        }

        if let Some(presented) = headers.get(ADMIN_TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
            return self.check_static_token(presented);
        }

        Err(AppError::Unauthorized(
            "Admin access required".to_string(),
        ))
    }

    fn bearer_token(headers: &HeaderMap) -> Option<&str> {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
    }

    fn check_session_token(&self, token: &str) -> Result<AdminContext> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid session token: {}", e)))?;

        if data.claims.role != ADMIN_ROLE {
            return Err(AppError::Unauthorized(
                "Admin access required".to_string(),
            ));
        }

        Ok(AdminContext {
            subject: data.claims.sub,
            method: AdminAuthMethod::Session,
        })
    }

    fn check_static_token(&self, presented: &str) -> Result<AdminContext> {
        match &self.static_token {
            Some(expected) if presented == expected => Ok(AdminContext {
                subject: "shared-token".to_string(),
                method: AdminAuthMethod::StaticToken,
            }),
            _ => Err(AppError::Unauthorized(
                "Admin access required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn test_config(static_token: Option<&str>) -> AdminAuthConfig {
        AdminAuthConfig {
            session_secret: "0123456789abcdef0123456789abcdef".to_string(),
            admin_token: static_token.map(String::from),
        }
    }

    fn sign_token(secret: &str, role: &str) -> String {
        let claims = SessionClaims {
            sub: "staff-1".to_string(),
            role: role.to_string(),
            exp: 4102444800, // 2100-01-01
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn rejects_without_credentials() {
        let gate = AdminGate::new(&test_config(Some("hub-secret")));
        assert!(gate.authorize(&HeaderMap::new()).is_err());
    }

    #[test]
    fn accepts_static_token() {
        let gate = AdminGate::new(&test_config(Some("hub-secret")));
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("hub-secret"));

        let ctx = gate.authorize(&headers).unwrap();
        assert_eq!(ctx.method, AdminAuthMethod::StaticToken);
    }

    #[test]
    fn rejects_wrong_static_token() {
        let gate = AdminGate::new(&test_config(Some("hub-secret")));
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("guess"));

        assert!(gate.authorize(&headers).is_err());
    }

    #[test]
    fn static_path_disabled_when_unconfigured() {
        let gate = AdminGate::new(&test_config(None));
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_TOKEN_HEADER, HeaderValue::from_static("anything"));

        assert!(gate.authorize(&headers).is_err());
    }

    #[test]
    fn accepts_admin_session_token() {
        let config = test_config(None);
        let gate = AdminGate::new(&config);
        let token = sign_token(&config.session_secret, "admin");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let ctx = gate.authorize(&headers).unwrap();
        assert_eq!(ctx.method, AdminAuthMethod::Session);
        assert_eq!(ctx.subject, "staff-1");
    }

    #[test]
    fn rejects_non_admin_session_token() {
        let config = test_config(None);
        let gate = AdminGate::new(&config);
        let token = sign_token(&config.session_secret, "student");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        assert!(gate.authorize(&headers).is_err());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let gate = AdminGate::new(&test_config(None));
        let token = sign_token("ffffffffffffffffffffffffffffffff", "admin");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        assert!(gate.authorize(&headers).is_err());
    }
}
