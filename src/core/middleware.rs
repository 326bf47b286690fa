use crate::core::error::AppError;
use crate::features::auth::AdminGate;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        // Parse origins into HeaderValue
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            let response = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")
                .body(Body::from("Unauthorized"))
                .unwrap();

            Err(response)
        })
    }
}

/// Runs the admin gate against the request headers and, on success, makes
/// the resulting context available to handlers via request extensions.
pub async fn admin_auth_middleware(
    State(gate): State<Arc<AdminGate>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let ctx = gate.authorize(req.headers())?;

    tracing::debug!(subject = %ctx.subject, method = ?ctx.method, "admin request authorized");

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AdminAuthConfig;
    use axum::{routing::get, Router};
    use axum_test::TestServer;

    async fn ping() -> &'static str {
        "ok"
    }

    fn gated_router(static_token: Option<&str>) -> Router {
        let gate = Arc::new(AdminGate::new(&AdminAuthConfig {
            session_secret: "0123456789abcdef0123456789abcdef".to_string(),
            admin_token: static_token.map(String::from),
        }));

        Router::new()
            .route("/admin/ping", get(ping))
            .route_layer(axum::middleware::from_fn_with_state(
                gate,
                admin_auth_middleware,
            ))
    }

    #[tokio::test]
    async fn test_admin_route_rejects_anonymous_requests() {
        let server = TestServer::new(gated_router(Some("hub-secret"))).unwrap();

        let response = server.get("/admin/ping").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_route_accepts_static_token() {
        let server = TestServer::new(gated_router(Some("hub-secret"))).unwrap();

        let response = server
            .get("/admin/ping")
            .add_header("x-admin-token", "hub-secret")
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_admin_route_rejects_wrong_static_token() {
        let server = TestServer::new(gated_router(Some("hub-secret"))).unwrap();

        let response = server
            .get("/admin/ping")
            .add_header("x-admin-token", "guess")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
