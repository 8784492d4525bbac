use crate::core::error::AppError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
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

/// CORS policy for the single front-end origin.
///
/// Credentials are allowed, so origin, methods and headers must all be explicit.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, String> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|_| format!("Invalid CORS origin: {}", allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}

/// (method, path prefix) pairs reachable without authentication.
/// Anything not listed here is rejected.
const ALLOWED_ROUTES: &[(&str, &str)] = &[
    ("GET", "/api/"),
    ("HEAD", "/api/"),
    ("GET", "/swagger-ui"),
    ("GET", "/api-docs/"),
    ("GET", "/health"),
];

pub fn is_allowed(method: &Method, path: &str) -> bool {
    ALLOWED_ROUTES
        .iter()
        .any(|(allowed_method, prefix)| {
            *allowed_method == method.as_str() && path.starts_with(prefix)
        })
}

/// Read-only access policy: public GET on the listed prefixes, deny everything else
pub async fn read_only_guard(req: Request, next: Next) -> Result<Response, AppError> {
    if !is_allowed(req.method(), req.uri().path()) {
        tracing::warn!(
            "Denied request: method={}, path={}",
            req.method(),
            req.uri().path()
        );
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    Ok(next.run(req).await)
}

/// Basic auth in front of Swagger UI. Expects credentials in "username:password" form.
pub async fn basic_auth_middleware(
    State(valid_credentials): State<Arc<String>>,
    req: Request,
    next: Next,
) -> Response {
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Basic "))
        .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok())
        .is_some_and(|creds| creds == *valid_credentials);

    if authorized {
        return next.run(req).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
        "Unauthorized",
    )
        .into_response()
}
