use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

/// Extension type carrying the verified token subject.
///
/// Inserted into request extensions by the auth gate; handlers that need the
/// caller's identity extract it with `Extension<AuthenticatedUser>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub subject: String,
}

/// Middleware that validates bearer tokens on protected routes.
///
/// Rejects with 401 before the wrapped handler runs; on success, injects
/// [`AuthenticatedUser`] and passes the request through. Verification is
/// read-only: no refresh, no sliding expiry.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&request)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        subject: claims.sub,
    });

    Ok(next.run(request).await)
}

/// Parse the `Authorization` header as a bearer scheme.
///
/// The scheme comparison is case-insensitive and malformed headers fail with
/// 401 rather than being sliced at a fixed offset.
fn extract_bearer_token(request: &Request) -> Result<&str, Response> {
    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let header = header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected: Bearer <token>"))?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(unauthorized("Missing bearer token"));
    }

    Ok(token)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
