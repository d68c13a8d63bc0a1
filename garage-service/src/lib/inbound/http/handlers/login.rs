use auth::AuthenticationError;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Login endpoint: validate the credential pair, issue a bearer token.
///
/// The token is returned in the body and echoed in the response
/// `Authorization` header. A rejected pair is a client error (400), not 401:
/// only the gate on protected routes speaks 401.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Response, ApiError> {
    let result = state
        .authenticator
        .authenticate(&body.username, &body.password)
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => {
                ApiError::BadRequest("Invalid username or password".to_string())
            }
            AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    let token = result.access_token;
    let echoed = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        ApiError::InternalServerError("Issued token is not a valid header value".to_string())
    })?;

    let mut response = ApiSuccess::new(StatusCode::OK, LoginResponseData { token }).into_response();
    response.headers_mut().insert(header::AUTHORIZATION, echoed);

    Ok(response)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequestBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponseData {
    pub token: String,
}
