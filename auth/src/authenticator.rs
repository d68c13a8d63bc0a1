use crate::credentials::Credentials;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Authentication coordinator combining credential validation and JWT issuance.
///
/// Holds the single configured credential pair and the token codec. Login
/// checks the submitted pair and issues a time-limited token; request
/// verification is a read-only signature + expiry check.
pub struct Authenticator {
    credentials: Credentials,
    jwt_handler: JwtHandler,
    token_validity_hours: i64,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `credentials` - The one credential pair accepted at login
    /// * `token_validity_hours` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], credentials: Credentials, token_validity_hours: i64) -> Self {
        Self {
            credentials,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_validity_hours,
        }
    }

    /// Verify a submitted credential pair and issue a token for it.
    ///
    /// The submitted pair is not retained.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Pair does not match the configured credential
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.credentials.matches(username, password) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_subject(username, self.token_validity_hours);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` / `InvalidToken` - Signature or expiry check failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
