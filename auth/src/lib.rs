//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the garage service:
//! - Fixed credential validation (single configured username/password pair)
//! - JWT token generation and validation (HS256, subject + issued-at + expiry)
//! - Authentication coordination
//!
//! The service wires these together behind its own HTTP middleware; this crate
//! stays free of transport and storage concerns.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Credentials};
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Credentials::new("admin", "admin123"),
//!     24,
//! );
//!
//! // Login: check the credential pair and issue a token
//! let result = auth.authenticate("admin", "admin123").unwrap();
//!
//! // Each request: verify the token, read the subject back
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "admin");
//! ```

pub mod authenticator;
pub mod credentials;
pub mod jwt;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
