//! Error types for the auth module

use thiserror::Error;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur during authentication
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The device-authorization request could not be initiated
    #[error("Device flow initiation failed: {0}")]
    FlowInitFailed(String),

    /// The device-code exchange did not yield a token
    #[error("Token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// Token cache could not be read or written
    #[error("Token cache error: {0}")]
    CacheError(String),

    /// Every configured authority was tried without obtaining a token
    #[error(
        "Failed to create/complete device flow. Details: {detail}\n\n\
         Fix checklist:\n\
         \x20 1) The app registration must allow public client flows\n\
         \x20 2) Supported account types must include personal Microsoft accounts\n\
         \x20 3) The client id must match the configured app\n\
         \x20 4) Requested scopes must be delegated Graph scopes"
    )]
    AllAuthoritiesFailed { detail: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
