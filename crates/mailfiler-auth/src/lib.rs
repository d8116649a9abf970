//! Authentication module for mailfiler
//!
//! Acquires a delegated Microsoft Graph bearer token through two methods:
//! 1. Silent lookup of a previously cached token pair
//! 2. Interactive OAuth2 device-code flow, trying each configured
//!    authority in order

mod cache;
mod device;
mod error;
mod provider;

pub use cache::TokenCache;
pub use device::{DeviceCodeFlow, TokenPair};
pub use error::{AuthError, AuthResult};
pub use provider::AuthProvider;

/// Configuration for the device-code auth provider
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Application (client) id of the public-client app registration
    pub client_id: String,
    /// Authority base URLs, tried in order
    pub authorities: Vec<String>,
    /// Delegated scopes to request
    pub scopes: Vec<String>,
}

impl AuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        authorities: impl IntoIterator<Item = impl Into<String>>,
        scopes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }
}
