//! OAuth2 device-authorization grant (RFC 8628)
//!
//! One flow object per authority. The authority base URL determines which
//! account types may sign in; endpoint paths follow the Microsoft identity
//! platform v2.0 layout.

use crate::{AuthConfig, AuthError, AuthResult};
use oauth2::basic::BasicClient;
use oauth2::devicecode::StandardDeviceAuthorizationResponse;
use oauth2::{
    AuthType, AuthUrl, ClientId, DeviceAuthorizationUrl, RequestTokenError, Scope, TokenResponse,
    TokenUrl,
};
use tracing::{debug, info};

/// Token pair containing access and refresh tokens
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Access token for API calls
    pub access_token: String,
    /// Refresh token, stored when issued but not exercised in a single run
    pub refresh_token: Option<String>,
    /// Token expiration timestamp (Unix seconds)
    pub expires_at: Option<i64>,
}

impl TokenPair {
    /// Check if the access token is expired or about to expire
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let now = chrono::Utc::now().timestamp();
                // Consider expired if less than 5 minutes remaining
                expires_at - now < 300
            }
            None => false,
        }
    }
}

/// Endpoint URLs under one authority (Microsoft identity platform v2.0)
pub(crate) fn authority_endpoints(authority: &str) -> (String, String, String) {
    let base = authority.trim_end_matches('/');
    (
        format!("{}/oauth2/v2.0/authorize", base),
        format!("{}/oauth2/v2.0/token", base),
        format!("{}/oauth2/v2.0/devicecode", base),
    )
}

/// Manages one device-code exchange against a single authority
pub struct DeviceCodeFlow {
    client: BasicClient,
    scopes: Vec<String>,
}

impl DeviceCodeFlow {
    /// Create a device-code flow for the given authority
    pub fn new(config: &AuthConfig, authority: &str) -> AuthResult<Self> {
        let (auth_endpoint, token_endpoint, device_endpoint) = authority_endpoints(authority);

        let auth_url = AuthUrl::new(auth_endpoint)
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid auth URL: {}", e)))?;
        let token_url = TokenUrl::new(token_endpoint)
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid token URL: {}", e)))?;
        let device_url = DeviceAuthorizationUrl::new(device_endpoint)
            .map_err(|e| AuthError::InvalidConfig(format!("Invalid device URL: {}", e)))?;

        // Microsoft rejects HTTP basic auth on the token endpoint for
        // public clients; the client id must travel in the request body.
        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            None,
            auth_url,
            Some(token_url),
        )
        .set_device_authorization_url(device_url)
        .set_auth_type(AuthType::RequestBody);

        Ok(Self {
            client,
            scopes: config.scopes.clone(),
        })
    }

    /// Request a device code from the authority
    pub async fn start(&self) -> AuthResult<StandardDeviceAuthorizationResponse> {
        let mut request = self
            .client
            .exchange_device_code()
            .map_err(|e| AuthError::FlowInitFailed(e.to_string()))?;

        for scope in &self.scopes {
            request = request.add_scope(Scope::new(scope.clone()));
        }

        let details = request
            .request_async(oauth2::reqwest::async_http_client)
            .await
            .map_err(|e| AuthError::FlowInitFailed(token_error_detail(&e)))?;

        debug!(
            "Device flow started, code expires in {}s",
            details.expires_in().as_secs()
        );
        Ok(details)
    }

    /// User-facing sign-in instruction for a started flow
    pub fn instruction(details: &StandardDeviceAuthorizationResponse) -> String {
        match details.verification_uri_complete() {
            Some(complete) => format!(
                "To sign in, open {} (code {} is pre-filled).",
                complete.secret(),
                details.user_code().secret()
            ),
            None => format!(
                "To sign in, open {} and enter the code {}.",
                details.verification_uri().as_str(),
                details.user_code().secret()
            ),
        }
    }

    /// Poll the token endpoint until the user completes verification
    /// out-of-band, the code expires, or the authority rejects the flow.
    pub async fn wait_for_token(
        &self,
        details: &StandardDeviceAuthorizationResponse,
    ) -> AuthResult<TokenPair> {
        let token_response = self
            .client
            .exchange_device_access_token(details)
            .request_async(oauth2::reqwest::async_http_client, tokio::time::sleep, None)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(token_error_detail(&e)))?;

        let expires_at = token_response
            .expires_in()
            .map(|duration| chrono::Utc::now().timestamp() + duration.as_secs() as i64);

        info!("Token acquired.");
        Ok(TokenPair {
            access_token: token_response.access_token().secret().clone(),
            refresh_token: token_response.refresh_token().map(|t| t.secret().clone()),
            expires_at,
        })
    }
}

/// Pull the useful detail out of an oauth2 request error: the server's
/// error/description when present, the transport error otherwise.
fn token_error_detail<RE, T>(err: &RequestTokenError<RE, T>) -> String
where
    RE: std::error::Error + 'static,
    T: oauth2::ErrorResponse + std::fmt::Display + 'static,
{
    match err {
        RequestTokenError::ServerResponse(response) => response.to_string(),
        RequestTokenError::Request(e) => format!("request error: {}", e),
        RequestTokenError::Parse(e, _) => format!("response parse error: {}", e),
        RequestTokenError::Other(msg) => msg.clone(),
    }
}
