//! Token acquisition with authority fallback
//!
//! Tries each configured authority in order: cached token first, then an
//! interactive device-code exchange. First success wins; if every authority
//! fails, the last failure detail is surfaced with remediation hints.

use crate::{AuthConfig, AuthError, AuthResult, DeviceCodeFlow, TokenCache};
use tracing::{info, warn};

pub struct AuthProvider {
    config: AuthConfig,
    cache: TokenCache,
}

impl AuthProvider {
    pub fn new(config: AuthConfig, cache: TokenCache) -> Self {
        Self { config, cache }
    }

    /// Acquire a bearer token, blocking on user interaction if needed.
    ///
    /// Per authority: a valid cached token short-circuits everything; a
    /// failed flow initiation advances to the next authority; a started
    /// flow prints the sign-in instruction and waits for the user.
    pub async fn acquire(&self) -> AuthResult<String> {
        if self.config.authorities.is_empty() {
            return Err(AuthError::InvalidConfig(
                "No authorities configured".to_string(),
            ));
        }

        let mut last_error_detail: Option<String> = None;

        for authority in &self.config.authorities {
            println!("Trying authority: {}", authority);

            // Silent (cached token) first
            match self.cache.load() {
                Ok(Some(tokens)) if !tokens.is_expired() => {
                    println!("Got cached token.");
                    return Ok(tokens.access_token);
                }
                Ok(_) => {}
                Err(e) => warn!("Silent token attempt failed: {}", e),
            }

            // Device code flow
            let flow = match DeviceCodeFlow::new(&self.config, authority) {
                Ok(flow) => flow,
                Err(e) => {
                    println!("Device flow init error: {}", e);
                    last_error_detail = Some(e.to_string());
                    continue;
                }
            };

            let details = match flow.start().await {
                Ok(details) => details,
                Err(e) => {
                    println!("Device flow init error: {}", e);
                    last_error_detail = Some(e.to_string());
                    continue;
                }
            };

            println!("{}", DeviceCodeFlow::instruction(&details));

            match flow.wait_for_token(&details).await {
                Ok(tokens) => {
                    println!("Token acquired.");
                    if let Err(e) = self.cache.store(&tokens) {
                        warn!("Failed to cache token: {}", e);
                    }
                    return Ok(tokens.access_token);
                }
                Err(e) => {
                    println!("Device flow acquisition failed — {}", e);
                    last_error_detail = Some(e.to_string());
                }
            }
        }

        info!("All authorities exhausted without a token");
        Err(AuthError::AllAuthoritiesFailed {
            detail: last_error_detail.unwrap_or_else(|| "no additional info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenPair;

    fn test_config() -> AuthConfig {
        AuthConfig::new(
            "client-id",
            ["https://login.microsoftonline.com/consumers"],
            ["User.Read"],
        )
    }

    #[tokio::test]
    async fn test_cached_token_short_circuits() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("tokens.json"));
        cache
            .store(&TokenPair {
                access_token: "cached".to_string(),
                refresh_token: None,
                expires_at: Some(chrono::Utc::now().timestamp() + 3600),
            })
            .unwrap();

        let provider = AuthProvider::new(test_config(), cache);
        let token = provider.acquire().await.unwrap();
        assert_eq!(token, "cached");
    }

    #[tokio::test]
    async fn test_no_authorities_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AuthConfig::new(
            "client-id",
            Vec::<String>::new(),
            ["User.Read"],
        );
        let provider = AuthProvider::new(config, TokenCache::new(dir.path().join("t.json")));

        match provider.acquire().await {
            Err(AuthError::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig, got {:?}", other.map(|_| "token")),
        }
    }

    #[test]
    fn test_exhaustion_error_names_detail_and_hints() {
        let err = AuthError::AllAuthoritiesFailed {
            detail: "invalid_client: AADSTS7000218".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("invalid_client: AADSTS7000218"));
        assert!(text.contains("public client flows"));
        assert!(text.contains("personal Microsoft accounts"));
        assert!(text.contains("client id"));
        assert!(text.contains("delegated Graph scopes"));
    }
}
