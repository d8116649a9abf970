//! Shared setup for the mailfiler binaries

pub mod config;

use mailfiler_auth::{AuthConfig, AuthProvider, TokenCache};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("mailfiler_auth=debug".parse().unwrap())
                .add_directive("mailfiler_graph=debug".parse().unwrap())
                .add_directive("mailfiler_core=debug".parse().unwrap()),
        )
        .init();
}

/// Auth provider over the fixed demo configuration
pub fn auth_provider() -> AuthProvider {
    let config = AuthConfig::new(config::CLIENT_ID, config::AUTHORITIES, config::SCOPES);
    AuthProvider::new(config, TokenCache::new(config::TOKEN_CACHE_FILE))
}
