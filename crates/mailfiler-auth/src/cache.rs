//! File-backed token cache
//!
//! Stores the last acquired token pair as JSON so a later run within the
//! token's lifetime can skip the interactive flow.

use crate::{AuthError, AuthResult, TokenPair};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Stores and retrieves the cached token pair
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the cached token pair, if any.
    ///
    /// A missing or unreadable cache file is treated as "no cached token",
    /// never as a fatal error.
    pub fn load(&self) -> AuthResult<Option<TokenPair>> {
        if !self.path.is_file() {
            debug!("No token cache at {}", self.path.display());
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<TokenPair>(&json) {
            Ok(tokens) => {
                debug!("Loaded cached token pair from {}", self.path.display());
                Ok(Some(tokens))
            }
            Err(e) => {
                warn!("Ignoring unparseable token cache: {}", e);
                Ok(None)
            }
        }
    }

    /// Persist a token pair, replacing any previous cache contents
    pub fn store(&self, tokens: &TokenPair) -> AuthResult<()> {
        let json = serde_json::to_string_pretty(tokens)
            .map_err(|e| AuthError::CacheError(format!("Failed to serialize tokens: {}", e)))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;

        info!("Stored token pair at {}", self.path.display());
        Ok(())
    }

    /// Remove the cached token pair
    pub fn clear(&self) -> AuthResult<()> {
        if self.path.is_file() {
            fs::remove_file(&self.path)?;
            info!("Cleared token cache at {}", self.path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("tokens.json"));

        assert!(cache.load().unwrap().is_none());

        let tokens = TokenPair {
            access_token: "abc123".to_string(),
            refresh_token: Some("refresh".to_string()),
            expires_at: Some(1_700_000_000),
        };
        cache.store(&tokens).unwrap();

        let loaded = cache.load().unwrap().unwrap();
        assert_eq!(loaded.access_token, "abc123");
        assert_eq!(loaded.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(loaded.expires_at, Some(1_700_000_000));

        cache.clear().unwrap();
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_cache_treated_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "not json").unwrap();

        let cache = TokenCache::new(path);
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let cache = TokenCache::new(dir.path().join("nested/deeper/tokens.json"));

        let tokens = TokenPair {
            access_token: "t".to_string(),
            refresh_token: None,
            expires_at: None,
        };
        cache.store(&tokens).unwrap();
        assert!(cache.load().unwrap().is_some());
    }
}
