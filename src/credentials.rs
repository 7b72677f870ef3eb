//! API token resolution
//!
//! A token given in the configuration wins. Otherwise the token is read from
//! the platform credential store (macOS Keychain, Windows Credential Manager,
//! Linux kernel keyring) through the `keyring` crate.
//!
//! To store the token on macOS:
//!
//! ```text
//! security add-generic-password -s todoist -a api-token -w <TOKEN>
//! ```

use crate::error::{Error, Result};

/// Keychain service holding the Todoist API token
pub const KEYCHAIN_SERVICE: &str = "todoist";

/// Keychain account holding the Todoist API token
pub const KEYCHAIN_ACCOUNT: &str = "api-token";

/// Read-only access to a secret store
pub trait SecretStore {
    /// Fetch the secret stored under `service`/`account`
    fn get_secret(&self, service: &str, account: &str) -> Result<String>;
}

/// [`SecretStore`] backed by the platform credential store
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyringStore;

impl KeyringStore {
    /// Create a new keyring-backed store
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SecretStore for KeyringStore {
    fn get_secret(&self, service: &str, account: &str) -> Result<String> {
        let store_error = |message: String| Error::SecretStore {
            service: service.to_string(),
            account: account.to_string(),
            message,
        };

        let entry = keyring::Entry::new(service, account)
            .map_err(|e| store_error(format!("failed to open keyring entry: {e}")))?;

        match entry.get_password() {
            Ok(secret) => Ok(secret),
            Err(keyring::Error::NoEntry) => Err(store_error("no such entry".to_string())),
            Err(e) => Err(store_error(e.to_string())),
        }
    }
}

/// Resolve the API token from configuration or the secret store.
///
/// A non-empty configured token is returned unchanged without touching the
/// store.
pub fn resolve_token(configured: Option<&str>, store: &dyn SecretStore) -> Result<String> {
    if let Some(token) = configured.filter(|t| !t.is_empty()) {
        return Ok(token.to_string());
    }

    log::debug!("No API token configured, reading {KEYCHAIN_SERVICE}/{KEYCHAIN_ACCOUNT} from keychain");
    let token = store.get_secret(KEYCHAIN_SERVICE, KEYCHAIN_ACCOUNT)?;
    if token.is_empty() {
        return Err(Error::SecretStore {
            service: KEYCHAIN_SERVICE.to_string(),
            account: KEYCHAIN_ACCOUNT.to_string(),
            message: "stored token is empty".to_string(),
        });
    }
    Ok(token)
}
