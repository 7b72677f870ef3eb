//! Tests for API token resolution

use todobar::Error;
use todobar::credentials::{KEYCHAIN_ACCOUNT, KEYCHAIN_SERVICE, resolve_token};

use crate::common::MockSecretStore;

#[test]
fn test_configured_token_skips_store() {
    let store = MockSecretStore::with_secret("from-keychain");

    let token = resolve_token(Some("from-config"), &store).unwrap();

    assert_eq!(token, "from-config");
    assert_eq!(store.calls(), 0);
}

#[test]
fn test_missing_token_reads_store() {
    let store = MockSecretStore::with_secret("from-keychain");

    assert_eq!(resolve_token(None, &store).unwrap(), "from-keychain");
    assert_eq!(store.calls(), 1);
}

#[test]
fn test_empty_token_reads_store() {
    let store = MockSecretStore::with_secret("from-keychain");

    assert_eq!(resolve_token(Some(""), &store).unwrap(), "from-keychain");
    assert_eq!(store.calls(), 1);
}

#[test]
fn test_store_failure_is_fatal() {
    let store = MockSecretStore::empty();

    let err = resolve_token(None, &store).unwrap_err();

    match err {
        Error::SecretStore { service, account, .. } => {
            assert_eq!(service, KEYCHAIN_SERVICE);
            assert_eq!(account, KEYCHAIN_ACCOUNT);
        },
        other => panic!("expected secret store error, got {other:?}"),
    }
}

#[test]
fn test_empty_stored_token_is_fatal() {
    let store = MockSecretStore::with_secret("");
    assert!(matches!(resolve_token(None, &store), Err(Error::SecretStore { .. })));
}
