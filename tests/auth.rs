mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;

use chalkboard::auth::{AuthSession, BYPASS_TOKEN, BYPASS_USER_ID, Role};
use chalkboard::config::BypassCredentials;
use chalkboard::error::Error;
use chalkboard::types::Session;

use common::MockStore;

fn demo_bypass() -> BypassCredentials {
    BypassCredentials {
        email: "demo@institute.example".into(),
        password: "demo-password-1".into(),
    }
}

#[tokio::test]
async fn login_rejects_missing_credentials() {
    let store = Arc::new(MockStore::default());
    let mut auth = AuthSession::new(store, Some(demo_bypass()));

    assert!(matches!(
        auth.login("", "secret").await,
        Err(Error::MissingCredentials)
    ));
    assert!(matches!(
        auth.login("demo@institute.example", "   ").await,
        Err(Error::MissingCredentials)
    ));
    assert!(!auth.is_logged_in());
}

#[tokio::test]
async fn backend_login_wins_when_available() {
    let store = Arc::new(MockStore::default());
    let mut auth = AuthSession::new(store, Some(demo_bypass()));

    let role = auth
        .login("staff@institute.example", "real-password")
        .await
        .unwrap();

    assert_eq!(role, Role::Admin);
    let session = auth.session().expect("session adopted");
    assert_eq!(session.access_token, "backend-token");
    assert_ne!(session.user_id, BYPASS_USER_ID);
}

#[tokio::test]
async fn bypass_login_after_backend_failure() {
    let store = Arc::new(MockStore::default());
    store.fail_sign_in.store(true, Ordering::SeqCst);
    let mut auth = AuthSession::new(store, Some(demo_bypass()));

    let role = auth
        .login("Demo@Institute.Example", "demo-password-1")
        .await
        .unwrap();

    assert_eq!(role, Role::Admin);
    let session = auth.session().expect("bypass session");
    assert_eq!(session.access_token, BYPASS_TOKEN);
    assert_eq!(session.user_id, BYPASS_USER_ID);
    assert_eq!(session.email, "demo@institute.example");
}

#[tokio::test]
async fn bypass_rejects_wrong_password() {
    let store = Arc::new(MockStore::default());
    store.fail_sign_in.store(true, Ordering::SeqCst);
    let mut auth = AuthSession::new(store, Some(demo_bypass()));

    assert!(matches!(
        auth.login("demo@institute.example", "wrong").await,
        Err(Error::InvalidCredentials)
    ));
    assert!(!auth.is_logged_in());
}

#[tokio::test]
async fn no_bypass_configured_means_no_fallback() {
    let store = Arc::new(MockStore::default());
    store.fail_sign_in.store(true, Ordering::SeqCst);
    let mut auth = AuthSession::new(store, None);

    assert!(matches!(
        auth.login("demo@institute.example", "demo-password-1").await,
        Err(Error::InvalidCredentials)
    ));
}

#[tokio::test]
async fn bypass_session_survives_external_sign_out() {
    let store = Arc::new(MockStore::default());
    store.fail_sign_in.store(true, Ordering::SeqCst);
    let mut auth = AuthSession::new(store, Some(demo_bypass()));
    auth.login("demo@institute.example", "demo-password-1")
        .await
        .unwrap();

    // The backend listener reports a sign-out; the bypass session must not
    // be clobbered by it.
    auth.apply_session_change(None);

    assert!(auth.is_logged_in());
    assert_eq!(auth.role(), Some(Role::Admin));
    assert_eq!(
        auth.session().map(|s| s.access_token.as_str()),
        Some(BYPASS_TOKEN)
    );
}

#[tokio::test]
async fn real_session_follows_external_changes() {
    let store = Arc::new(MockStore::default());
    let mut auth = AuthSession::new(store, Some(demo_bypass()));
    auth.login("staff@institute.example", "real-password")
        .await
        .unwrap();

    auth.apply_session_change(None);

    assert!(!auth.is_logged_in());
    assert_eq!(auth.role(), None);
}

#[tokio::test]
async fn init_adopts_an_existing_backend_session() {
    let store = Arc::new(MockStore::default());
    *store.session.lock().unwrap() = Some(Session {
        access_token: "backend-token".into(),
        user_id: "backend-user-1".into(),
        email: "staff@institute.example".into(),
    });
    let mut auth = AuthSession::new(store, None);

    auth.init().await;

    assert!(auth.is_logged_in());
    assert_eq!(auth.role(), Some(Role::Admin));
}

#[tokio::test]
async fn init_with_unreachable_backend_is_logged_out() {
    let store = Arc::new(MockStore::failing());
    let mut auth = AuthSession::new(store, Some(demo_bypass()));

    auth.init().await;

    assert!(!auth.is_logged_in());
    assert_eq!(auth.role(), None);
}

#[tokio::test]
async fn bypass_logout_is_purely_local() {
    let store = Arc::new(MockStore::default());
    store.fail_sign_in.store(true, Ordering::SeqCst);
    let mut auth = AuthSession::new(store.clone(), Some(demo_bypass()));
    auth.login("demo@institute.example", "demo-password-1")
        .await
        .unwrap();

    auth.logout().await;

    assert!(!auth.is_logged_in());
    assert_eq!(store.sign_out_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn real_logout_signs_out_of_the_backend() {
    let store = Arc::new(MockStore::default());
    let mut auth = AuthSession::new(store.clone(), None);
    auth.login("staff@institute.example", "real-password")
        .await
        .unwrap();

    auth.logout().await;

    assert!(!auth.is_logged_in());
    assert_eq!(store.sign_out_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn logout_suppresses_backend_failure() {
    let store = Arc::new(MockStore::default());
    let mut auth = AuthSession::new(store.clone(), None);
    auth.login("staff@institute.example", "real-password")
        .await
        .unwrap();
    store.fail_all.store(true, Ordering::SeqCst);

    // Sign-out fails remotely; the local session still clears quietly.
    auth.logout().await;
    assert!(!auth.is_logged_in());
}
