use crate::common;
use api_client::{resolve_session, SessionProvider, SessionSource};
use pretty_assertions::assert_eq;
use shared_types::{AppConfig, AppErrorKind, Session, SessionProviderKind};

#[tokio::test]
async fn test_current_user_absent_when_signed_out() {
    let (client, _state) = common::spawn_backend().await;
    assert_eq!(client.current_user().await.unwrap(), None);
    assert_eq!(resolve_session(&client).await, Session::Anonymous);
}

#[tokio::test]
async fn test_sign_in_then_resolve() {
    let (client, _state) = common::spawn_backend().await;
    let user = client
        .sign_in("robin@example.org", common::VALID_PASSWORD)
        .await
        .unwrap();
    assert_eq!(user.role, "facilitator");

    let session = resolve_session(&client).await;
    assert_eq!(session, Session::Authenticated(user));
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let (client, state) = common::spawn_backend().await;
    let err = client.sign_in("robin@example.org", "nope").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
    assert!(state.signed_in.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_sign_out_returns_to_anonymous() {
    let (client, state) = common::spawn_backend().await;
    *state.signed_in.lock().unwrap() = Some(common::facilitator());
    assert!(resolve_session(&client).await.is_authenticated());

    SessionProvider::sign_out(&client).await.unwrap();
    assert_eq!(resolve_session(&client).await, Session::Anonymous);
}

#[tokio::test]
async fn test_remote_source_uses_backend() {
    let (client, state) = common::spawn_backend().await;
    *state.signed_in.lock().unwrap() = Some(common::facilitator());

    let source = SessionSource::from_config(&AppConfig::default(), client);
    assert!(!source.is_simulated());
    let session = resolve_session(&source).await;
    assert_eq!(session.user().unwrap().display_name, "Robin Ortiz");
}

#[tokio::test]
async fn test_simulated_source_ignores_backend() {
    let (client, _state) = common::spawn_backend().await;
    let mut config = AppConfig::default();
    config.session.provider = SessionProviderKind::Simulated;
    config.session.simulated_role = "admin".into();

    let source = SessionSource::from_config(&config, client);
    let session = resolve_session(&source).await;
    assert_eq!(session.user().unwrap().role, "admin");
}
