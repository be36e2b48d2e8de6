//! Session resolution feeding the access gate, end to end against the stub.

use crate::common;
use api_client::resolve_session;
use pretty_assertions::assert_eq;
use shared_types::{evaluate, roles, AccessDecision, RouteGuard, Session, AUTH_PATH};

fn admin_guard() -> RouteGuard {
    RouteGuard::authenticated("/admin").requiring(roles::ADMIN)
}

#[tokio::test]
async fn test_gate_follows_session_lifecycle() {
    let (client, _state) = common::spawn_backend().await;
    let students = RouteGuard::authenticated("/students");

    let mut session = Session::default();
    assert_eq!(evaluate(&session, &students), AccessDecision::ShowLoading);

    session = resolve_session(&client).await;
    assert_eq!(
        evaluate(&session, &students),
        AccessDecision::RedirectTo(AUTH_PATH.to_string())
    );

    client
        .sign_in("robin@example.org", common::VALID_PASSWORD)
        .await
        .unwrap();
    session = resolve_session(&client).await;
    assert_eq!(evaluate(&session, &students), AccessDecision::RenderRoute);

    session.sign_out();
    assert_eq!(
        evaluate(&session, &students),
        AccessDecision::RedirectTo(AUTH_PATH.to_string())
    );
}

#[tokio::test]
async fn test_facilitator_is_forbidden_from_admin_route() {
    let (client, state) = common::spawn_backend().await;
    *state.signed_in.lock().unwrap() = Some(common::facilitator());

    let session = resolve_session(&client).await;
    assert_eq!(
        evaluate(&session, &admin_guard()),
        AccessDecision::ShowForbidden("admin".to_string())
    );
    assert_eq!(
        evaluate(
            &session,
            &RouteGuard::authenticated("/facilitator").requiring(roles::FACILITATOR)
        ),
        AccessDecision::RenderRoute
    );
}

#[tokio::test]
async fn test_unreachable_backend_sends_visitor_to_sign_in() {
    let client = api_client::ApiClient::new("http://127.0.0.1:9");
    let session = resolve_session(&client).await;
    assert_eq!(session, Session::Anonymous);
    assert_eq!(
        evaluate(&session, &admin_guard()),
        AccessDecision::RedirectTo(AUTH_PATH.to_string())
    );
}
