use crate::common;
use api_client::ApiClient;
use shared_types::{AppErrorKind, CaseStudy};

async fn fetch_kind(client: &ApiClient, resource: &str) -> AppErrorKind {
    client
        .fetch_collection::<CaseStudy>(resource)
        .await
        .unwrap_err()
        .kind
}

#[tokio::test]
async fn test_undecodable_body_is_internal_error() {
    let (client, _state) = common::spawn_backend().await;
    let err = client.fetch_collection::<CaseStudy>("garbled").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert!(err.message.contains("invalid response"));
}

#[tokio::test]
async fn test_status_codes_map_to_error_kinds() {
    let (client, _state) = common::spawn_backend().await;
    assert_eq!(fetch_kind(&client, "restricted").await, AppErrorKind::Forbidden);
    assert_eq!(fetch_kind(&client, "exploding").await, AppErrorKind::InternalError);
    assert_eq!(fetch_kind(&client, "gateway").await, AppErrorKind::Unavailable);
    assert_eq!(fetch_kind(&client, "no-such-collection").await, AppErrorKind::NotFound);
}

#[tokio::test]
async fn test_unavailable_message_is_user_friendly() {
    let (client, _state) = common::spawn_backend().await;
    let err = client.fetch_collection::<CaseStudy>("gateway").await.unwrap_err();
    assert_eq!(err.user_message(), "The MyGoodLife service is unavailable right now.");
}
