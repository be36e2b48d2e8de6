use crate::common;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{AlertSeverity, CaseStudy, LifeDomain, MediaKind};

#[tokio::test]
async fn test_list_case_studies() {
    let (client, _state) = common::spawn_backend().await;
    let studies = client.list_case_studies().await.unwrap();
    let titles: Vec<&str> = studies.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Jobs Plan", "Home Life", "Community Garden"]);
    assert_eq!(studies[0].media.as_ref().unwrap().kind, MediaKind::Video);
}

#[tokio::test]
async fn test_missing_tags_and_media_default_to_absent() {
    let (client, _state) = common::spawn_backend().await;
    let studies = client.list_case_studies().await.unwrap();
    let garden = &studies[2];
    assert!(garden.tags.is_empty());
    assert!(garden.media.is_none());
}

#[tokio::test]
async fn test_fetch_collection_by_resource_name() {
    let (client, _state) = common::spawn_backend().await;
    let studies: Vec<CaseStudy> = client
        .fetch_collection(api_client::resources::CASE_STUDIES)
        .await
        .unwrap();
    assert_eq!(studies.len(), 3);

    let empty: Vec<CaseStudy> = client.fetch_collection("empty").await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_list_students_maps_unknown_domain_to_other() {
    let (client, _state) = common::spawn_backend().await;
    let students = client.list_students().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].full_name(), "Jordan Lee");
    assert_eq!(students[0].overall_progress(), 75.0);
    assert_eq!(
        students[0].last_activity,
        Some(Utc.with_ymd_and_hms(2026, 9, 30, 14, 0, 0).unwrap())
    );
    assert_eq!(students[1].domains[0].domain, LifeDomain::Other);
    assert_eq!(students[1].grade, None);
}

#[tokio::test]
async fn test_list_alerts() {
    let (client, _state) = common::spawn_backend().await;
    let mut alerts = client.list_alerts().await.unwrap();
    assert_eq!(shared_types::open_alerts(&alerts).len(), 2);

    shared_types::sort_alerts_by_severity(&mut alerts);
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].student_name, "Sam Patel");
}

#[tokio::test]
async fn test_list_learning_modules_and_templates() {
    let (client, _state) = common::spawn_backend().await;
    let modules = client.list_learning_modules().await.unwrap();
    assert_eq!(modules[0].duration_label().as_deref(), Some("1 hr 30 min"));

    let templates = client.list_plan_templates().await.unwrap();
    assert_eq!(templates[0].domain, Some(LifeDomain::Employment));
}

#[tokio::test]
async fn test_dashboard_stats() {
    let (client, _state) = common::spawn_backend().await;
    let stats = client.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.open_alerts, 2);
    assert_eq!(stats.completed_goals, 3);
}
