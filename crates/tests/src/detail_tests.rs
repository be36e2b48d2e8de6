use crate::common;
use shared_types::AppErrorKind;

#[tokio::test]
async fn test_get_case_study_success() {
    let (client, _state) = common::spawn_backend().await;
    let study = client.get_case_study("cs-2").await.unwrap();
    assert_eq!(study.title, "Home Life");
    assert!(study.tags.contains("independent"));
}

#[tokio::test]
async fn test_get_case_study_not_found() {
    let (client, _state) = common::spawn_backend().await;
    let err = client.get_case_study("cs-404").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "case study cs-404 not found");
}

#[tokio::test]
async fn test_get_student_includes_notes() {
    let (client, _state) = common::spawn_backend().await;
    let student = client.get_student("s-1").await.unwrap();
    assert_eq!(student.school, "Westview High");
    assert!(student.notes.contains("visual schedule"));
}

#[tokio::test]
async fn test_get_student_not_found() {
    let (client, _state) = common::spawn_backend().await;
    let err = client.get_student("nobody").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
