//! The collection filter applied to collections as the backend serves them.

use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{apply, tag_catalog, CaseStudy, FilterOutcome, FilterState};

fn titles(items: &[&CaseStudy]) -> Vec<String> {
    items.iter().map(|s| s.title.clone()).collect()
}

#[tokio::test]
async fn test_query_and_tags_over_fetched_case_studies() {
    let (client, _state) = common::spawn_backend().await;
    let studies = client.list_case_studies().await.unwrap();
    let mut state = FilterState::default();

    state.set_query("home");
    // "home" matches the Home Life title and the garden's content.
    assert_eq!(titles(&apply(&studies, &state)), vec!["Home Life", "Community Garden"]);

    state.toggle_tag("independent");
    assert_eq!(titles(&apply(&studies, &state)), vec!["Home Life"]);

    state.set_query("");
    state.toggle_tag("independent");
    state.toggle_tag("employment");
    assert_eq!(titles(&apply(&studies, &state)), vec!["Jobs Plan"]);

    state.set_query("home");
    assert_eq!(state.outcome(&studies), FilterOutcome::NoMatches);

    state.clear();
    assert_eq!(apply(&studies, &state).len(), studies.len());
}

#[tokio::test]
async fn test_catalog_and_empty_collection_outcome() {
    let (client, _state) = common::spawn_backend().await;
    let studies = client.list_case_studies().await.unwrap();
    assert_eq!(tag_catalog(&studies), vec!["employment", "independent"]);

    let empty: Vec<CaseStudy> = client.fetch_collection("empty").await.unwrap();
    assert_eq!(FilterState::default().outcome(&empty), FilterOutcome::NoItems);
}

#[tokio::test]
async fn test_students_filter_on_name_and_school() {
    let (client, _state) = common::spawn_backend().await;
    let students = client.list_students().await.unwrap();
    let mut state = FilterState::default();

    state.set_query("LAKESIDE");
    let visible = apply(&students, &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].first_name, "Sam");

    state.clear();
    state.toggle_tag("employment");
    let visible = apply(&students, &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].first_name, "Jordan");
}
