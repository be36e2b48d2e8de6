use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{tag_catalog, FilterOutcome, FilterState, StudentSummary};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    EmptyState, PageHeader, PageTitle, ProgressBar, SkeletonList,
};

use crate::components::{FilterBar, LoadError, NoMatches};
use crate::format_helpers::{format_relative, format_snake_case_title};
use crate::routes::Route;
use crate::use_api;

#[component]
pub fn StudentList() -> Element {
    let api = use_api();
    let filter = use_signal(FilterState::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_students().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Students" }
            }

            match &*data.read() {
                Some(Ok(students)) => {
                    let state = filter.read().clone();
                    rsx! {
                        FilterBar {
                            filter: filter,
                            catalog: tag_catalog(students),
                            placeholder: "Search by name or school...",
                        }
                        match state.outcome(students) {
                            FilterOutcome::Matches(visible) => rsx! {
                                div { class: "card-grid",
                                    for student in visible {
                                        StudentCard { key: "{student.id}", student: student.clone() }
                                    }
                                }
                            },
                            FilterOutcome::NoMatches => rsx! { NoMatches { filter: filter } },
                            FilterOutcome::NoItems => rsx! {
                                EmptyState {
                                    title: "No students on your caseload",
                                    message: "Students assigned to you will appear here.",
                                }
                            },
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    LoadError { error: e.clone(), on_retry: move |_| data.restart() }
                },
                None => rsx! { SkeletonList {} },
            }
        }
    }
}

#[component]
fn StudentCard(student: StudentSummary) -> Element {
    let subtitle = match student.grade {
        Some(grade) => format!("{} · Grade {grade}", student.school),
        None => student.school.clone(),
    };
    let last_seen = student
        .last_activity
        .map(|at| format_relative(&at, &Utc::now()))
        .unwrap_or_else(|| "No activity yet".to_string());

    rsx! {
        Link { to: Route::StudentDetail { id: student.id.clone() }, class: "card-link",
            Card {
                CardHeader {
                    CardTitle { "{student.full_name()}" }
                    CardDescription { "{subtitle}" }
                }
                CardContent {
                    ProgressBar { value: student.overall_progress(), label: "Overall progress" }
                    p { class: "muted", "Last activity: {last_seen}" }
                }
                CardFooter {
                    for tag in student.tags.iter() {
                        Badge { key: "{tag}", variant: BadgeVariant::Secondary, "{format_snake_case_title(tag)}" }
                    }
                }
            }
        }
    }
}
