use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use shared_types::StudentSummary;
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    PageHeader, PageTitle, ProgressBar, SkeletonList,
};

use crate::components::LoadError;
use crate::routes::Route;
use crate::use_api;

const STALE_AFTER_DAYS: i64 = 30;
const LOW_PROGRESS_PERCENT: f64 = 25.0;

/// Why a student should be looked at this week. Empty when nothing stands out.
pub fn attention_reasons(student: &StudentSummary, now: &DateTime<Utc>) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if student.domains.is_empty() {
        reasons.push("No plan goals yet");
    } else if student.overall_progress() < LOW_PROGRESS_PERCENT {
        reasons.push("Low progress");
    }
    match student.last_activity {
        Some(at) if *now - at <= Duration::days(STALE_AFTER_DAYS) => {}
        _ => reasons.push("No recent activity"),
    }
    reasons
}

/// Students with at least one reason, lowest progress first.
pub fn caseload_review<'a>(
    students: &'a [StudentSummary],
    now: &DateTime<Utc>,
) -> Vec<(&'a StudentSummary, Vec<&'static str>)> {
    let mut flagged: Vec<_> = students
        .iter()
        .map(|s| (s, attention_reasons(s, now)))
        .filter(|(_, reasons)| !reasons.is_empty())
        .collect();
    flagged.sort_by(|(a, _), (b, _)| a.overall_progress().total_cmp(&b.overall_progress()));
    flagged
}

/// Caseload review for facilitators.
#[component]
pub fn FacilitatorTools() -> Element {
    let api = use_api();

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_students().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Caseload Review" }
            }

            match &*data.read() {
                Some(Ok(students)) => {
                    let flagged = caseload_review(students, &Utc::now());
                    if flagged.is_empty() {
                        rsx! {
                            EmptyState {
                                title: "Everyone is on track",
                                message: "No student needs follow-up right now.",
                            }
                        }
                    } else {
                        rsx! {
                            Card {
                                CardHeader {
                                    CardTitle { "Needs follow-up" }
                                    CardDescription { "{flagged.len()} of {students.len()} students" }
                                }
                                CardContent {
                                    ul { class: "review-list",
                                        for (student, reasons) in flagged {
                                            li { key: "{student.id}", class: "review-row",
                                                Link { to: Route::StudentDetail { id: student.id.clone() },
                                                    "{student.full_name()}"
                                                }
                                                ProgressBar { value: student.overall_progress() }
                                                for reason in reasons {
                                                    Badge { variant: BadgeVariant::Warning, "{reason}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
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
