use dioxus::prelude::*;
use shared_types::{sort_alerts_by_severity, AppErrorKind, LifeDomain, QualityAlert, StudentSummary};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, EmptyState, PageActions,
    PageHeader, PageTitle, ProgressBar, SkeletonList,
};

use crate::components::LoadError;
use crate::format_helpers::{format_date_human, paragraphs};
use crate::routes::alerts::AlertRow;
use crate::routes::Route;
use crate::use_api;

#[component]
pub fn StudentDetail(id: String) -> Element {
    let api = use_api();
    let student_id = id.clone();
    let alerts_api = api.clone();
    let alerts_for = id.clone();

    let mut data = use_resource(move || {
        let api = api.clone();
        let id = student_id.clone();
        async move { api.get_student(&id).await }
    });

    // Alert failures only hide the alerts card; the profile still renders.
    let alerts = use_resource(move || {
        let api = alerts_api.clone();
        let id = alerts_for.clone();
        async move {
            api.list_alerts()
                .await
                .map(|alerts| student_alerts(alerts, &id))
                .unwrap_or_default()
        }
    });

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(student)) => rsx! {
                    PageHeader {
                        PageTitle { "{student.full_name()}" }
                        PageActions {
                            Link { to: Route::StudentList {},
                                Button { variant: ButtonVariant::Secondary, "Back to List" }
                            }
                        }
                    }
                    DomainProgressCard { student: student.clone() }
                    if let Some(alerts) = alerts.read().as_ref().filter(|a| !a.is_empty()) {
                        Card {
                            CardHeader {
                                CardTitle { "Open alerts" }
                            }
                            CardContent {
                                ul { class: "alert-list",
                                    for alert in alerts.iter() {
                                        AlertRow { key: "{alert.id}", alert: alert.clone() }
                                    }
                                }
                            }
                        }
                    }
                    if !student.notes.is_empty() {
                        Card {
                            CardHeader {
                                CardTitle { "Notes" }
                            }
                            CardContent {
                                for (i, paragraph) in paragraphs(&student.notes).into_iter().enumerate() {
                                    p { key: "{i}", "{paragraph}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
                    EmptyState {
                        title: "Student not found",
                        message: "This student is not on your caseload.",
                        actions: rsx! {
                            Link { to: Route::StudentList {},
                                Button { "Back to List" }
                            }
                        },
                    }
                },
                Some(Err(e)) => rsx! {
                    LoadError { error: e.clone(), on_retry: move |_| data.restart() }
                },
                None => rsx! { SkeletonList { rows: 5 } },
            }
        }
    }
}

/// Unresolved alerts for one student, most urgent first.
fn student_alerts(alerts: Vec<QualityAlert>, student_id: &str) -> Vec<QualityAlert> {
    let mut mine: Vec<QualityAlert> = alerts
        .into_iter()
        .filter(|a| a.student_id == student_id && !a.resolved)
        .collect();
    sort_alerts_by_severity(&mut mine);
    mine
}

/// One progress bar per planning domain, in canonical domain order.
/// Domains without a plan entry show as not started.
#[component]
fn DomainProgressCard(student: StudentSummary) -> Element {
    let rows: Vec<(LifeDomain, f64, String)> = LifeDomain::ALL
        .iter()
        .map(|&domain| match student.progress_in(domain) {
            Some(p) => (domain, p.percent(), format!("{}/{} goals", p.completed_goals, p.total_goals)),
            None => (domain, 0.0, "Not started".to_string()),
        })
        .collect();
    let last_activity = student.last_activity.as_ref().map(format_date_human);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Domain progress" }
            }
            CardContent {
                for (domain, percent, detail) in rows {
                    div { key: "{domain.as_str()}", class: "domain-row",
                        span { class: "domain-label", "{domain.label()}" }
                        ProgressBar { value: percent, label: "{domain.label()}" }
                        span { class: "domain-detail", "{detail}" }
                    }
                }
                if let Some(date) = last_activity {
                    p { class: "muted", "Last activity {date}" }
                }
            }
        }
    }
}
