use dioxus::prelude::*;
use shared_types::{open_alerts, sort_alerts_by_severity, QualityAlert, StudentSummary};
use shared_ui::components::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState, PageHeader, PageTitle,
    ProgressBar, Skeleton, SkeletonList,
};

use crate::auth::use_auth;
use crate::components::LoadError;
use crate::routes::alerts::AlertRow;
use crate::routes::Route;
use crate::use_api;

/// Open alerts shown on the dashboard before "View all".
const DASHBOARD_ALERT_LIMIT: usize = 5;

/// The most urgent open alerts, critical first.
pub fn urgent_alerts(alerts: &[QualityAlert], limit: usize) -> Vec<QualityAlert> {
    let mut open: Vec<QualityAlert> = open_alerts(alerts).into_iter().cloned().collect();
    sort_alerts_by_severity(&mut open);
    open.truncate(limit);
    open
}

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let auth = use_auth();
    let greeting = auth
        .current_user()
        .map(|u| format!("Welcome back, {}", u.display_name))
        .unwrap_or_else(|| "Welcome".to_string());

    let stats_api = api.clone();
    let stats = use_resource(move || {
        let api = stats_api.clone();
        async move { api.dashboard_stats().await }
    });

    let students_api = api.clone();
    let mut students = use_resource(move || {
        let api = students_api.clone();
        async move { api.list_students().await }
    });

    let mut alerts = use_resource(move || {
        let api = api.clone();
        async move { api.list_alerts().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{greeting}" }
            }

            // Stats cards
            match &*stats.read() {
                Some(Ok(s)) => rsx! {
                    div { class: "stats-grid",
                        StatCard { label: "Students", value: s.total_students }
                        StatCard { label: "Active plans", value: s.active_plans }
                        StatCard { label: "Open alerts", value: s.open_alerts }
                        StatCard { label: "Goals completed", value: s.completed_goals }
                    }
                },
                Some(Err(_)) => rsx! {},
                None => rsx! {
                    div { class: "stats-grid",
                        for _ in 0..4 {
                            Card {
                                CardContent { Skeleton {} }
                            }
                        }
                    }
                },
            }

            div { class: "dashboard-columns",
                Card {
                    CardHeader {
                        CardTitle { "Student progress" }
                        CardDescription { "Average goal completion across planning domains" }
                    }
                    CardContent {
                        match &*students.read() {
                            Some(Ok(list)) if list.is_empty() => rsx! {
                                EmptyState { title: "No students on your caseload" }
                            },
                            Some(Ok(list)) => rsx! {
                                ul { class: "progress-list",
                                    for student in list.iter() {
                                        StudentProgressRow { key: "{student.id}", student: student.clone() }
                                    }
                                }
                            },
                            Some(Err(e)) => rsx! {
                                LoadError { error: e.clone(), on_retry: move |_| students.restart() }
                            },
                            None => rsx! { SkeletonList {} },
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Needs attention" }
                        CardDescription {
                            Link { to: Route::Alerts {}, "View all alerts" }
                        }
                    }
                    CardContent {
                        match &*alerts.read() {
                            Some(Ok(list)) => {
                                let urgent = urgent_alerts(list, DASHBOARD_ALERT_LIMIT);
                                if urgent.is_empty() {
                                    rsx! { EmptyState { title: "No open alerts" } }
                                } else {
                                    rsx! {
                                        ul { class: "alert-list",
                                            for alert in urgent {
                                                AlertRow { key: "{alert.id}", alert: alert }
                                            }
                                        }
                                    }
                                }
                            }
                            Some(Err(e)) => rsx! {
                                LoadError { error: e.clone(), on_retry: move |_| alerts.restart() }
                            },
                            None => rsx! { SkeletonList {} },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: u32) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

#[component]
fn StudentProgressRow(student: StudentSummary) -> Element {
    rsx! {
        li { class: "student-progress-row",
            Link { to: Route::StudentDetail { id: student.id.clone() }, "{student.full_name()}" }
            ProgressBar { value: student.overall_progress(), label: "{student.full_name()}" }
        }
    }
}
