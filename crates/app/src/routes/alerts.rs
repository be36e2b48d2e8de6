use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{sort_alerts_by_severity, AlertSeverity, QualityAlert};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, EmptyState, PageHeader,
    PageTitle, SkeletonList,
};

use crate::components::LoadError;
use crate::format_helpers::format_relative;
use crate::routes::Route;
use crate::use_api;

const SEVERITY_FILTERS: &[(Option<AlertSeverity>, &str)] = &[
    (None, "All"),
    (Some(AlertSeverity::Critical), "Critical"),
    (Some(AlertSeverity::Warning), "Warning"),
    (Some(AlertSeverity::Info), "Info"),
];

/// Alerts to show for a severity filter, most urgent first.
pub fn visible_alerts(
    alerts: &[QualityAlert],
    severity: Option<AlertSeverity>,
    include_resolved: bool,
) -> Vec<QualityAlert> {
    let mut visible: Vec<QualityAlert> = alerts
        .iter()
        .filter(|a| severity.map_or(true, |s| a.severity == s))
        .filter(|a| include_resolved || !a.resolved)
        .cloned()
        .collect();
    sort_alerts_by_severity(&mut visible);
    visible
}

pub fn severity_badge(severity: AlertSeverity) -> BadgeVariant {
    match severity {
        AlertSeverity::Critical => BadgeVariant::Destructive,
        AlertSeverity::Warning => BadgeVariant::Warning,
        AlertSeverity::Info => BadgeVariant::Outline,
    }
}

#[component]
pub fn Alerts() -> Element {
    let api = use_api();
    let mut severity = use_signal(|| None::<AlertSeverity>);
    let mut include_resolved = use_signal(|| false);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_alerts().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Quality Alerts" }
            }

            div { class: "alert-filters", role: "toolbar",
                for (value, label) in SEVERITY_FILTERS.iter().copied() {
                    Button {
                        key: "{label}",
                        variant: if *severity.read() == value { ButtonVariant::Primary } else { ButtonVariant::Outline },
                        onclick: move |_| severity.set(value),
                        "{label}"
                    }
                }
                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: include_resolved(),
                        onchange: move |evt: FormEvent| include_resolved.set(evt.checked()),
                    }
                    "Show resolved"
                }
            }

            match &*data.read() {
                Some(Ok(alerts)) => {
                    let visible = visible_alerts(alerts, severity(), include_resolved());
                    if visible.is_empty() {
                        rsx! {
                            EmptyState {
                                title: "No alerts",
                                message: "Nothing needs your attention for this filter.",
                            }
                        }
                    } else {
                        rsx! {
                            Card {
                                CardContent {
                                    ul { class: "alert-list",
                                        for alert in visible {
                                            AlertRow { key: "{alert.id}", alert: alert }
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

/// One alert line linking to the student it concerns.
#[component]
pub fn AlertRow(alert: QualityAlert) -> Element {
    let age = format_relative(&alert.created_at, &Utc::now());

    rsx! {
        li { class: "alert-row", "data-resolved": "{alert.resolved}",
            Badge { variant: severity_badge(alert.severity), "{alert.severity.as_str()}" }
            div { class: "alert-body",
                strong { "{alert.title}" }
                if !alert.message.is_empty() {
                    p { "{alert.message}" }
                }
                span { class: "muted",
                    Link { to: Route::StudentDetail { id: alert.student_id.clone() },
                        "{alert.student_name}"
                    }
                    " · {age}"
                }
            }
        }
    }
}
