use dioxus::prelude::*;
use shared_types::{AppErrorKind, CaseStudy};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    EmptyState, PageActions, PageHeader, PageTitle, SkeletonList,
};

use crate::components::LoadError;
use crate::format_helpers::paragraphs;
use crate::routes::Route;
use crate::use_api;

#[component]
pub fn CaseStudyDetail(id: String) -> Element {
    let api = use_api();
    let study_id = id.clone();

    let mut data = use_resource(move || {
        let api = api.clone();
        let id = study_id.clone();
        async move { api.get_case_study(&id).await }
    });

    rsx! {
        div { class: "container",
            match &*data.read() {
                Some(Ok(study)) => rsx! {
                    PageHeader {
                        PageTitle { "{study.title}" }
                        PageActions {
                            Link { to: Route::CaseStudyList {},
                                Button { variant: ButtonVariant::Secondary, "Back to List" }
                            }
                        }
                    }
                    CaseStudyBody { study: study.clone() }
                },
                Some(Err(e)) if e.kind == AppErrorKind::NotFound => rsx! {
                    EmptyState {
                        title: "Case study not found",
                        message: "It may have been removed or the link is wrong.",
                        actions: rsx! {
                            Link { to: Route::CaseStudyList {},
                                Button { "Back to List" }
                            }
                        },
                    }
                },
                Some(Err(e)) => rsx! {
                    LoadError { error: e.clone(), on_retry: move |_| data.restart() }
                },
                None => rsx! { SkeletonList { rows: 4 } },
            }
        }
    }
}

#[component]
fn CaseStudyBody(study: CaseStudy) -> Element {
    rsx! {
        if !study.description.is_empty() {
            p { class: "lead", "{study.description}" }
        }
        if !study.tags.is_empty() {
            div { class: "tag-row",
                for tag in study.tags.iter() {
                    Badge { key: "{tag}", variant: BadgeVariant::Secondary, "{tag}" }
                }
            }
        }
        if let Some(media) = &study.media {
            Card {
                CardHeader {
                    CardTitle { "{media.kind.label()}" }
                }
                CardContent {
                    a { href: "{media.url}", target: "_blank", rel: "noopener noreferrer",
                        "{media.caption.as_deref().unwrap_or(&media.url)}"
                    }
                }
            }
        }
        article { class: "prose",
            for (i, paragraph) in paragraphs(&study.content).into_iter().enumerate() {
                p { key: "{i}", "{paragraph}" }
            }
        }
    }
}
