use dioxus::prelude::*;
use shared_types::{tag_catalog, CaseStudy, FilterOutcome, FilterState};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    EmptyState, PageHeader, PageTitle, SkeletonList,
};

use crate::components::{FilterBar, LoadError, NoMatches};
use crate::routes::Route;
use crate::use_api;

#[component]
pub fn CaseStudyList() -> Element {
    let api = use_api();
    let filter = use_signal(FilterState::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_case_studies().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Case Studies" }
            }

            match &*data.read() {
                Some(Ok(studies)) => {
                    let state = filter.read().clone();
                    rsx! {
                        FilterBar {
                            filter: filter,
                            catalog: tag_catalog(studies),
                            placeholder: "Search case studies...",
                        }
                        match state.outcome(studies) {
                            FilterOutcome::Matches(visible) => rsx! {
                                div { class: "card-grid",
                                    for study in visible {
                                        CaseStudyCard { key: "{study.id}", study: study.clone() }
                                    }
                                }
                            },
                            FilterOutcome::NoMatches => rsx! { NoMatches { filter: filter } },
                            FilterOutcome::NoItems => rsx! {
                                EmptyState {
                                    title: "No case studies yet",
                                    message: "Published case studies will appear here.",
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
fn CaseStudyCard(study: CaseStudy) -> Element {
    rsx! {
        Link { to: Route::CaseStudyDetail { id: study.id.clone() }, class: "card-link",
            Card {
                CardHeader {
                    CardTitle { "{study.title}" }
                    CardDescription { "{study.description}" }
                }
                if let Some(media) = &study.media {
                    CardContent {
                        Badge { variant: BadgeVariant::Outline, "{media.kind.label()}" }
                    }
                }
                CardFooter {
                    for tag in study.tags.iter() {
                        Badge { key: "{tag}", variant: BadgeVariant::Secondary, "{tag}" }
                    }
                }
            }
        }
    }
}
