use dioxus::prelude::*;
use shared_types::{tag_catalog, FilterOutcome, FilterState, PlanTemplate};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    EmptyState, PageHeader, PageTitle, SkeletonList,
};

use crate::components::{FilterBar, LoadError, NoMatches};
use crate::use_api;

#[component]
pub fn Templates() -> Element {
    let api = use_api();
    let filter = use_signal(FilterState::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_plan_templates().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Plan Templates" }
            }

            match &*data.read() {
                Some(Ok(templates)) => {
                    let state = filter.read().clone();
                    rsx! {
                        FilterBar {
                            filter: filter,
                            catalog: tag_catalog(templates),
                            placeholder: "Search templates...",
                        }
                        match state.outcome(templates) {
                            FilterOutcome::Matches(visible) => rsx! {
                                div { class: "card-grid",
                                    for template in visible {
                                        TemplateCard { key: "{template.id}", template: template.clone() }
                                    }
                                }
                            },
                            FilterOutcome::NoMatches => rsx! { NoMatches { filter: filter } },
                            FilterOutcome::NoItems => rsx! {
                                EmptyState {
                                    title: "No plan templates yet",
                                    message: "Templates shared by your program will appear here.",
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
fn TemplateCard(template: PlanTemplate) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{template.title}" }
                CardDescription { "{template.description}" }
            }
            if let Some(domain) = template.domain {
                CardContent {
                    Badge { variant: BadgeVariant::Primary, "{domain.label()}" }
                }
            }
            CardFooter {
                for tag in template.tags.iter() {
                    Badge { key: "{tag}", variant: BadgeVariant::Secondary, "{tag}" }
                }
            }
        }
    }
}
