use dioxus::prelude::*;
use shared_types::{tag_catalog, FilterOutcome, FilterState, LearningModule};
use shared_ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    EmptyState, PageHeader, PageTitle, SkeletonList,
};

use crate::components::{FilterBar, LoadError, NoMatches};
use crate::use_api;

/// Facilitator training modules.
#[component]
pub fn Learning() -> Element {
    let api = use_api();
    let filter = use_signal(FilterState::default);

    let mut data = use_resource(move || {
        let api = api.clone();
        async move { api.list_learning_modules().await }
    });

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Learning Modules" }
            }

            match &*data.read() {
                Some(Ok(modules)) => {
                    let state = filter.read().clone();
                    rsx! {
                        FilterBar {
                            filter: filter,
                            catalog: tag_catalog(modules),
                            placeholder: "Search modules...",
                        }
                        match state.outcome(modules) {
                            FilterOutcome::Matches(visible) => rsx! {
                                div { class: "card-grid",
                                    for module in visible {
                                        ModuleCard { key: "{module.id}", module: module.clone() }
                                    }
                                }
                            },
                            FilterOutcome::NoMatches => rsx! { NoMatches { filter: filter } },
                            FilterOutcome::NoItems => rsx! {
                                EmptyState {
                                    title: "No learning modules yet",
                                    message: "Training content will appear here once published.",
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
fn ModuleCard(module: LearningModule) -> Element {
    let duration = module.duration_label();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{module.title}" }
                CardDescription { "{module.description}" }
            }
            CardContent {
                if let Some(duration) = duration {
                    Badge { variant: BadgeVariant::Outline, "{duration}" }
                }
                if let Some(media) = &module.media {
                    a { class: "media-link", href: "{media.url}", target: "_blank", rel: "noopener noreferrer",
                        "Open {media.kind.label()}"
                    }
                }
            }
            CardFooter {
                for tag in module.tags.iter() {
                    Badge { key: "{tag}", variant: BadgeVariant::Secondary, "{tag}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn module_card_shows_duration() {
        let module = LearningModule {
            id: "lm-1".into(),
            title: "Person-Centered Planning".into(),
            description: "Foundations".into(),
            content: String::new(),
            tags: BTreeSet::from(["planning".to_string()]),
            duration_minutes: Some(90),
            media: None,
        };
        let html = dioxus_ssr::render_element(rsx! { ModuleCard { module: module } });
        assert!(html.contains("Person-Centered Planning"));
        assert!(html.contains("1 hr 30 min"));
        assert!(!html.contains("media-link"));
    }
}
