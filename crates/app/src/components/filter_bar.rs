use dioxus::prelude::*;
use shared_types::FilterState;
use shared_ui::components::{
    Button, ButtonVariant, EmptyState, Input, SearchBar, TagToggleGroup,
};

/// Search box plus tag chips bound to a page-owned [`FilterState`] signal.
///
/// Every keystroke and chip click writes the signal; the page recomputes its
/// visible subset from scratch on the next render.
///
/// ```rust,ignore
/// let filter = use_signal(FilterState::default);
/// rsx! {
///     FilterBar { filter, catalog: tag_catalog(&items), placeholder: "Search case studies..." }
/// }
/// ```
#[component]
pub fn FilterBar(
    filter: Signal<FilterState>,
    catalog: Vec<String>,
    #[props(default)] placeholder: String,
) -> Element {
    let state = filter.read().clone();
    let selected: Vec<String> = catalog
        .iter()
        .filter(|tag| state.is_selected(tag))
        .cloned()
        .collect();

    rsx! {
        div { class: "filter-bar",
            SearchBar {
                Input {
                    value: state.query.clone(),
                    placeholder: placeholder,
                    label: "",
                    on_input: move |evt: FormEvent| filter.write().set_query(evt.value()),
                }
                if !state.is_cleared() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| filter.write().clear(),
                        "Clear filters"
                    }
                }
            }
            TagToggleGroup {
                tags: catalog,
                selected: selected,
                on_toggle: move |tag: String| filter.write().toggle_tag(&tag),
            }
        }
    }
}

/// Shown when items exist but none pass the current filter.
#[component]
pub fn NoMatches(filter: Signal<FilterState>) -> Element {
    rsx! {
        EmptyState {
            title: "No results for this filter",
            message: "Try a different search or fewer tags.",
            actions: rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| filter.write().clear(),
                    "Clear filters"
                }
            },
        }
    }
}
