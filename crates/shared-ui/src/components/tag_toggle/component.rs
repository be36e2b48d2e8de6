use dioxus::prelude::*;

/// A pressable tag chip. Clicking reports the tag; the owner decides the new state.
#[component]
pub fn TagToggle(tag: String, selected: bool, on_toggle: EventHandler<String>) -> Element {
    let state = if selected { "on" } else { "off" };
    let label = tag.replace('_', " ");

    rsx! {
        button {
            class: "tag-toggle",
            r#type: "button",
            "data-state": state,
            "aria-pressed": "{selected}",
            onclick: move |_| on_toggle.call(tag.clone()),
            "{label}"
        }
    }
}

/// A row of tag chips drawn from a catalog.
#[component]
pub fn TagToggleGroup(
    tags: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "tag-toggle-group", role: "group", "aria-label": "Filter by tag",
            for tag in tags {
                TagToggle {
                    key: "{tag}",
                    selected: selected.contains(&tag),
                    tag: tag.clone(),
                    on_toggle: on_toggle,
                }
            }
        }
    }
}
