use dioxus::prelude::*;

/// Terminal "nothing to show" panel with an optional action row.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] message: String,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { class: "empty-state-title", "{title}" }
            if !message.is_empty() {
                p { class: "empty-state-message", "{message}" }
            }
            if let Some(actions) = actions {
                div { class: "empty-state-actions", {actions} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_and_message() {
        let html = dioxus_ssr::render_element(rsx! {
            EmptyState { title: "No case studies yet", message: "Check back soon." }
        });
        assert!(html.contains("No case studies yet"));
        assert!(html.contains("Check back soon."));
        assert!(!html.contains("empty-state-actions"));
    }
}
