use dioxus::prelude::*;

/// Search/filter bar: wraps the query input, tag toggles and clear button in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        div { class: "search-bar", role: "search", {children} }
    }
}
