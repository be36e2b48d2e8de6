use dioxus::prelude::*;

/// Bordered container for list items and dashboard panels.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
