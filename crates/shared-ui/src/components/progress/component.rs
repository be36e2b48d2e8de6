use dioxus::prelude::*;

/// Horizontal progress bar for a 0-100 percentage. Out-of-range values are clamped.
#[component]
pub fn ProgressBar(value: f64, #[props(default)] label: String) -> Element {
    let pct = value.clamp(0.0, 100.0).round() as u32;

    rsx! {
        div { class: "progress-row",
            if !label.is_empty() {
                span { class: "progress-label", "{label}" }
            }
            div {
                class: "progress",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{pct}",
                div { class: "progress-indicator", style: "width: {pct}%" }
            }
            span { class: "progress-value", "{pct}%" }
        }
    }
}
