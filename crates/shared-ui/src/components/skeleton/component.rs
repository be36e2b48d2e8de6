use dioxus::prelude::*;

/// Loading placeholder with animated pulse.
#[component]
pub fn Skeleton() -> Element {
    rsx! {
        div { class: "skeleton" }
    }
}

/// A stack of `rows` skeletons, shown while a collection is being fetched.
#[component]
pub fn SkeletonList(#[props(default = 3)] rows: usize) -> Element {
    rsx! {
        div { class: "loading", "aria-busy": "true",
            for _ in 0..rows {
                Skeleton {}
            }
        }
    }
}
