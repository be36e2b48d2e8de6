use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::components::{Button, ButtonVariant, Card, CardContent};

/// Inline panel for a failed fetch. Retrying is always the user's call.
#[component]
pub fn LoadError(error: AppError, on_retry: EventHandler<()>) -> Element {
    rsx! {
        Card { class: "load-error",
            CardContent {
                p { role: "alert", "{error.user_message()}" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
