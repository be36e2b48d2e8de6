use crate::auth::use_auth;
use crate::routes::{post_sign_in_route, Route};
use crate::Services;
use api_client::resolve_session;
use dioxus::prelude::*;
use shared_types::{AppError, Session};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
};
use std::collections::HashMap;

/// Reject obviously incomplete credentials before a round trip.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    let mut errors = HashMap::new();
    if !email.contains('@') {
        errors.insert("email".to_string(), "Enter a valid email address".to_string());
    }
    if password.is_empty() {
        errors.insert("password".to_string(), "Password is required".to_string());
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Please fix the highlighted fields", errors))
    }
}

/// Sign-in page. Accepts an optional `redirect` query param; after sign-in,
/// navigates there instead of the dashboard.
#[component]
pub fn SignIn(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let services: Services = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);
    let go_to_destination = move || {
        navigator().replace(post_sign_in_route(redirect_target.read().as_deref()));
    };

    // Already signed in (or resolved while this page was open).
    use_effect(move || {
        if auth.session.read().is_authenticated() {
            go_to_destination();
        }
    });

    let api = services.api.clone();
    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());
            if let Err(e) = validate_credentials(&email(), &password()) {
                field_errors.set(e.field_errors.clone());
                error_msg.set(Some(e.user_message()));
                return;
            }

            loading.set(true);
            match api.sign_in(&email(), &password()).await {
                Ok(user) => auth.set_user(user),
                Err(e) => {
                    tracing::warn!(error = %e, "sign-in failed");
                    field_errors.set(e.field_errors.clone());
                    error_msg.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        }
    };

    let sessions = services.sessions.clone();
    let continue_simulated = move |_| {
        let sessions = sessions.clone();
        spawn(async move {
            let session = resolve_session(&sessions).await;
            auth.session.set(session);
        });
    };

    let simulated_name = api_client::load_config().session.simulated_name.clone();
    let is_loading_session = matches!(*auth.session.read(), Session::Loading);

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "MyGoodLife facilitator dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    if is_loading_session {
                        p { class: "muted", "Checking your session..." }
                    } else if services.sessions.is_simulated() {
                        p { "Demo mode: no account needed." }
                        Button {
                            onclick: continue_simulated,
                            "Continue as {simulated_name}"
                        }
                    } else {
                        form { onsubmit: handle_sign_in,
                            div { class: "auth-field",
                                Input {
                                    label: "Email",
                                    input_type: "email",
                                    placeholder: "you@example.org",
                                    value: email(),
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                }
                                if let Some(msg) = field_errors.read().get("email") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }
                            div { class: "auth-field",
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                if let Some(msg) = field_errors.read().get("password") {
                                    span { class: "field-error", "{msg}" }
                                }
                            }
                            Button {
                                button_type: "submit",
                                disabled: loading(),
                                if loading() { "Signing in..." } else { "Sign In" }
                            }
                        }
                    }
                }
            }
        }
    }
}
