use api_client::{load_config, ApiClient, SessionSource};
use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeSeed, ThemeState};

mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::{use_session_bootstrap, AuthState};
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend handles shared across all routes.
#[derive(Clone)]
pub struct Services {
    pub api: ApiClient,
    pub sessions: SessionSource,
}

/// Hook to access the REST client.
pub fn use_api() -> ApiClient {
    use_context::<Services>().api
}

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| {
        let config = load_config();
        let api = ApiClient::new(&config.api.base_url);
        let sessions = SessionSource::from_config(config, api.clone());
        tracing::info!(platform = client_platform(), "starting MyGoodLife");
        Services { api, sessions }
    });

    use_context_provider(AuthState::new);
    use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::default()),
    });

    use_session_bootstrap(services.sessions);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeSeed {}
        Router::<Route> {}
    }
}
