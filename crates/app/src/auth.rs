use api_client::{resolve_session, SessionProvider, SessionSource};
use dioxus::prelude::*;
use shared_types::{AuthUser, Session};

/// Global authentication state.
///
/// Only the session bootstrap, the sign-in page and sign-out write to it;
/// the route gate reads it on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::Loading),
        }
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.read().user().cloned()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        tracing::info!(user_id = %user.id, "session authenticated");
        self.session.set(Session::Authenticated(user));
    }

    pub fn sign_out(&mut self) {
        self.session.write().sign_out();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Resolve the session once from the configured provider. Runs on first render only.
pub fn use_session_bootstrap(sessions: SessionSource) {
    let mut auth = use_auth();
    use_hook(move || {
        spawn(async move {
            let session = resolve_session(&sessions).await;
            auth.session.set(session);
        });
    });
}

/// Sign out locally right away and tell the provider in the background.
pub fn sign_out(mut auth: AuthState, sessions: SessionSource) {
    auth.sign_out();
    spawn(async move {
        if let Err(e) = sessions.sign_out().await {
            tracing::warn!(error = %e, "provider sign-out failed");
        }
    });
}

/// Display name and initials for the navbar; "Guest" before sign-in.
pub fn profile_labels(session: &Session) -> (String, String) {
    match session.user() {
        Some(user) => (user.display_name.clone(), user.initials()),
        None => ("Guest".to_string(), "?".to_string()),
    }
}
