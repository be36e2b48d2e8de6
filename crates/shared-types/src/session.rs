use serde::{Deserialize, Serialize};

/// Well-known role strings. Roles are free-form on the wire; these are the
/// values the dashboard declares guards against.
pub mod roles {
    pub const FACILITATOR: &str = "facilitator";
    pub const ADMIN: &str = "admin";
}

/// Authenticated user info (safe to send to client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthUser {
    /// First letters of the first two words of the display name, uppercased.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Current authentication state of the acting user.
///
/// Starts as `Loading`, moves once to `Anonymous` or `Authenticated` when the
/// session provider resolves, and returns to `Anonymous` on sign-out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "state")]
pub enum Session {
    #[default]
    Loading,
    Anonymous,
    Authenticated(AuthUser),
}

impl Session {
    /// Resolution transition: a provider answer becomes a settled session.
    pub fn from_user(user: Option<AuthUser>) -> Self {
        match user {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn sign_out(&mut self) {
        *self = Session::Anonymous;
    }
}
