//! Route access gate.
//!
//! The decision is a pure function of the current [`Session`] and the
//! route's [`RouteGuard`]. Callers re-evaluate on every render; a decision
//! must never be cached across session transitions.

use crate::error::AppError;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where anonymous visitors are sent.
pub const AUTH_PATH: &str = "/auth";

/// Declarative access requirement attached to a protected route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteGuard {
    pub path: String,
    /// `None` admits any authenticated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<String>,
}

impl RouteGuard {
    pub fn authenticated(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            required_role: None,
        }
    }

    pub fn requiring(mut self, role: impl Into<String>) -> Self {
        self.required_role = Some(role.into());
        self
    }
}

/// What the router should do with a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    ShowLoading,
    RenderRoute,
    RedirectTo(String),
    ShowForbidden(String),
}

impl AccessDecision {
    /// Why the route is not rendered, if it isn't.
    pub fn denial(&self) -> Option<AccessDenial> {
        match self {
            AccessDecision::ShowLoading => Some(AccessDenial::SessionUnresolved),
            AccessDecision::RedirectTo(_) => Some(AccessDenial::Unauthorized),
            AccessDecision::ShowForbidden(role) => Some(AccessDenial::Forbidden {
                required_role: role.clone(),
            }),
            AccessDecision::RenderRoute => None,
        }
    }
}

/// Recoverable reasons a protected view is withheld.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenial {
    /// Transient; the session provider has not answered yet.
    SessionUnresolved,
    Unauthorized,
    Forbidden { required_role: String },
}

impl fmt::Display for AccessDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDenial::SessionUnresolved => write!(f, "Checking your session."),
            AccessDenial::Unauthorized => write!(f, "Sign-in required."),
            AccessDenial::Forbidden { required_role } => {
                write!(f, "This page requires the {required_role} role.")
            }
        }
    }
}

impl From<AccessDenial> for AppError {
    fn from(denial: AccessDenial) -> Self {
        match denial {
            AccessDenial::Forbidden { .. } => AppError::forbidden(denial.to_string()),
            _ => AppError::unauthorized(denial.to_string()),
        }
    }
}

/// Decide how to handle a request for `guard` under `session`.
///
/// Rules apply in order: unresolved session, anonymous, role mismatch,
/// otherwise render. Role comparison is exact string equality.
pub fn evaluate(session: &Session, guard: &RouteGuard) -> AccessDecision {
    let user = match session {
        Session::Loading => return AccessDecision::ShowLoading,
        Session::Anonymous => return AccessDecision::RedirectTo(AUTH_PATH.to_string()),
        Session::Authenticated(user) => user,
    };

    match &guard.required_role {
        Some(required) if user.role != *required => AccessDecision::ShowForbidden(required.clone()),
        _ => AccessDecision::RenderRoute,
    }
}
