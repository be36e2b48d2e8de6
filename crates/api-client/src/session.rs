//! Pluggable session providers.
//!
//! Production wires [`ApiClient`]; demos and tests wire [`SimulatedSession`].
//! Which one is used comes from `[session] provider` in `config.toml`.

use crate::client::ApiClient;
use shared_types::{AppConfig, AppError, AuthUser, Session, SessionConfig, SessionProviderKind};

/// Source of the acting user's identity.
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    /// `Ok(None)` means nobody is signed in.
    async fn resolve(&self) -> Result<Option<AuthUser>, AppError>;

    async fn sign_out(&self) -> Result<(), AppError>;
}

impl SessionProvider for ApiClient {
    async fn resolve(&self) -> Result<Option<AuthUser>, AppError> {
        self.current_user().await
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        ApiClient::sign_out(self).await
    }
}

/// Fixed local identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSession {
    user: Option<AuthUser>,
}

impl SimulatedSession {
    pub fn signed_in(user: AuthUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::signed_in(AuthUser {
            id: "simulated".to_string(),
            display_name: config.simulated_name.clone(),
            email: String::new(),
            role: config.simulated_role.clone(),
            avatar_url: None,
        })
    }
}

impl SessionProvider for SimulatedSession {
    async fn resolve(&self) -> Result<Option<AuthUser>, AppError> {
        Ok(self.user.clone())
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// The provider selected by configuration.
#[derive(Debug, Clone)]
pub enum SessionSource {
    Remote(ApiClient),
    Simulated(SimulatedSession),
}

impl SessionSource {
    pub fn from_config(config: &AppConfig, client: ApiClient) -> Self {
        match config.session.provider {
            SessionProviderKind::Remote => SessionSource::Remote(client),
            SessionProviderKind::Simulated => {
                tracing::warn!(
                    role = %config.session.simulated_role,
                    "using simulated session provider"
                );
                SessionSource::Simulated(SimulatedSession::from_config(&config.session))
            }
        }
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, SessionSource::Simulated(_))
    }
}

impl SessionProvider for SessionSource {
    async fn resolve(&self) -> Result<Option<AuthUser>, AppError> {
        match self {
            SessionSource::Remote(client) => client.resolve().await,
            SessionSource::Simulated(sim) => sim.resolve().await,
        }
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        match self {
            SessionSource::Remote(client) => SessionProvider::sign_out(client).await,
            SessionSource::Simulated(sim) => sim.sign_out().await,
        }
    }
}

/// Settle a `Loading` session from a provider. A provider failure leaves
/// the visitor anonymous; the gate then sends them to sign in.
pub async fn resolve_session<P: SessionProvider>(provider: &P) -> Session {
    match provider.resolve().await {
        Ok(user) => {
            tracing::info!(authenticated = user.is_some(), "session resolved");
            Session::from_user(user)
        }
        Err(e) => {
            tracing::warn!(error = %e, "session provider failed; treating visitor as anonymous");
            Session::Anonymous
        }
    }
}
