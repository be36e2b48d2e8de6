use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Which session provider the app wires at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionProviderKind {
    /// Ask the REST backend who is signed in.
    #[default]
    Remote,
    /// Use a fixed local user. Demo and test builds only.
    Simulated,
}

impl SessionProviderKind {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "simulated" => SessionProviderKind::Simulated,
            _ => SessionProviderKind::Remote,
        }
    }
}

/// `[api]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// `[session]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub provider: SessionProviderKind,
    #[serde(default = "default_simulated_role")]
    pub simulated_role: String,
    #[serde(default = "default_simulated_name")]
    pub simulated_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            provider: SessionProviderKind::default(),
            simulated_role: default_simulated_role(),
            simulated_name: default_simulated_name(),
        }
    }
}

fn default_simulated_role() -> String {
    crate::session::roles::FACILITATOR.to_string()
}

fn default_simulated_name() -> String {
    "Demo Facilitator".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so a missing or partial file still yields a
/// usable configuration pointing at a local backend.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
