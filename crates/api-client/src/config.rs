use shared_types::{AppConfig, SessionProviderKind};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
const CONFIG_PATH: &str = "config.toml";

/// Copy of `config.toml` compiled into the binary. Web builds have no
/// filesystem, so this is all they ever see.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

pub const ENV_API_URL: &str = "MYGOODLIFE_API_URL";
pub const ENV_SESSION: &str = "MYGOODLIFE_SESSION";

/// Parse config text, falling back to defaults on malformed input.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config; using defaults");
        AppConfig::default()
    })
}

/// Apply `MYGOODLIFE_*` overrides from `lookup`.
pub fn apply_env_overrides(mut config: AppConfig, lookup: impl Fn(&str) -> Option<String>) -> AppConfig {
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
        config.api.base_url = url;
    }
    if let Some(provider) = lookup(ENV_SESSION) {
        config.session.provider = SessionProviderKind::from_str_or_default(&provider);
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    let _ = dotenvy::dotenv();
    let base = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::debug!(error = %e, "{CONFIG_PATH} not readable; using embedded config");
            parse_config(EMBEDDED_CONFIG)
        }
    };
    apply_env_overrides(base, |key| std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    // Build-time overrides only.
    apply_env_overrides(parse_config(EMBEDDED_CONFIG), |key| match key {
        ENV_API_URL => option_env!("MYGOODLIFE_API_URL").map(str::to_string),
        ENV_SESSION => option_env!("MYGOODLIFE_SESSION").map(str::to_string),
        _ => None,
    })
}

/// Load configuration once and cache it for the process lifetime.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            api = %config.api.base_url,
            session = ?config.session.provider,
            "configuration loaded"
        );
        config
    })
}
