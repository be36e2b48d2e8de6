pub mod client;
pub mod config;
pub mod session;

pub use client::{resources, ApiClient};
pub use config::load_config;
pub use session::{resolve_session, SessionProvider, SessionSource, SimulatedSession};
