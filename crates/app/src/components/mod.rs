pub mod filter_bar;
pub mod load_error;

pub use filter_bar::{FilterBar, NoMatches};
pub use load_error::LoadError;
