pub mod error;
pub mod config;

// Session and route access
pub mod access;
pub mod session;

// Client-side list narrowing
pub mod filter;

// MyGoodLife domain records
pub mod alert;
pub mod content;
pub mod student;

pub use error::*;
pub use config::*;

pub use access::*;
pub use session::*;

pub use filter::*;

pub use alert::*;
pub use content::*;
pub use student::*;
