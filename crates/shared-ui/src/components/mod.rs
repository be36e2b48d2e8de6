pub mod badge;
pub mod button;
pub mod card;
pub mod empty_state;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod search_bar;
pub mod skeleton;
pub mod tag_toggle;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use empty_state::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use search_bar::*;
pub use skeleton::*;
pub use tag_toggle::*;
