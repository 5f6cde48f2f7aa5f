// Layout and surfaces
pub mod card;
pub mod page_header;
pub mod stat_tile;

// Controls
pub mod badge;
pub mod button;
pub mod form_select;
pub mod input;
pub mod progress;

// Feedback
pub mod toast;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use stat_tile::*;
pub use toast::*;
