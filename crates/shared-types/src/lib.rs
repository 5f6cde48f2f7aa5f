pub mod error;
pub mod config;

// Session and navigation
pub mod models;
pub mod navigation;
pub mod session;

// Dashboard domains
pub mod admin;
pub mod attendance;
pub mod qr;
pub mod teacher;

pub use error::*;
pub use config::*;
pub use models::*;
pub use navigation::*;
pub use session::*;

pub use admin::*;
pub use attendance::*;
pub use qr::QrPayload;
pub use teacher::*;
