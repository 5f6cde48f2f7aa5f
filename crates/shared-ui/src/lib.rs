//! Presentation components shared by the attendance dashboards.

pub mod components;

pub use components::*;
