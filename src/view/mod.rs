//! View module.
//!
//! This module handles:
//! - View state (health, user roster, draft, loading flag)
//! - The view controller that syncs state with the backend
//! - Text rendering of the dashboard

pub mod controller;
pub mod render;
pub mod state;

pub use controller::ViewController;
pub use render::render_dashboard;
pub use state::{Draft, ViewState};
