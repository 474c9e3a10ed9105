//! Console dashboard client for the Full Stack DevOps user API.
//!
//! The backend exposes a small REST surface (`GET /health`, `GET /users`,
//! `POST /users`); this crate keeps a local view of that state and renders
//! it as text. All persistence and business logic live server-side: the
//! client holds the last successfully fetched snapshot plus any users it
//! has successfully created since, and nothing more.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Wire types, backend trait, HTTP client, mock backend
//! - [`view`]: View state, controller, and text rendering

pub mod api;
pub mod config;
pub mod error;
pub mod view;

pub use config::Config;
pub use error::{DashboardError, Result};
