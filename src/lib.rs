//! # Chalkboard
//!
//! Headless content and session core for a small institute's marketing
//! site: an optimistic content cache over a hosted record/blob backend,
//! page-navigation state, overlay visibility, and an auth session with a
//! configuration-gated demo bypass. Rendering is someone else's job; this
//! crate only produces the state a view layer consumes.
//!
//! The site must keep working when the backend is absent, unreachable, or
//! unprovisioned: every collection falls back to bundled content, and
//! mutations degrade to transient notices instead of errors.
//!
//! ## Library Usage
//!
//! ```rust,ignore
//! use chalkboard::config::StoreConfig;
//! use chalkboard::nav::{NavOptions, Page};
//! use chalkboard::site::Site;
//!
//! let config = StoreConfig::from_env()?;
//! let mut site = Site::connect(&config)?;
//! site.start().await;
//!
//! let scroll = site.nav.navigate(Page::Courses, NavOptions::default());
//! // render site.content.courses, then perform `scroll`
//! ```

pub mod auth;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod modals;
pub mod nav;
pub mod remote;
pub mod site;
pub mod types;
