//! Chat form stories
//!
//! A stateless chat input form that submits through a caller-supplied
//! fetcher, a catalog of stories exercising the ways that fetcher can be
//! supplied, and an Axum server that renders and exercises those stories.
//!
//! # Modules
//!
//! - [`ui`]: Markup tree, host document, components and the chat form
//! - [`stories`]: Story catalog with arg merging and controls export
//! - [`server`]: HTTP routes for browsing and submitting stories
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`error`]: Crate error type

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod server;
pub mod stories;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::stories::Catalog;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Stories served by the application.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Bundle configuration and catalog for the router.
    #[must_use]
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }
}
