//! Axum web adapter for syncdash: routes, handlers, the dashboard page and
//! the server composition root.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used only by the integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use dotenvy as _;

pub mod bootstrap;
pub mod cli;
pub mod dto;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;
pub mod telemetry;

// Re-export primary types
pub use bootstrap::{AxumContext, bind_listener, bootstrap, start_server};
pub use cli::Cli;
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
pub use telemetry::init_tracing;
