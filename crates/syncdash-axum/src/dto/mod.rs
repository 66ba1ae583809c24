//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types fix the JSON field names the dashboard page and external
//! monitors rely on.

pub mod action;
pub mod status;

pub use action::ActionResponse;
pub use status::{StatusDto, megabytes};
