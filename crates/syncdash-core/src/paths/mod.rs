//! Log directory preparation.
//!
//! The sync job and the dashboard share a log directory; it is created at
//! startup so the server log can be opened before the first request.

mod ensure;
mod error;

pub use ensure::ensure_parent_dir;
pub use error::PathError;
