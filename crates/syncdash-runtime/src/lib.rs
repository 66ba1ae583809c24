//! OS adapters for syncdash.
//!
//! Implements the core ports that need real processes.

#![deny(unsafe_code)]

mod launcher;

pub use launcher::DetachedLauncher;
