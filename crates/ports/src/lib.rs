//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`dataset`]: where the country records come from (bundled JSON, a file on disk)
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;
