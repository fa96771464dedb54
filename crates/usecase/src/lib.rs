//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`catalog`]: loading and validating the read-only dataset through a
//!   [`CountrySource`](country_table_ports::dataset::CountrySource)
//! - [`session`]: the event-driven view session that re-derives the visible
//!   page after every interaction
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod session;

pub use catalog::{Catalog, LoadCatalog};
pub use session::ViewSession;
