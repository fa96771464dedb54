// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod dataset;
pub mod persistence;

pub use dataset::{BundledDataset, FileDataset};
