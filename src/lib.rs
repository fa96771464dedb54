// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod interactive;
pub mod logging;
pub mod presentation;

pub use config::{Config, OutputFormat, RunMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
