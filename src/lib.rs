#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod logging;
pub mod version;

pub use version::VERSION;
