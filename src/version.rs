// src/version.rs
//! Version string reported by `stamp --version`.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
