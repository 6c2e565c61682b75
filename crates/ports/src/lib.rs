//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: reading the metadata and template bytes, writing the
//!   stamped output
//!
//! These ports keep the use case independent of where the bytes live.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
