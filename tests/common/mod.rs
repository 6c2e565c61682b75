// tests/common/mod.rs
//! Shared helpers for driving the `stamp` binary.

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
