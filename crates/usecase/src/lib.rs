//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads the inputs, stamps the template, writes the output
//! - [`dto`]: data returned across the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::StampOutcome;
pub use orchestrator::StampVersion;
