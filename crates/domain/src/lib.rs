#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod substitution;

pub use model::{MetadataRecord, Placeholder, StampedDocument, Template};
pub use substitution::Substituter;
