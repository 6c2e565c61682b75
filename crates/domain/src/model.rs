pub mod metadata;
pub mod placeholder;
pub mod template;

pub use metadata::MetadataRecord;
pub use placeholder::Placeholder;
pub use template::{StampedDocument, Template};
