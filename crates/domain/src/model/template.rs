use memchr::memmem;

use crate::model::{MetadataRecord, Placeholder};

/// Raw template bytes, held unmodified until they are stamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    bytes: Vec<u8>,
}

impl Template {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of non-overlapping occurrences of `placeholder`.
    pub fn occurrences(&self, placeholder: Placeholder) -> usize {
        memmem::find_iter(&self.bytes, placeholder.token()).count()
    }
}

/// Result of stamping a template with a [`MetadataRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampedDocument {
    bytes: Vec<u8>,
    counts: [usize; MetadataRecord::FIELD_COUNT],
}

impl StampedDocument {
    pub(crate) fn new(bytes: Vec<u8>, counts: [usize; MetadataRecord::FIELD_COUNT]) -> Self {
        Self { bytes, counts }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// How many times `placeholder` was replaced. Always zero for inert tokens.
    pub fn count_for(&self, placeholder: Placeholder) -> usize {
        placeholder.slot().map_or(0, |slot| self.counts[slot])
    }

    pub fn total_substitutions(&self) -> usize {
        self.counts.iter().sum()
    }
}
