use version_stamper_domain::{MetadataRecord, StampedDocument};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct StampOutcome {
    pub record: MetadataRecord,
    /// Metadata lines actually present, capped at [`MetadataRecord::FIELD_COUNT`].
    pub lines_read: usize,
    pub document: StampedDocument,
}
