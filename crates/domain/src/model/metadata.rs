use crate::model::Placeholder;

/// Build provenance read from the scratch file.
///
/// Every field is opaque bytes: no encoding is assumed and the revision
/// counter is never parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    pub builder: Vec<u8>,
    pub branch: Vec<u8>,
    pub hash: Vec<u8>,
    pub date: Vec<u8>,
    pub revision: Vec<u8>,
}

impl MetadataRecord {
    pub const FIELD_COUNT: usize = Placeholder::ACTIVE.len();

    /// Builds a record from positional lines.
    ///
    /// Lines past the fifth are ignored and missing trailing lines become
    /// empty values.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        let mut fields = lines.into_iter().take(Self::FIELD_COUNT).map(Into::into);
        let mut next = || fields.next().unwrap_or_default();
        Self {
            builder: next(),
            branch: next(),
            hash: next(),
            date: next(),
            revision: next(),
        }
    }

    pub fn value_for(&self, placeholder: Placeholder) -> Option<&[u8]> {
        match placeholder {
            Placeholder::Builder => Some(&self.builder),
            Placeholder::Branch => Some(&self.branch),
            Placeholder::Hash => Some(&self.hash),
            Placeholder::Date => Some(&self.date),
            Placeholder::Revision => Some(&self.revision),
            Placeholder::Now => None,
        }
    }

    /// Active placeholders paired with their values, in file order.
    pub fn fields(&self) -> impl Iterator<Item = (Placeholder, &[u8])> + '_ {
        Placeholder::ACTIVE
            .into_iter()
            .filter_map(move |p| self.value_for(p).map(|value| (p, value)))
    }
}
