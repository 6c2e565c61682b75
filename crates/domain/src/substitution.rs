use regex::bytes::{Captures, Regex};
use version_stamper_shared_kernel::{DomainError, DomainResult};

use crate::model::{MetadataRecord, Placeholder, StampedDocument, Template};

/// Literal, single-pass replacement of the active placeholders.
///
/// Tokens contain `$`, so each one is escaped before being joined into one
/// alternation. Values are returned from a closure replacer, which means a
/// value like `$1` or `$HASH$` is inserted verbatim and never re-scanned.
/// Matching works on bytes; nothing outside the tokens has to be valid UTF-8.
#[derive(Debug, Clone)]
pub struct Substituter {
    pattern: Regex,
}

impl Substituter {
    pub fn new() -> DomainResult<Self> {
        let alternation = Placeholder::ACTIVE
            .iter()
            .map(|p| regex::escape(p.token()))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).map_err(|err| DomainError::InvalidPattern {
            pattern: alternation.clone(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn apply(&self, template: &Template, record: &MetadataRecord) -> StampedDocument {
        let mut counts = [0usize; MetadataRecord::FIELD_COUNT];
        let bytes = self
            .pattern
            .replace_all(template.as_bytes(), |caps: &Captures<'_>| {
                let token = &caps[0];
                let placeholder = std::str::from_utf8(token).ok().and_then(Placeholder::from_token);
                match (placeholder, placeholder.and_then(|p| p.slot())) {
                    (Some(p), Some(slot)) if p.is_active() => {
                        counts[slot] += 1;
                        record.value_for(p).unwrap_or(token).to_vec()
                    }
                    _ => token.to_vec(),
                }
            })
            .into_owned();
        StampedDocument::new(bytes, counts)
    }
}
