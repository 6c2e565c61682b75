// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use version_stamper_shared_kernel::Result;

/// The three paths a single stamping run works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampPlan {
    pub metadata: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

/// Port for loading the inputs as raw bytes.
pub trait ContentSource {
    /// Read the whole file, byte-for-byte.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read at most `limit` lines, without their terminators.
    ///
    /// Reading stops once `limit` lines have been consumed; a shorter file
    /// simply yields fewer lines. No encoding is assumed.
    fn read_lines(&self, path: &Path, limit: usize) -> Result<Vec<Vec<u8>>>;
}

/// Port for persisting the stamped document.
pub trait ContentSink {
    /// Create or replace the file at `path` with `bytes`.
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()>;
}
