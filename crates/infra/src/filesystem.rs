// crates/infra/src/filesystem.rs
use std::path::Path;

use tracing::debug;
use version_stamper_ports::filesystem::{ContentSink, ContentSource};
use version_stamper_shared_kernel::{InfrastructureError, Result};

use crate::persistence::{FileReader, FileWriter};

/// Ports backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl ContentSource for LocalFileSystem {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let bytes = FileReader::read_to_end(path).map_err(|e| InfrastructureError::read(path, e))?;
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Ok(bytes)
    }

    fn read_lines(&self, path: &Path, limit: usize) -> Result<Vec<Vec<u8>>> {
        let lines = FileReader::read_lines(path, limit).map_err(|e| InfrastructureError::read(path, e))?;
        debug!("read {} line(s) from {}", lines.len(), path.display());
        Ok(lines)
    }
}

impl ContentSink for LocalFileSystem {
    fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        FileWriter::atomic_write(path, bytes).map_err(|e| InfrastructureError::write(path, e))?;
        debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}
