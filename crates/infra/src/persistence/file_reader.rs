// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file, byte-for-byte.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = Self::open(path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Read up to `limit` lines, stripping `\n` or `\r\n`.
    ///
    /// Lines are raw bytes. Nothing past the last requested line is read.
    pub fn read_lines(path: &Path, limit: usize) -> std::io::Result<Vec<Vec<u8>>> {
        let mut reader = Self::open_buffered(path)?;
        let mut lines = Vec::with_capacity(limit);
        let mut buf = Vec::new();
        while lines.len() < limit {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lines.push(trim_line_ending(&buf).to_vec());
        }
        Ok(lines)
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
