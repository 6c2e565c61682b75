// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::{File, OpenOptions},
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    ///
    /// The result matches what opening `path` for writing would allow:
    /// - a symlink is written through in place, so the link survives;
    /// - an existing file that cannot be opened for writing is an error;
    /// - when the directory refuses the temp file, an existing writable
    ///   target is rewritten in place.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        let path = path.as_ref();
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => return Self::write_in_place(path, data),
            Ok(meta) if meta.is_file() => {
                OpenOptions::new().write(true).open(path)?;
            }
            _ => {}
        }

        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // The temp file must share the target's directory for the rename to be atomic.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = match File::create(&tmp) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::PermissionDenied && path.is_file() => {
                return Self::write_in_place(path, data);
            }
            Err(e) => return Err(e),
        };

        let result = Self::write_then_rename(file, &tmp, path, data);
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }

    fn write_in_place(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = Self::create(path)?;
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }

    fn write_then_rename(file: File, tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        drop(w);

        fs::rename(tmp, path)
    }
}
