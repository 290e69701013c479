//! Filesystem-based document sink for native platforms.
//!
//! Documents are written into a single output directory. Names are plain file names:
//! the sink refuses anything that would resolve outside that directory.

use log::debug;
use simplepdf_traits::{DocumentSink, SinkError};
use std::path::{Component, Path, PathBuf};

/// A sink that writes each document to `<base>/<name>`.
///
/// The output directory is created on first store if it does not exist yet. Storing the
/// same name twice replaces the earlier file; a directory of that name is never replaced.
#[derive(Debug)]
pub struct FilesystemSink {
    base_path: PathBuf,
    written: Vec<PathBuf>,
}

impl FilesystemSink {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Returns the output directory for this sink.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Paths of every file written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Resolves a document name to a path inside the output directory.
    ///
    /// Returns `None` for absolute paths, empty names and names with `..` components.
    fn resolve_path_safe(&self, name: &str) -> Option<PathBuf> {
        let path = Path::new(name);
        if name.trim().is_empty() || path.is_absolute() {
            return None;
        }
        let escapes = path
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return None;
        }
        Some(self.base_path.join(path))
    }
}

impl DocumentSink for FilesystemSink {
    fn store(&mut self, name: &str, bytes: &[u8], mime_type: &str) -> Result<(), SinkError> {
        let full_path = self
            .resolve_path_safe(name)
            .ok_or_else(|| SinkError::InvalidName(name.to_string()))?;
        if full_path.is_dir() {
            return Err(SinkError::Rejected {
                name: name.to_string(),
                reason: format!("{} is a directory", full_path.display()),
            });
        }

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, bytes)?;
        debug!(
            "Stored '{}' ({} bytes, {}) at {}",
            name,
            bytes.len(),
            mime_type,
            full_path.display()
        );
        self.written.push(full_path);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "FilesystemSink"
    }
}
