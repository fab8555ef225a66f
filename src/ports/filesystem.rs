//! Filesystem port for file I/O operations.

use std::path::Path;

/// Provides the filesystem access the fetchers need.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists on the filesystem.
    ///
    /// Any error while inspecting the path (permission denied, a parent that
    /// is not a directory) reads as `false`.
    fn exists(&self, path: &Path) -> bool;
}
