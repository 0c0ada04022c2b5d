//! File lookup across the well-known user directories.
//!
//! The search order is fixed: Desktop, then Documents, then Downloads.
//! Within a directory, entries are taken in directory-listing order; the
//! first filename containing the needle as a case-insensitive substring
//! wins.  Directories that do not exist are skipped silently.

use std::path::PathBuf;

use tracing::debug;

use vox_core::FileLocator;

/// File-locator collaborator over Desktop, Documents, and Downloads.
#[derive(Debug, Clone)]
pub struct UserDirs {
    search_dirs: Vec<PathBuf>,
}

impl UserDirs {
    /// Resolve the three search directories from the host's user profile.
    /// Directories the platform does not define are simply absent.
    #[must_use]
    pub fn discover() -> Self {
        let search_dirs = [
            dirs::desktop_dir(),
            dirs::document_dir(),
            dirs::download_dir(),
        ]
        .into_iter()
        .flatten()
        .collect();
        Self { search_dirs }
    }

    /// Build a locator over an explicit directory list, in search order.
    #[must_use]
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    /// The directories searched, in order.
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}

impl FileLocator for UserDirs {
    fn locate(&self, needle: &str) -> Option<PathBuf> {
        let needle = needle.to_lowercase();

        for dir in &self.search_dirs {
            let Ok(entries) = std::fs::read_dir(dir) else {
                continue;
            };

            for entry in entries.flatten() {
                let name = entry.file_name();
                if name.to_string_lossy().to_lowercase().contains(&needle) {
                    let path = entry.path();
                    debug!(needle, path = %path.display(), "file located");
                    return Some(path);
                }
            }
        }

        debug!(needle, "no file matched in any search directory");
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
