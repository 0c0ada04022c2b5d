//! Host collaborator seams.
//!
//! The dispatcher performs its OS-facing side effects through these traits so
//! the command-interpretation core stays testable with fakes.  The concrete
//! platform implementations live in the `vox-host` crate.

use std::path::{Path, PathBuf};

use crate::error::HostResult;
use crate::registry::LaunchSpec;

/// Process-launch collaborator.
///
/// Each call reports success or failure only; the spawned process is
/// detached and never awaited.
pub trait Launcher {
    /// Launch an application from a registry descriptor.
    fn launch(&self, spec: &LaunchSpec) -> HostResult<()>;

    /// Fallback: attempt to launch the raw argument directly as a command.
    fn launch_raw(&self, command: &str) -> HostResult<()>;

    /// Open a file with the platform's default handler.
    fn open_path(&self, path: &Path) -> HostResult<()>;

    /// Open a URL in the platform's default browser.
    fn open_url(&self, url: &str) -> HostResult<()>;
}

/// Filesystem-query collaborator over the well-known user directories.
pub trait FileLocator {
    /// Find the first file whose name contains `needle` case-insensitively,
    /// searching Desktop, then Documents, then Downloads, in directory-listing
    /// order within each.
    fn locate(&self, needle: &str) -> Option<PathBuf>;
}
