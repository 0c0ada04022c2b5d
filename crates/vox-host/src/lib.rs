//! Host-machine collaborators for Vox.
//!
//! Concrete implementations of the seams defined in `vox_core::host`, plus
//! the input/output collaborators the run loop wires together:
//!
//! - **[`launcher`]** -- per-platform process launch (direct spawn, shell
//!   `start` indirection, macOS `open -a`) and default-handler opens for
//!   files and URLs.
//! - **[`files`]** -- file lookup across the Desktop, Documents, and
//!   Downloads user directories.
//! - **[`speech`]** -- spoken output on top of the host's synthesizer
//!   engine, degrading to print-only when no engine is present.
//! - **[`input`]** -- text and voice utterance sources and the startup
//!   capability negotiation between them.

pub mod files;
pub mod input;
pub mod launcher;
pub mod speech;

mod util;

pub use files::UserDirs;
pub use input::{negotiate, InputCapability, TextInput, VoiceInput};
pub use launcher::ProcessLauncher;
pub use speech::Speaker;
