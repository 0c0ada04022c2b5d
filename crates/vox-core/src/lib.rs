//! Vox command-interpretation core.
//!
//! This crate holds the one part of the assistant with structure worth
//! documenting: mapping free-form utterances to host-machine actions.
//!
//! - **[`classifier`]** -- keyword-presence intent classifier over a fixed
//!   set of intents, evaluated in a fixed priority order.
//! - **[`registry`]** -- immutable platform-specific alias → launch-descriptor
//!   mapping, resolved by first-match substring containment.
//! - **[`dispatcher`]** -- turns a classification into at most one OS-facing
//!   action and a human-readable status string.
//! - **[`host`]** -- collaborator seams (process launch, file lookup) so the
//!   dispatcher can be exercised with fakes; real implementations live in
//!   `vox-host`.
//! - **[`reply`]** -- fixed reply sets, help text, and status constants.
//! - **[`error`]** -- typed failures via [`thiserror`].
//!
//! Everything is synchronous: the assistant blocks on one input per
//! iteration and performs at most one OS call before blocking again.

pub mod classifier;
pub mod dispatcher;
pub mod error;
pub mod host;
pub mod registry;
pub mod reply;

// Re-export the most commonly used types at the crate root.
pub use classifier::{classify, Classification, Intent};
pub use dispatcher::{DispatchResult, Dispatcher};
pub use error::{ClassifyError, HostError, HostResult};
pub use host::{FileLocator, Launcher};
pub use registry::{AppRegistry, LaunchSpec, Platform};
