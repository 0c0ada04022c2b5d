//! Core error types.
//!
//! Only genuinely exceptional conditions are errors here.  An ambiguous
//! argument ("open file" with no filename) or a failed registry lookup is an
//! ordinary dispatch outcome surfaced as a status string, not an error; see
//! [`crate::dispatcher`].

/// Classification failure.
///
/// The classifier is total over non-empty input, so the only failure mode is
/// an empty (or whitespace-only) utterance, which the input collaborator
/// produces when capture fails.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// The utterance was empty or whitespace-only.  Callers surface this as
    /// the "didn't catch that" status without invoking the dispatcher.
    #[error("empty utterance")]
    EmptyUtterance,
}

/// Failure reported by a host collaborator (process launch, file/URL open).
///
/// Every variant is recovered locally by the dispatcher into a human-readable
/// status string; none terminate the run loop.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Spawning a process for an application launch was rejected by the OS.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Handing a file or URL to the platform's default opener failed.
    #[error("failed to open `{target}`: {source}")]
    OpenFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for host collaborator calls.
pub type HostResult<T> = std::result::Result<T, HostError>;
