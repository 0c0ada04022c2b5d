//! Keyword-presence intent classifier.
//!
//! Maps a lowercased utterance to one of a fixed set of [`Intent`] categories
//! using substring membership tests evaluated in a fixed priority order.  The
//! ordering *is* the policy: an utterance containing both "open" and "time"
//! ("open time tracker") is an application launch, not a clock query, because
//! the launch-trigger check runs first.
//!
//! Matching is deliberately substring-based rather than word-boundary-based:
//! "open-source editor" satisfies the "open" trigger, and "opener" contains
//! "open".  Commands in the wild rely on this looseness, so it must not be
//! tightened to tokenized matching.

use serde::Serialize;
use tracing::debug;

use crate::error::ClassifyError;

/// Launch-trigger keywords, checked in this order when extracting the
/// application-name argument.
const TRIGGERS: [&str; 3] = ["open", "launch", "start"];

/// TLD fragments that qualify a token as a website argument.
const KNOWN_TLDS: [&str; 4] = [".com", ".org", ".net", ".io"];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The classified category of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Launch an application resolved through the registry.
    OpenApplication,
    /// Open a file from the well-known user directories.
    OpenFile,
    /// Open a website in the default browser.
    OpenWebsite,
    /// Render the registry aliases as a list.
    ListApplications,
    /// Report the current wall-clock time.
    GetTime,
    /// Report today's date.
    GetDate,
    /// Canned greeting reply.
    Greeting,
    /// Canned "how are you" reply.
    StatusCheck,
    /// Canned acknowledgement reply.
    Thanks,
    /// Terminate the run loop after a farewell.
    Exit,
    /// Static help text.
    Help,
    /// No category matched; the dispatcher answers with a fallback reply.
    Unknown,
}

/// The result of classifying one utterance: the intent plus the extracted
/// argument (application name, filename, or URL), when one was present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub intent: Intent,
    pub argument: Option<String>,
}

impl Classification {
    fn new(intent: Intent, argument: Option<String>) -> Self {
        Self { intent, argument }
    }

    fn bare(intent: Intent) -> Self {
        Self::new(intent, None)
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify an utterance.
///
/// Lowercases the input and walks the priority cascade, first match wins.
/// Returns [`ClassifyError::EmptyUtterance`] for empty or whitespace-only
/// input so callers can report "didn't catch that" without consulting the
/// dispatcher.
pub fn classify(utterance: &str) -> Result<Classification, ClassifyError> {
    if utterance.trim().is_empty() {
        return Err(ClassifyError::EmptyUtterance);
    }

    let lowered = utterance.to_lowercase();

    let classification = if TRIGGERS.iter().any(|t| lowered.contains(t)) {
        classify_launch(&lowered)
    } else if lowered.contains("time") {
        Classification::bare(Intent::GetTime)
    } else if lowered.contains("date") {
        Classification::bare(Intent::GetDate)
    } else if lowered.contains("list") && lowered.contains("application") {
        Classification::bare(Intent::ListApplications)
    } else if ["hello", "hi", "hey"].iter().any(|w| lowered.contains(w)) {
        Classification::bare(Intent::Greeting)
    } else if lowered.contains("how are you") {
        Classification::bare(Intent::StatusCheck)
    } else if lowered.contains("thank you") || lowered.contains("thanks") {
        Classification::bare(Intent::Thanks)
    } else if ["bye", "goodbye", "exit", "quit"]
        .iter()
        .any(|w| lowered.contains(w))
    {
        Classification::bare(Intent::Exit)
    } else if lowered.contains("help") {
        Classification::bare(Intent::Help)
    } else {
        Classification::bare(Intent::Unknown)
    };

    debug!(
        intent = ?classification.intent,
        argument = classification.argument.as_deref(),
        "utterance classified"
    );

    Ok(classification)
}

/// Sub-classify an utterance that contained a launch trigger.
///
/// "website" and "file" qualifiers are checked before the generic
/// application path, so "open website example.com" never reaches the
/// registry.
fn classify_launch(lowered: &str) -> Classification {
    if lowered.contains("website") {
        let url = lowered
            .split_whitespace()
            .find(|token| token.contains('.') && KNOWN_TLDS.iter().any(|tld| token.contains(tld)))
            .map(str::to_owned);
        return Classification::new(Intent::OpenWebsite, url);
    }

    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    if lowered.contains("file") {
        // Only the literal token "file" delimits the filename argument; a
        // substring hit ("profile") still lands here but yields no argument.
        let filename = tokens
            .iter()
            .position(|t| *t == "file")
            .map(|idx| tokens[idx + 1..].join(" "))
            .filter(|rest| !rest.is_empty());
        return Classification::new(Intent::OpenFile, filename);
    }

    // Generic application launch: the first trigger present as a token
    // delimits the argument.  A trigger present only as a substring
    // ("open-source") selects this branch but extracts nothing.
    for keyword in TRIGGERS {
        if let Some(idx) = tokens.iter().position(|t| *t == keyword) {
            let rest = tokens[idx + 1..].join(" ");
            let argument = (!rest.is_empty()).then_some(rest);
            return Classification::new(Intent::OpenApplication, argument);
        }
    }

    Classification::bare(Intent::OpenApplication)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
