//! Action dispatcher.
//!
//! Takes a [`Classification`] and performs at most one OS-facing action
//! through the host collaborator seams, returning a human-readable status.
//! Every collaborator failure is recovered locally into a status string;
//! nothing here aborts the run loop.  The only loop-terminating outcome is
//! the [`DispatchResult::Farewell`] sentinel produced by the Exit intent.

use tracing::{debug, warn};

use crate::classifier::{Classification, Intent};
use crate::host::{FileLocator, Launcher};
use crate::registry::AppRegistry;
use crate::reply;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The outcome of dispatching one classified utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// A status message to present; the run loop continues.
    Reply(String),
    /// A farewell message; the run loop terminates after presenting it.
    Farewell(String),
}

impl DispatchResult {
    /// The message to present, for either variant.
    pub fn message(&self) -> &str {
        match self {
            Self::Reply(msg) | Self::Farewell(msg) => msg,
        }
    }

    /// Whether this result terminates the run loop.
    pub fn is_farewell(&self) -> bool {
        matches!(self, Self::Farewell(_))
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Stateless-per-call dispatcher over an immutable registry and the host
/// collaborators.
pub struct Dispatcher<L, F> {
    registry: AppRegistry,
    launcher: L,
    files: F,
}

impl<L: Launcher, F: FileLocator> Dispatcher<L, F> {
    /// Create a dispatcher over a built registry and host collaborators.
    pub fn new(registry: AppRegistry, launcher: L, files: F) -> Self {
        Self {
            registry,
            launcher,
            files,
        }
    }

    /// The registry this dispatcher resolves applications against.
    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Dispatch one classified utterance.
    pub fn dispatch(&self, classification: &Classification) -> DispatchResult {
        debug!(intent = ?classification.intent, "dispatching");

        match classification.intent {
            Intent::OpenApplication => self.open_application(classification.argument.as_deref()),
            Intent::OpenFile => self.open_file(classification.argument.as_deref()),
            Intent::OpenWebsite => self.open_website(classification.argument.as_deref()),
            Intent::ListApplications => self.list_applications(),
            Intent::GetTime => {
                let now = chrono::Local::now();
                reply_with(format!("The current time is {}.", now.format("%I:%M %p")))
            }
            Intent::GetDate => {
                let now = chrono::Local::now();
                reply_with(format!("Today is {}.", now.format("%A, %B %d, %Y")))
            }
            Intent::Greeting => reply_with(reply::pick(&reply::GREETING_REPLIES)),
            Intent::StatusCheck => reply_with(reply::pick(&reply::STATUS_REPLIES)),
            Intent::Thanks => reply_with(reply::pick(&reply::THANKS_REPLIES)),
            Intent::Exit => DispatchResult::Farewell(reply::FAREWELL.to_owned()),
            Intent::Help => reply_with(reply::HELP_TEXT),
            Intent::Unknown => reply_with(reply::pick(&reply::FALLBACK_REPLIES)),
        }
    }

    // -- Action branches ----------------------------------------------------

    fn open_application(&self, argument: Option<&str>) -> DispatchResult {
        let Some(name) = argument else {
            return reply_with("Please specify what you want to open.");
        };

        match self.registry.resolve(name) {
            Some((alias, spec)) => match self.launcher.launch(spec) {
                Ok(()) => {
                    debug!(alias, "application launched");
                    reply_with(format!("Opening {alias}."))
                }
                Err(e) => {
                    warn!(alias, error = %e, "application launch failed");
                    reply_with(format!("Sorry, I couldn't open {name}."))
                }
            },
            // No registry match: try the argument as a command directly.
            None => match self.launcher.launch_raw(name) {
                Ok(()) => reply_with(format!("Attempting to open {name}.")),
                Err(e) => {
                    warn!(command = name, error = %e, "raw launch failed");
                    reply_with(format!("I don't know how to open {name}."))
                }
            },
        }
    }

    fn open_file(&self, argument: Option<&str>) -> DispatchResult {
        let Some(needle) = argument else {
            return reply_with("Please specify which file you want to open.");
        };

        let Some(path) = self.files.locate(needle) else {
            debug!(needle, "no matching file in user directories");
            return reply_with(format!("Couldn't find a file named {needle}."));
        };

        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| needle.to_owned());

        match self.launcher.open_path(&path) {
            Ok(()) => reply_with(format!("Opening {display_name}.")),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file open failed");
                reply_with(format!("Found {display_name} but couldn't open it."))
            }
        }
    }

    fn open_website(&self, argument: Option<&str>) -> DispatchResult {
        let Some(website) = argument else {
            return reply_with("Please specify which website you want to open.");
        };

        let url = normalize_url(website);

        match self.launcher.open_url(&url) {
            Ok(()) => reply_with(format!("Opening {url}.")),
            Err(e) => {
                warn!(url = %url, error = %e, "website open failed");
                reply_with("Couldn't open the website.")
            }
        }
    }

    fn list_applications(&self) -> DispatchResult {
        let mut listing = String::from("Available applications:");
        for alias in self.registry.aliases() {
            listing.push_str("\n   - ");
            listing.push_str(alias);
        }
        reply_with(listing)
    }
}

/// Prefix `https://` when the argument carries no explicit scheme.
fn normalize_url(website: &str) -> String {
    if website.starts_with("http://") || website.starts_with("https://") {
        website.to_owned()
    } else {
        format!("https://{website}")
    }
}

fn reply_with(msg: impl Into<String>) -> DispatchResult {
    DispatchResult::Reply(msg.into())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
