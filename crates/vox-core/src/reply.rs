//! Canned conversational replies and static texts.
//!
//! Each conversational category carries a fixed 3-element reply set; the
//! dispatcher picks one uniformly at random per response.

use rand::seq::SliceRandom;

/// Replies for [`crate::Intent::Greeting`].
pub const GREETING_REPLIES: [&str; 3] = [
    "Hello! How can I help you?",
    "Hi there!",
    "Hey! What can I do for you?",
];

/// Replies for [`crate::Intent::StatusCheck`].
pub const STATUS_REPLIES: [&str; 3] = [
    "I'm doing well, thank you!",
    "I'm great! How are you?",
    "All systems working perfectly!",
];

/// Replies for [`crate::Intent::Thanks`].
pub const THANKS_REPLIES: [&str; 3] = ["You're welcome!", "My pleasure!", "Anytime!"];

/// Fallback replies for [`crate::Intent::Unknown`].
pub const FALLBACK_REPLIES: [&str; 3] = [
    "I can open applications or files for you. Try 'open calculator' or 'help' for more options.",
    "Say 'help' to see what I can do!",
    "Try saying 'open notepad' or 'what time is it?'",
];

/// Farewell presented once before the run loop terminates.
pub const FAREWELL: &str = "Goodbye! Have a great day!";

/// Status for empty input (the InputUnavailable condition).
pub const DIDNT_CATCH: &str = "I didn't catch that. Could you please repeat?";

/// Spoken greeting at startup.
pub const STARTUP_GREETING: &str =
    "Hello! I'm your assistant. Say 'help' to see what I can do!";

/// Static help text.
pub const HELP_TEXT: &str = "\
ASSISTANT HELP:

APPLICATION COMMANDS:
   - 'open [application]' - Open an app (e.g., 'open calculator')
   - 'open file [name]' - Open a file (e.g., 'open file document')
   - 'open website [url]' - Open a website (e.g., 'open website google.com')
   - 'list applications' - Show all available apps

INFORMATION COMMANDS:
   - 'time' - Current time
   - 'date' - Today's date
   - 'help' - Show this help

GENERAL COMMANDS:
   - 'hello' - Greeting
   - 'how are you' - Check status
   - 'exit' or 'quit' - Close the assistant

TIP: Try 'open notepad' or 'open calculator' to test!";

/// Pick one reply uniformly at random from a fixed set.
pub fn pick(set: &[&'static str]) -> &'static str {
    set.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_REPLIES[0])
}
