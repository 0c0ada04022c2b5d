//! Utterance input sources and capability negotiation.
//!
//! The core treats input as an opaque text producer: one blocking call per
//! run-loop iteration yielding a lowercased utterance, or an empty string
//! when capture fails.  Two sources exist: typed text from stdin and a
//! voice source that shells out to an external transcriber command.
//!
//! Which source the run loop uses is decided once at startup by
//! [`negotiate`], never re-probed per call.

use std::io::{self, Write as _};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::util::binary_on_path;

// ---------------------------------------------------------------------------
// Capability negotiation
// ---------------------------------------------------------------------------

/// The negotiated input capability for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCapability {
    /// A transcriber command is configured and present; the run loop listens
    /// first and falls back to typed input when a capture comes back empty.
    VoiceCapable,
    /// Typed input only.
    TextOnly,
}

impl std::fmt::Display for InputCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VoiceCapable => write!(f, "voice input enabled"),
            Self::TextOnly => write!(f, "text input"),
        }
    }
}

/// Negotiate the input capability at startup.
///
/// Voice requires a configured transcriber command whose binary resolves on
/// the `PATH`; anything else is [`InputCapability::TextOnly`].
#[must_use]
pub fn negotiate(transcriber: Option<&str>) -> InputCapability {
    match transcriber {
        Some(command) => {
            let program = command.split_whitespace().next().unwrap_or(command);
            if binary_on_path(program) {
                info!(transcriber = command, "voice capture available");
                InputCapability::VoiceCapable
            } else {
                warn!(
                    transcriber = command,
                    "configured transcriber not found on PATH; text input only"
                );
                InputCapability::TextOnly
            }
        }
        None => {
            info!("no transcriber configured; text input only");
            InputCapability::TextOnly
        }
    }
}

// ---------------------------------------------------------------------------
// Text input
// ---------------------------------------------------------------------------

/// Typed utterance source reading one line from stdin per call.
#[derive(Debug, Default)]
pub struct TextInput;

impl TextInput {
    /// Prompt and read one utterance.
    ///
    /// Returns `None` on EOF (the caller treats it like Exit) and the
    /// lowercased, trimmed line otherwise.
    pub fn read(&mut self) -> io::Result<Option<String>> {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = io::stdin().read_line(&mut line)?;
        if bytes_read == 0 {
            debug!("EOF on stdin");
            return Ok(None);
        }

        Ok(Some(line.trim().to_lowercase()))
    }
}

// ---------------------------------------------------------------------------
// Voice input
// ---------------------------------------------------------------------------

/// Voice utterance source delegating capture and transcription to an
/// external command (e.g. a whisper CLI wrapper) that prints the transcript
/// on stdout.
#[derive(Debug)]
pub struct VoiceInput {
    command: String,
}

impl VoiceInput {
    /// Create a voice source around the configured transcriber command line.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Capture one utterance.
    ///
    /// Any failure (spawn error, non-zero exit, undecodable output) yields
    /// an empty string; the run loop then falls back to typed input for
    /// that iteration.
    pub fn listen(&mut self) -> String {
        println!("Listening... (speak now)");

        let mut parts = self.command.split_whitespace();
        let Some(program) = parts.next() else {
            return String::new();
        };

        let output = match Command::new(program).args(parts).output() {
            Ok(output) => output,
            Err(e) => {
                warn!(command = %self.command, error = %e, "transcriber failed to run");
                return String::new();
            }
        };

        if !output.status.success() {
            warn!(
                command = %self.command,
                code = ?output.status.code(),
                "transcriber exited with failure"
            );
            return String::new();
        }

        let transcript = String::from_utf8_lossy(&output.stdout)
            .trim()
            .to_lowercase();
        if !transcript.is_empty() {
            println!("You said: {transcript}");
        }
        transcript
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_transcriber_negotiates_text_only() {
        assert_eq!(negotiate(None), InputCapability::TextOnly);
    }

    #[test]
    fn missing_transcriber_binary_negotiates_text_only() {
        assert_eq!(
            negotiate(Some("definitely-not-a-real-transcriber --flag")),
            InputCapability::TextOnly
        );
    }

    #[cfg(unix)]
    #[test]
    fn present_transcriber_negotiates_voice() {
        // Any binary on PATH qualifies; the probe checks presence, not
        // behavior.
        assert_eq!(negotiate(Some("sh")), InputCapability::VoiceCapable);
    }

    #[cfg(unix)]
    #[test]
    fn failing_transcriber_yields_empty_utterance() {
        let mut voice = VoiceInput::new("false");
        assert_eq!(voice.listen(), "");
    }

    #[cfg(unix)]
    #[test]
    fn transcript_is_trimmed_and_lowercased() {
        let mut voice = VoiceInput::new("echo  OPEN Calculator ");
        assert_eq!(voice.listen(), "open calculator");
    }
}
