//! Spoken output on top of the host's speech synthesizer.
//!
//! The output collaborator is fire-and-forget: every status string is
//! printed, and when a synthesizer engine is available it is also spoken.
//! Engine absence or a failed synthesis never surfaces as an error; it
//! degrades to print-only.

use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use vox_core::Platform;

use crate::util::binary_on_path;

/// Per-platform synthesizer candidates, probed in order.
const LINUX_ENGINES: [&str; 2] = ["spd-say", "espeak"];

/// Output collaborator: prints every message and optionally speaks it.
#[derive(Debug, Clone)]
pub struct Speaker {
    engine: Option<Engine>,
}

#[derive(Debug, Clone)]
enum Engine {
    /// macOS `say` or a Linux synthesizer command line taking the text as
    /// its final argument.
    Plain(String),
    /// Windows SAPI via a PowerShell one-liner.
    PowerShell,
}

impl Speaker {
    /// Probe the host for a synthesizer engine.
    ///
    /// `enabled` false (config or `--quiet`) skips the probe entirely.
    /// `override_engine` names a synthesizer command to use instead of the
    /// platform default.
    #[must_use]
    pub fn detect(platform: Platform, enabled: bool, override_engine: Option<&str>) -> Self {
        if !enabled {
            info!("speech output disabled; print-only mode");
            return Self { engine: None };
        }

        if let Some(custom) = override_engine {
            let program = custom.split_whitespace().next().unwrap_or(custom);
            if binary_on_path(program) {
                info!(engine = custom, "using configured synthesizer");
                return Self {
                    engine: Some(Engine::Plain(custom.to_owned())),
                };
            }
            warn!(engine = custom, "configured synthesizer not found on PATH");
        }

        let engine = match platform {
            Platform::MacOs if binary_on_path("say") => Some(Engine::Plain("say".to_owned())),
            Platform::Windows if binary_on_path("powershell") => Some(Engine::PowerShell),
            Platform::Linux => LINUX_ENGINES
                .iter()
                .find(|cmd| binary_on_path(cmd))
                .map(|cmd| Engine::Plain((*cmd).to_owned())),
            _ => None,
        };

        match &engine {
            Some(e) => info!(engine = ?e, "speech synthesizer available"),
            None => info!("no speech synthesizer found; print-only mode"),
        }

        Self { engine }
    }

    /// A print-only speaker with no engine.
    #[must_use]
    pub fn silent() -> Self {
        Self { engine: None }
    }

    /// Whether a synthesizer engine was found.
    pub fn can_speak(&self) -> bool {
        self.engine.is_some()
    }

    /// Present one message: print it, then speak it when possible.
    pub fn say(&self, text: &str) {
        println!("Assistant: {text}");

        let Some(engine) = &self.engine else {
            return;
        };

        let result = match engine {
            Engine::Plain(cmd) => {
                let mut parts = cmd.split_whitespace();
                let program = parts.next().unwrap_or(cmd.as_str());
                Command::new(program)
                    .args(parts)
                    .arg(text)
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
            }
            Engine::PowerShell => {
                let script = format!(
                    "Add-Type -AssemblyName System.Speech; \
                     (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{}')",
                    text.replace('\'', "''")
                );
                Command::new("powershell")
                    .args(["-NoProfile", "-Command", &script])
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .status()
            }
        };

        match result {
            Ok(status) if status.success() => debug!("spoke message"),
            Ok(status) => warn!(code = ?status.code(), "synthesizer exited with failure"),
            Err(e) => warn!(error = %e, "synthesizer could not be invoked"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
