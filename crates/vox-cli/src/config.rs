//! Config file loading.
//!
//! An optional TOML file extends the assistant without rebuilding it: voice
//! preferences (transcriber and synthesizer commands) and custom application
//! aliases appended after the platform registry table.
//!
//! ```toml
//! [voice]
//! enabled = true
//! transcriber = "whisper-capture --once"
//! synthesizer = "espeak"
//!
//! [applications]
//! editor = "code"
//! player = "mpv"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Top-level config.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Voice input/output preferences.
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Custom alias → command pairs, appended after the platform table.
    #[serde(default)]
    pub applications: BTreeMap<String, String>,
}

/// Voice preferences.
#[derive(Debug, Deserialize)]
pub struct VoiceConfig {
    /// Whether spoken output is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// External transcriber command for voice capture; unset means text-only.
    pub transcriber: Option<String>,

    /// Override for the synthesizer command used for spoken output.
    pub synthesizer: Option<String>,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            transcriber: None,
            synthesizer: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The default config path under the platform config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vox").join("config.toml"))
}

/// Load the config.
///
/// An explicitly given path must exist and parse; the default path is
/// optional and silently falls back to defaults when absent.  A malformed
/// file is an error either way.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_path() {
            Some(path) => (path, false),
            None => {
                debug!("no config directory on this platform; using defaults");
                return Ok(Config::default());
            }
        },
    };

    if !path.exists() {
        if required {
            anyhow::bail!("config file not found: {}", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    info!(
        path = %path.display(),
        custom_apps = config.applications.len(),
        "config loaded"
    );
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
