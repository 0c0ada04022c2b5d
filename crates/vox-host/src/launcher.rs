//! Per-platform process launcher.
//!
//! Three launch styles, matching the registry's descriptor variants: direct
//! executable spawn, shell-interpreted command (Windows `start` links), and
//! open-by-application-name (macOS `open -a`).  Files and URLs go to the
//! platform's default handler (`start`, `open`, or `xdg-open`).
//!
//! Spawned children are detached immediately; spawn success is the only
//! success signal this collaborator reports.  Stdout and stderr are nulled so
//! launched applications cannot scribble over the assistant's terminal.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use vox_core::{HostError, HostResult, LaunchSpec, Launcher, Platform};

/// Process-launch collaborator for the detected host platform.
#[derive(Debug, Clone, Copy)]
pub struct ProcessLauncher {
    platform: Platform,
}

impl ProcessLauncher {
    /// Create a launcher for the given platform.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Spawn a command, detaching the child.
    fn spawn(&self, program: &str, args: &[&str]) -> HostResult<()> {
        debug!(program, ?args, "spawning");
        Command::new(program)
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| HostError::SpawnFailed {
                command: program.to_owned(),
                source,
            })
    }

    /// Run a command line through the platform shell.
    fn spawn_shell(&self, command: &str) -> HostResult<()> {
        debug!(command, "spawning via shell");
        let result = match self.platform {
            Platform::Windows => Command::new("cmd")
                .args(["/C", command])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn(),
            Platform::MacOs | Platform::Linux => Command::new("sh")
                .args(["-c", command])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn(),
        };
        result.map(drop).map_err(|source| HostError::SpawnFailed {
            command: command.to_owned(),
            source,
        })
    }

    /// Hand a file path or URL to the platform's default handler.
    fn open_with_default_handler(&self, target: &str) -> HostResult<()> {
        // `start` needs an empty title argument so quoted paths are not
        // mistaken for a window title.
        let (program, args): (&str, &[&str]) = match self.platform {
            Platform::Windows => ("cmd", &["/C", "start", ""]),
            Platform::MacOs => ("open", &[]),
            Platform::Linux => ("xdg-open", &[]),
        };

        let mut full_args: Vec<&str> = args.to_vec();
        full_args.push(target);

        match self.spawn(program, &full_args) {
            Ok(()) => Ok(()),
            Err(HostError::SpawnFailed { source, .. }) => Err(HostError::OpenFailed {
                target: target.to_owned(),
                source,
            }),
            Err(other) => Err(other),
        }
    }
}

impl Launcher for ProcessLauncher {
    fn launch(&self, spec: &LaunchSpec) -> HostResult<()> {
        match spec {
            LaunchSpec::Executable(command) => self.spawn(command, &[]),
            LaunchSpec::ShellCommand(command) => self.spawn_shell(command),
            LaunchSpec::AppName(name) => self.spawn("open", &["-a", name]),
        }
    }

    fn launch_raw(&self, command: &str) -> HostResult<()> {
        // Registry-miss fallback: shell interpretation on Windows, direct
        // spawn elsewhere.
        match self.platform {
            Platform::Windows => self.spawn_shell(command),
            Platform::MacOs | Platform::Linux => self.spawn(command, &[]),
        }
    }

    fn open_path(&self, path: &Path) -> HostResult<()> {
        self.open_with_default_handler(&path.to_string_lossy())
    }

    fn open_url(&self, url: &str) -> HostResult<()> {
        self.open_with_default_handler(url)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn spawn_of_missing_binary_is_a_typed_error() {
        // Direct spawn (non-Windows raw launch) surfaces the OS rejection.
        let launcher = ProcessLauncher::new(Platform::Linux);
        let result = launcher.launch_raw("definitely-not-a-real-binary-name");
        assert!(matches!(result, Err(HostError::SpawnFailed { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn direct_spawn_of_present_binary_succeeds() {
        let launcher = ProcessLauncher::new(Platform::Linux);
        launcher
            .launch(&LaunchSpec::Executable("true".to_owned()))
            .expect("`true` should spawn");
    }

    #[cfg(unix)]
    #[test]
    fn shell_command_spawn_succeeds() {
        let launcher = ProcessLauncher::new(Platform::Linux);
        launcher
            .launch(&LaunchSpec::ShellCommand("true".to_owned()))
            .expect("shell spawn of `true` should succeed");
    }
}
