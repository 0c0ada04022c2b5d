//! Platform-specific application registry.
//!
//! Maps lowercase application aliases to launch descriptors.  The registry is
//! built once at startup from the detected host platform and is immutable
//! afterwards.  Entries are stored in insertion order because resolution is
//! first-match-wins: "open chrome browser" must resolve to whichever alias
//! the platform table listed first among those contained in the argument.

use serde::Serialize;
use tracing::debug;

// ---------------------------------------------------------------------------
// Platform detection
// ---------------------------------------------------------------------------

/// The host platform variant, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Windows-like: direct `.exe` spawns plus `start` shell indirection for
    /// settings links.
    Windows,
    /// macOS-like: applications launch by bundle name via `open -a`.
    MacOs,
    /// Linux-like (and any other Unix): direct executable spawns.
    Linux,
}

impl Platform {
    /// Detect the host platform.  Anything that is not Windows or macOS is
    /// treated as Linux-like.
    #[must_use]
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            _ => Self::Linux,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MacOs => write!(f, "macos"),
            Self::Linux => write!(f, "linux"),
        }
    }
}

// ---------------------------------------------------------------------------
// Launch descriptors
// ---------------------------------------------------------------------------

/// How an application is launched on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchSpec {
    /// Spawn the named executable directly.
    Executable(String),
    /// Run the command through the shell (Windows `start ms-settings:` style
    /// links need shell interpretation).
    ShellCommand(String),
    /// Open by application name (`open -a` on macOS).
    AppName(String),
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered alias → launch-descriptor mapping for one platform.
#[derive(Debug, Clone)]
pub struct AppRegistry {
    entries: Vec<(String, LaunchSpec)>,
}

impl AppRegistry {
    /// Build the registry for the given platform.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let entries = match platform {
            Platform::Windows => windows_table(),
            Platform::MacOs => macos_table(),
            Platform::Linux => linux_table(),
        };
        debug!(%platform, count = entries.len(), "application registry built");
        Self { entries }
    }

    /// Append user-defined aliases after the platform table.  Custom entries
    /// launch as direct executables and never outrank a built-in alias on a
    /// tie, since resolution walks insertion order.
    #[must_use]
    pub fn with_custom<I, S>(mut self, custom: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        for (alias, command) in custom {
            let alias = alias.into().to_lowercase();
            debug!(alias = %alias, "custom alias appended");
            self.entries
                .push((alias, LaunchSpec::Executable(command.into())));
        }
        self
    }

    /// Resolve an application-name argument against the registry.
    ///
    /// The match test is case-insensitive substring containment of the alias
    /// inside the argument ("open the calculator app" hits "calculator");
    /// the first alias in insertion order wins.
    pub fn resolve(&self, argument: &str) -> Option<(&str, &LaunchSpec)> {
        let needle = argument.to_lowercase();
        self.entries
            .iter()
            .find(|(alias, _)| needle.contains(alias.as_str()))
            .map(|(alias, spec)| (alias.as_str(), spec))
    }

    /// Iterate the registered aliases in insertion order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// All entries in resolution order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LaunchSpec)> {
        self.entries
            .iter()
            .map(|(alias, spec)| (alias.as_str(), spec))
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Platform tables
// ---------------------------------------------------------------------------

fn exe(alias: &str, command: &str) -> (String, LaunchSpec) {
    (alias.to_owned(), LaunchSpec::Executable(command.to_owned()))
}

fn app(alias: &str, name: &str) -> (String, LaunchSpec) {
    (alias.to_owned(), LaunchSpec::AppName(name.to_owned()))
}

fn shell(alias: &str, command: &str) -> (String, LaunchSpec) {
    (
        alias.to_owned(),
        LaunchSpec::ShellCommand(command.to_owned()),
    )
}

fn windows_table() -> Vec<(String, LaunchSpec)> {
    vec![
        exe("notepad", "notepad.exe"),
        exe("calculator", "calc.exe"),
        exe("paint", "mspaint.exe"),
        exe("file explorer", "explorer.exe"),
        exe("command prompt", "cmd.exe"),
        exe("task manager", "taskmgr.exe"),
        exe("chrome", "chrome.exe"),
        exe("firefox", "firefox.exe"),
        exe("edge", "msedge.exe"),
        exe("word", "winword.exe"),
        exe("excel", "excel.exe"),
        exe("powerpoint", "powerpnt.exe"),
        exe("media player", "wmplayer.exe"),
        exe("photos", "msphotos.exe"),
        shell("settings", "start ms-settings:"),
        exe("control panel", "control.exe"),
    ]
}

fn macos_table() -> Vec<(String, LaunchSpec)> {
    vec![
        app("safari", "Safari"),
        app("chrome", "Google Chrome"),
        app("firefox", "Firefox"),
        app("calculator", "Calculator"),
        app("calendar", "Calendar"),
        app("messages", "Messages"),
        app("mail", "Mail"),
        app("photos", "Photos"),
        app("music", "Music"),
        app("notes", "Notes"),
        app("textedit", "TextEdit"),
        app("terminal", "Terminal"),
        app("finder", "Finder"),
        app("system preferences", "System Preferences"),
    ]
}

fn linux_table() -> Vec<(String, LaunchSpec)> {
    vec![
        exe("firefox", "firefox"),
        exe("chrome", "google-chrome"),
        exe("calculator", "gnome-calculator"),
        exe("file manager", "nautilus"),
        exe("text editor", "gedit"),
        exe("terminal", "gnome-terminal"),
        exe("media player", "vlc"),
        exe("system monitor", "gnome-system-monitor"),
        exe("screenshot", "gnome-screenshot"),
        exe("settings", "gnome-control-center"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_platform_registers_calculator() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            let registry = AppRegistry::for_platform(platform);
            assert!(
                registry.resolve("calculator").is_some(),
                "platform: {platform}"
            );
        }
    }

    #[test]
    fn resolution_is_substring_containment() {
        let registry = AppRegistry::for_platform(Platform::Linux);
        let (alias, _) = registry.resolve("the calculator app").unwrap();
        assert_eq!(alias, "calculator");
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let registry = AppRegistry::for_platform(Platform::Windows);
        let (alias, _) = registry.resolve("Task Manager").unwrap();
        assert_eq!(alias, "task manager");
    }

    #[test]
    fn first_alias_in_insertion_order_wins_ties() {
        // The Linux table lists firefox before chrome; an argument
        // containing both resolves to firefox.
        let registry = AppRegistry::for_platform(Platform::Linux);
        let (alias, _) = registry.resolve("firefox or chrome").unwrap();
        assert_eq!(alias, "firefox");
    }

    #[test]
    fn unknown_argument_does_not_resolve() {
        let registry = AppRegistry::for_platform(Platform::MacOs);
        assert!(registry.resolve("definitely-not-registered").is_none());
    }

    #[test]
    fn windows_settings_uses_shell_indirection() {
        let registry = AppRegistry::for_platform(Platform::Windows);
        let (_, spec) = registry.resolve("settings").unwrap();
        assert!(matches!(spec, LaunchSpec::ShellCommand(_)));
    }

    #[test]
    fn macos_entries_launch_by_app_name() {
        let registry = AppRegistry::for_platform(Platform::MacOs);
        let (_, spec) = registry.resolve("chrome").unwrap();
        assert_eq!(spec, &LaunchSpec::AppName("Google Chrome".to_owned()));
    }

    #[test]
    fn platform_tables_are_reasonably_sized() {
        for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
            let registry = AppRegistry::for_platform(platform);
            assert!(registry.len() >= 10, "platform: {platform}");
            assert!(registry.len() <= 16, "platform: {platform}");
        }
    }

    #[test]
    fn custom_aliases_append_after_the_platform_table() {
        let registry = AppRegistry::for_platform(Platform::Linux)
            .with_custom([("editor", "code"), ("Browser", "chromium")]);

        // Custom aliases are lowercased and resolvable.
        let (alias, spec) = registry.resolve("my editor please").unwrap();
        assert_eq!(alias, "editor");
        assert_eq!(spec, &LaunchSpec::Executable("code".to_owned()));
        assert!(registry.resolve("browser").is_some());

        // Built-ins still win ties against custom entries.
        let (alias, _) = registry.resolve("terminal editor").unwrap();
        assert_eq!(alias, "terminal");
    }
}
