//! Integration tests for the vox-core crate.
//!
//! These tests drive the classifier and dispatcher end to end against fake
//! host collaborators: a recording launcher and a fixed file index.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use vox_core::{
    classify, AppRegistry, ClassifyError, DispatchResult, Dispatcher, FileLocator, HostError,
    Intent, Launcher, LaunchSpec, Platform,
};

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

type CallLog = Rc<RefCell<Vec<String>>>;

/// Records every side effect requested of it; optionally fails all calls.
struct RecordingLauncher {
    calls: CallLog,
    fail: bool,
}

impl RecordingLauncher {
    fn record(&self, call: String) -> Result<(), HostError> {
        self.calls.borrow_mut().push(call.clone());
        if self.fail {
            Err(HostError::SpawnFailed {
                command: call,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        } else {
            Ok(())
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<(), HostError> {
        let target = match spec {
            LaunchSpec::Executable(cmd) => format!("exec:{cmd}"),
            LaunchSpec::ShellCommand(cmd) => format!("shell:{cmd}"),
            LaunchSpec::AppName(name) => format!("app:{name}"),
        };
        self.record(target)
    }

    fn launch_raw(&self, command: &str) -> Result<(), HostError> {
        self.record(format!("raw:{command}"))
    }

    fn open_path(&self, path: &Path) -> Result<(), HostError> {
        self.record(format!("path:{}", path.display()))
    }

    fn open_url(&self, url: &str) -> Result<(), HostError> {
        self.record(format!("url:{url}"))
    }
}

/// A file index with a fixed set of known paths.
struct FixedIndex {
    files: Vec<PathBuf>,
}

impl FixedIndex {
    fn empty() -> Self {
        Self { files: Vec::new() }
    }

    fn with(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FileLocator for FixedIndex {
    fn locate(&self, needle: &str) -> Option<PathBuf> {
        let needle = needle.to_lowercase();
        self.files
            .iter()
            .find(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
            .cloned()
    }
}

/// Test harness bundling a dispatcher with a view onto its launcher's calls.
struct Harness {
    dispatcher: Dispatcher<RecordingLauncher, FixedIndex>,
    calls: CallLog,
}

impl Harness {
    fn new(platform: Platform, fail: bool, files: FixedIndex) -> Self {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let launcher = RecordingLauncher {
            calls: Rc::clone(&calls),
            fail,
        };
        Self {
            dispatcher: Dispatcher::new(AppRegistry::for_platform(platform), launcher, files),
            calls,
        }
    }

    fn working(platform: Platform) -> Self {
        Self::new(platform, false, FixedIndex::empty())
    }

    fn failing(platform: Platform) -> Self {
        Self::new(platform, true, FixedIndex::empty())
    }

    fn run(&self, utterance: &str) -> DispatchResult {
        let classification = classify(utterance).expect("non-empty utterance");
        self.dispatcher.dispatch(&classification)
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

// ---------------------------------------------------------------------------
// Application launches
// ---------------------------------------------------------------------------

#[test]
fn open_calculator_resolves_on_every_platform() {
    for platform in [Platform::Windows, Platform::MacOs, Platform::Linux] {
        let harness = Harness::working(platform);

        let classification = classify("open calculator").unwrap();
        assert_eq!(classification.intent, Intent::OpenApplication);
        assert_eq!(classification.argument.as_deref(), Some("calculator"));

        let result = harness.dispatcher.dispatch(&classification);
        assert_eq!(
            result,
            DispatchResult::Reply("Opening calculator.".to_owned()),
            "platform: {platform}"
        );
        assert_eq!(harness.calls().len(), 1, "platform: {platform}");
    }
}

#[test]
fn launch_failure_recovers_to_a_status() {
    let harness = Harness::failing(Platform::Linux);

    let result = harness.run("open calculator");
    assert_eq!(
        result,
        DispatchResult::Reply("Sorry, I couldn't open calculator.".to_owned())
    );
}

#[test]
fn unregistered_application_falls_back_to_raw_launch() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open htop");
    assert_eq!(
        result,
        DispatchResult::Reply("Attempting to open htop.".to_owned())
    );
    assert_eq!(harness.calls(), vec!["raw:htop".to_owned()]);
}

#[test]
fn missing_application_argument_prompts_without_side_effect() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open");
    assert_eq!(
        result,
        DispatchResult::Reply("Please specify what you want to open.".to_owned())
    );
    assert!(harness.calls().is_empty());
}

#[test]
fn open_time_tracker_is_a_launch_not_a_clock_query() {
    // Classification priority: the launch trigger outranks the "time"
    // substring check.
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open time tracker");
    assert_eq!(
        result,
        DispatchResult::Reply("Attempting to open time tracker.".to_owned())
    );
}

#[test]
fn macos_launches_go_through_the_app_name_style() {
    let harness = Harness::working(Platform::MacOs);

    harness.run("open chrome");
    assert_eq!(harness.calls(), vec!["app:Google Chrome".to_owned()]);
}

#[test]
fn windows_settings_launch_uses_shell_indirection() {
    let harness = Harness::working(Platform::Windows);

    harness.run("open settings");
    assert_eq!(harness.calls(), vec!["shell:start ms-settings:".to_owned()]);
}

// ---------------------------------------------------------------------------
// Files
// ---------------------------------------------------------------------------

#[test]
fn missing_file_reports_not_found_with_no_side_effect() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open file report");
    assert_eq!(
        result,
        DispatchResult::Reply("Couldn't find a file named report.".to_owned())
    );
    assert!(harness.calls().is_empty());
}

#[test]
fn located_file_opens_with_the_default_handler() {
    let files = FixedIndex::with(&["/home/user/Documents/Report-2024.pdf"]);
    let harness = Harness::new(Platform::Linux, false, files);

    let result = harness.run("open file report");
    assert_eq!(
        result,
        DispatchResult::Reply("Opening Report-2024.pdf.".to_owned())
    );
    assert_eq!(
        harness.calls(),
        vec!["path:/home/user/Documents/Report-2024.pdf".to_owned()]
    );
}

#[test]
fn found_file_that_fails_to_open_reports_it() {
    let files = FixedIndex::with(&["/home/user/Desktop/notes.txt"]);
    let harness = Harness::new(Platform::Linux, true, files);

    let result = harness.run("open file notes");
    assert_eq!(
        result,
        DispatchResult::Reply("Found notes.txt but couldn't open it.".to_owned())
    );
}

// ---------------------------------------------------------------------------
// Websites
// ---------------------------------------------------------------------------

#[test]
fn website_argument_is_normalized_to_https() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open website example.com");
    assert_eq!(
        result,
        DispatchResult::Reply("Opening https://example.com.".to_owned())
    );
    assert_eq!(harness.calls(), vec!["url:https://example.com".to_owned()]);
}

#[test]
fn website_with_explicit_scheme_is_untouched() {
    let harness = Harness::working(Platform::Linux);

    harness.run("open website http://example.org");
    assert_eq!(harness.calls(), vec!["url:http://example.org".to_owned()]);
}

#[test]
fn website_open_failure_reports_generic_status() {
    let harness = Harness::failing(Platform::Linux);

    let result = harness.run("open website example.com");
    assert_eq!(
        result,
        DispatchResult::Reply("Couldn't open the website.".to_owned())
    );
}

#[test]
fn website_without_url_prompts_without_side_effect() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("open website please");
    assert_eq!(
        result,
        DispatchResult::Reply("Please specify which website you want to open.".to_owned())
    );
    assert!(harness.calls().is_empty());
}

// ---------------------------------------------------------------------------
// Conversational and terminal intents
// ---------------------------------------------------------------------------

#[test]
fn empty_input_never_reaches_the_dispatcher() {
    assert!(matches!(classify(""), Err(ClassifyError::EmptyUtterance)));
    assert!(matches!(
        classify("  \t  "),
        Err(ClassifyError::EmptyUtterance)
    ));
}

#[test]
fn every_exit_word_produces_exactly_one_farewell() {
    for word in ["bye", "quit", "goodbye", "exit"] {
        let harness = Harness::working(Platform::Linux);

        let result = harness.run(word);
        assert!(result.is_farewell(), "word: {word}");
        assert_eq!(result.message(), "Goodbye! Have a great day!");
        assert!(harness.calls().is_empty());
    }
}

#[test]
fn list_applications_renders_every_alias() {
    let harness = Harness::working(Platform::MacOs);

    for utterance in ["list applications", "show application list"] {
        let result = harness.run(utterance);
        let listing = result.message();
        assert!(listing.starts_with("Available applications:"));
        for alias in harness.dispatcher.registry().aliases() {
            assert!(listing.contains(alias), "missing alias: {alias}");
        }
    }
    assert!(harness.calls().is_empty());
}

#[test]
fn conversational_replies_come_from_the_fixed_sets() {
    let harness = Harness::working(Platform::Linux);

    for _ in 0..16 {
        let greeting = harness.run("hello");
        assert!(vox_core::reply::GREETING_REPLIES.contains(&greeting.message()));

        let status = harness.run("how are you");
        assert!(vox_core::reply::STATUS_REPLIES.contains(&status.message()));

        let thanks = harness.run("thank you");
        assert!(vox_core::reply::THANKS_REPLIES.contains(&thanks.message()));

        let unknown = harness.run("zzz");
        assert!(vox_core::reply::FALLBACK_REPLIES.contains(&unknown.message()));
    }
    assert!(harness.calls().is_empty());
}

#[test]
fn help_returns_the_static_text() {
    let harness = Harness::working(Platform::Linux);

    let result = harness.run("help");
    assert_eq!(result.message(), vox_core::reply::HELP_TEXT);
}

#[test]
fn custom_registry_entries_are_dispatchable() {
    let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
    let launcher = RecordingLauncher {
        calls: Rc::clone(&calls),
        fail: false,
    };
    let registry =
        AppRegistry::for_platform(Platform::Linux).with_custom([("editor", "code")]);
    let dispatcher = Dispatcher::new(registry, launcher, FixedIndex::empty());

    let result = dispatcher.dispatch(&classify("open editor").unwrap());
    assert_eq!(result, DispatchResult::Reply("Opening editor.".to_owned()));
    assert_eq!(*calls.borrow(), vec!["exec:code".to_owned()]);
}
