//! Subcommand: `vox run`, the interactive assistant loop.
//!
//! One utterance per iteration: capture (voice with typed fallback, or
//! typed only), classify, dispatch, present.  The loop terminates on the
//! Exit intent's farewell or on stdin EOF; every other condition recovers
//! into a status message and the next iteration.

use anyhow::{Context, Result};
use tracing::info;

use vox_core::{classify, reply, AppRegistry, ClassifyError, Dispatcher, Platform};
use vox_host::{
    negotiate, InputCapability, ProcessLauncher, Speaker, TextInput, UserDirs, VoiceInput,
};

use crate::config::Config;

/// Run the interactive loop.
pub fn cmd_run(config: Config, text_only: bool, quiet: bool) -> Result<()> {
    let platform = Platform::detect();
    info!(%platform, "starting vox");

    // Built once; immutable for the rest of the run.
    let registry = AppRegistry::for_platform(platform).with_custom(config.applications);
    let dispatcher = Dispatcher::new(registry, ProcessLauncher::new(platform), UserDirs::discover());

    let speaker = Speaker::detect(
        platform,
        config.voice.enabled && !quiet,
        config.voice.synthesizer.as_deref(),
    );

    // Capability is negotiated once at startup, never re-probed per call.
    let capability = if text_only {
        InputCapability::TextOnly
    } else {
        negotiate(config.voice.transcriber.as_deref())
    };

    print_banner(platform, capability, &speaker, dispatcher.registry().len());
    speaker.say(reply::STARTUP_GREETING);

    let mut text = TextInput::default();
    let mut voice = match capability {
        InputCapability::VoiceCapable => config.voice.transcriber.map(VoiceInput::new),
        InputCapability::TextOnly => None,
    };

    loop {
        let utterance = match voice.as_mut() {
            Some(voice) => {
                let heard = voice.listen();
                if heard.is_empty() {
                    // Capture failed; fall back to typed input for this
                    // iteration, as the voice source is still negotiated.
                    speaker.say("I didn't catch that. Please type your command.");
                    match text.read().context("failed to read typed input")? {
                        Some(line) => line,
                        None => break,
                    }
                } else {
                    heard
                }
            }
            None => match text.read().context("failed to read typed input")? {
                Some(line) => line,
                None => break,
            },
        };

        let classification = match classify(&utterance) {
            Ok(classification) => classification,
            Err(ClassifyError::EmptyUtterance) => {
                speaker.say(reply::DIDNT_CATCH);
                continue;
            }
        };

        let result = dispatcher.dispatch(&classification);
        speaker.say(result.message());

        if result.is_farewell() {
            break;
        }
    }

    info!("shutting down");
    Ok(())
}

/// Startup banner reflecting the negotiated capabilities.
fn print_banner(
    platform: Platform,
    capability: InputCapability,
    speaker: &Speaker,
    app_count: usize,
) {
    println!();
    println!("  Vox v{}", env!("CARGO_PKG_VERSION"));
    println!("  Platform: {platform}");
    println!("  Input: {capability}");
    println!(
        "  Speech: {}",
        if speaker.can_speak() {
            "enabled"
        } else {
            "print-only"
        }
    );
    println!("  Applications: {app_count}");
    println!("  Say 'help' for commands, 'exit' to quit.");
    println!();
}
