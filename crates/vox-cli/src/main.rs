//! Vox binary entry point.

mod cli;
mod config;
mod helpers;
mod repl;

use anyhow::Result;
use clap::Parser;

use vox_core::{classify, reply, AppRegistry, ClassifyError, LaunchSpec, Platform};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    helpers::init_tracing("info");

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { text_only, quiet } => repl::cmd_run(config, text_only, quiet),
        Commands::Apps => cmd_apps(config),
        Commands::Classify { utterance, json } => cmd_classify(&utterance.join(" "), json),
    }
}

/// Print the application registry this host would resolve against.
fn cmd_apps(config: config::Config) -> Result<()> {
    let platform = Platform::detect();
    let registry = AppRegistry::for_platform(platform).with_custom(config.applications);

    println!("Applications on {platform} ({} entries):", registry.len());
    for (alias, spec) in registry.entries() {
        let via = match spec {
            LaunchSpec::Executable(command) => format!("exec {command}"),
            LaunchSpec::ShellCommand(command) => format!("shell {command}"),
            LaunchSpec::AppName(name) => format!("app {name}"),
        };
        println!("  {alias:<16} {via}");
    }
    Ok(())
}

/// Classify one utterance and print the result without touching the host.
fn cmd_classify(utterance: &str, json: bool) -> Result<()> {
    match classify(utterance) {
        Ok(classification) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&classification)?);
            } else {
                print!("{:?}", classification.intent);
                match &classification.argument {
                    Some(argument) => println!(" ({argument})"),
                    None => println!(),
                }
            }
            Ok(())
        }
        Err(ClassifyError::EmptyUtterance) => {
            if json {
                println!("{}", serde_json::json!({ "error": "empty utterance" }));
            } else {
                println!("{}", reply::DIDNT_CATCH);
            }
            std::process::exit(1);
        }
    }
}
