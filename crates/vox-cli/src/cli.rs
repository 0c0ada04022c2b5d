//! CLI argument definitions for Vox.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vox -- a small assistant that turns utterances into host actions.
#[derive(Parser)]
#[command(
    name = "vox",
    version,
    about = "Vox -- spoken and typed command dispatcher",
    long_about = "A small assistant that maps free-form utterances to host-machine \
                  actions: launching applications, opening files and websites, and \
                  answering time, date, and conversational queries."
)]
pub struct Cli {
    /// Path to the config file (default: the platform config dir, e.g.
    /// ~/.config/vox/config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive assistant loop.
    Run {
        /// Force typed input even when a transcriber is configured.
        #[arg(long)]
        text_only: bool,

        /// Disable spoken output; print replies only.
        #[arg(long, short)]
        quiet: bool,
    },

    /// Print the application registry for this host.
    Apps,

    /// Classify one utterance and print the result without dispatching.
    Classify {
        /// The utterance to classify (multiple words allowed).
        #[arg(required = true)]
        utterance: Vec<String>,

        /// Emit the classification as JSON.
        #[arg(long)]
        json: bool,
    },
}
