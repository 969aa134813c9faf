//! CLI commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Citygen - turn a free-text prompt into a structured city description
#[derive(Parser, Debug)]
#[command(name = "citygen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Vocabulary document (overrides CITYGEN_VOCABULARY)
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Bind address (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the pipeline once and print the JSON result
    Generate {
        /// The city prompt
        prompt: String,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
        })
    }
}
