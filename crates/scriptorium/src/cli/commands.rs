//! CLI command definitions.

use clap::{Parser, Subcommand};
use scriptorium_core::Tone;
use std::path::PathBuf;

/// Scriptorium - markdown eBooks from a topic and a tone
#[derive(Parser, Debug)]
#[command(name = "scriptorium")]
#[command(about = "Generate markdown eBooks from a topic and a tone with the Gemini API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an eBook and save it as markdown
    Generate {
        /// Subject of the eBook
        #[arg(short, long)]
        topic: String,

        /// Voice preset, by label or English name (see `tones`)
        #[arg(long, default_value_t = Tone::Professional)]
        tone: Tone,

        /// Directory the markdown file is written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Also print the generated markdown to stdout
        #[arg(long)]
        print: bool,
    },

    /// List the available tones
    Tones,

    /// Report whether an API key is configured
    Check,
}
