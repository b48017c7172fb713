use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aspectlens")]
#[command(about = "Aspect-based sentiment scoring for feedback text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one piece of feedback against every aspect
    Analyze {
        /// Feedback text (reads --file or stdin when omitted)
        #[arg(conflicts_with = "input")]
        text: Option<String>,

        /// Read feedback from a file ("-" for stdin)
        #[arg(short = 'i', long = "file", visible_alias = "input", value_name = "PATH")]
        input: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery)
        #[arg(short, long, env = "ASPECTLENS_CONFIG")]
        config: Option<PathBuf>,

        /// Match terms as whole words instead of substrings
        #[arg(long = "word-boundary")]
        word_boundary: bool,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Score a file of feedback entries (one per line) and summarize them
    Batch {
        /// File with one feedback entry per line ("-" for stdin)
        path: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips discovery)
        #[arg(short, long, env = "ASPECTLENS_CONFIG")]
        config: Option<PathBuf>,

        /// Match terms as whole words instead of substrings
        #[arg(long = "word-boundary")]
        word_boundary: bool,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// List the configured aspect catalog
    Aspects {
        /// Configuration file (skips discovery)
        #[arg(short, long, env = "ASPECTLENS_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Check a configuration file and report every problem in it
    Validate {
        /// Configuration file (defaults to ./.aspectlens.toml)
        #[arg(short, long, env = "ASPECTLENS_CONFIG")]
        config: Option<PathBuf>,
    },
}
