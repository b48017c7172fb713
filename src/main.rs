use anyhow::Result;
use aspectlens::cli::{Cli, Commands};
use aspectlens::commands::{self, AnalyzeConfig, BatchConfig};
use aspectlens::observability::init_logging;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            text,
            input,
            format,
            output,
            config,
            word_boundary,
            plain,
        } => commands::handle_analyze(AnalyzeConfig {
            text,
            input,
            format,
            output,
            config,
            word_boundary,
            plain,
        }),
        Commands::Batch {
            path,
            format,
            output,
            config,
            word_boundary,
            plain,
        } => commands::handle_batch(BatchConfig {
            path,
            format,
            output,
            config,
            word_boundary,
            plain,
        }),
        Commands::Aspects { config } => commands::list_aspects(config.as_deref()),
        Commands::Init { force } => commands::init_config(force),
        Commands::Validate { config } => commands::validate_config_file(config.as_deref()),
    }
}
