//! Scriptorium CLI binary.
//!
//! This binary provides command-line access to the eBook generator:
//! - Generate an eBook from a topic and tone and save it as markdown
//! - List the available tones
//! - Check that an API key is configured

use clap::Parser;
use scriptorium::{LoggingConfig, ScriptoriumConfig, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, GenerateOptions, check_credential, list_tones, run_generate};

    // Credentials may live in a local .env file
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose { "debug" } else { "info" };
    init_logging(
        &LoggingConfig::new()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = match &cli.config {
        Some(path) => ScriptoriumConfig::from_file(path)?,
        None => ScriptoriumConfig::load()?,
    };

    // Execute the requested command
    let code = match cli.command {
        Commands::Generate {
            topic,
            tone,
            output_dir,
            print,
        } => {
            let options = GenerateOptions {
                topic,
                tone,
                output_dir,
                print,
            };
            run_generate(options, &config).await?
        }

        Commands::Tones => list_tones(),

        Commands::Check => check_credential(&config.gemini)?,
    };

    Ok(code)
}
