//! Command-line entry point for garble

use anyhow::Result;
use clap::Parser;

use garble_cli::commands::{Commands, ListCommands};

/// Render text as partially understood speech
#[derive(Debug, Parser)]
#[command(name = "garble", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Formats => {
                    println!("Available output formats:");
                    println!("  text - Rendered message per line (default)");
                    println!("  json - JSON array of messages with statistics");
                }
            }
            Ok(())
        }
    }
}
