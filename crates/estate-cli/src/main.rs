mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::loan::EmiArgs;
use commands::search::SearchArgs;

/// Property search and home-loan calculations
#[derive(Parser)]
#[command(
    name = "est",
    version,
    about = "Property search and home-loan calculations",
    long_about = "A CLI for filtering and sorting property listings and for \
                  home-loan (EMI) analysis with decimal precision. Listings \
                  are supplied as JSON, via a file or piped on stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and paginate property listings
    Search(SearchArgs),
    /// Calculate the monthly installment for a home loan
    Emi(EmiArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Search(args) => commands::search::run_search(args),
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::Version => {
            println!("est {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
