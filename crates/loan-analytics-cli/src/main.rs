mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::prepayment::PrepaymentArgs;

/// Loan prepayment impact analysis
#[derive(Parser)]
#[command(
    name = "lpa",
    version,
    about = "Loan prepayment impact analysis",
    long_about = "A CLI for simulating the impact of a one-time prepayment on a \
                  fixed-EMI amortising loan, with decimal precision. Reports the \
                  interest saved and the tenure eliminated relative to the \
                  original schedule."
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
    /// Simulate a one-time loan prepayment
    Prepayment(PrepaymentArgs),
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
        Commands::Prepayment(args) => commands::prepayment::run_prepayment(args),
        Commands::Version => {
            println!("lpa {}", env!("CARGO_PKG_VERSION"));
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
