//! riffle CLI: run small sequence pipelines over integers from the shell.
//!
//! Values come from positional arguments, or from whitespace-separated
//! stdin when no arguments are given.

use std::io::Read;

use clap::{Parser, Subcommand};
use riffle_core::error::{Error, Result};
use riffle_seq::Sequence;

#[derive(Parser)]
#[command(name = "riffle")]
#[command(about = "Lazy sequence pipelines over integers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// The k smallest values, ascending
    Topk {
        /// How many values to keep
        #[arg(short, long)]
        k: i64,

        /// Keep the k largest instead, descending
        #[arg(long)]
        largest: bool,

        /// Values (stdin when empty)
        values: Vec<String>,
    },

    /// Remove duplicates, preserving first occurrence
    Distinct {
        /// Values (stdin when empty)
        values: Vec<String>,
    },

    /// Sort values
    Sort {
        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Values (stdin when empty)
        values: Vec<String>,
    },

    /// Count, sum, min, and max as JSON
    Stats {
        /// Values (stdin when empty)
        values: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Topk { k, largest, values } => {
            let seq = Sequence::from_vec(collect_values(&values)?);
            let result = if largest {
                seq.top_k_descending(k, |a, b| a < b)
            } else {
                seq.top_k(k, |a, b| a < b)
            };
            print_values(&result.to_vec());
        }
        Commands::Distinct { values } => {
            let seq = Sequence::from_vec(collect_values(&values)?);
            print_values(&seq.distinct().to_vec());
        }
        Commands::Sort { desc, values } => {
            let seq = Sequence::from_vec(collect_values(&values)?);
            let result = if desc {
                seq.order_by_descending(|a, b| a.cmp(b))
            } else {
                seq.order_by(|a, b| a.cmp(b))
            };
            print_values(&result.to_vec());
        }
        Commands::Stats { values } => {
            let seq = Sequence::from_vec(collect_values(&values)?);
            let stats = serde_json::json!({
                "count": seq.count(),
                "sum": seq.sum(),
                "min": seq.min(),
                "max": seq.max(),
            });
            println!("{}", stats);
        }
    }
    Ok(())
}

/// Parse values from args, falling back to stdin when none are given.
fn collect_values(values: &[String]) -> Result<Vec<i64>> {
    if !values.is_empty() {
        return parse_values(values.iter().map(|s| s.as_str()));
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| Error::Parse(format!("reading stdin: {}", e)))?;
    parse_values(input.split_whitespace())
}

fn parse_values<'a>(raw: impl Iterator<Item = &'a str>) -> Result<Vec<i64>> {
    raw.map(|token| {
        token
            .parse::<i64>()
            .map_err(|e| Error::Parse(format!("'{}': {}", token, e)))
    })
    .collect()
}

fn print_values(values: &[i64]) {
    let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    println!("{}", rendered.join(" "));
}
