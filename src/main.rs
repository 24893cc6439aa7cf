use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod analysis;
mod bases;
mod digests;
mod letter_code;
mod models;
mod number_theory;
mod reinterpret;
mod report;
mod trig;
mod words;

use analysis::Analyzer;
use report::ReportGenerator;

#[derive(Parser)]
#[command(name = "numlens")]
#[command(about = "Inspect an integer: bases, number theory, digests, reinterpretations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis battery for one integer
    Analyze {
        /// The integer to analyze (signed base-10)
        #[arg(allow_hyphen_values = true)]
        number: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode a word as letter indices (A=1, B=2, ..., Z=26)
    Encode {
        /// Text to encode; non-alphabetic characters are skipped
        text: String,
    },

    /// Decode a dot-joined index sequence (e.g. 16.1.25.19) back to letters
    Decode {
        /// Sequence to decode
        sequence: String,
    },
}

/// The one fatal condition: input that is not an integer at all.
#[derive(Debug, Error)]
#[error("not a valid base-10 integer: {0:?}")]
struct InputError(String);

fn parse_input(text: &str) -> Result<i128, InputError> {
    text.trim()
        .parse::<i128>()
        .map_err(|_| InputError(text.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            number,
            format,
            output,
        } => {
            let n = parse_input(&number)?;

            let result = Analyzer::new().analyze(n);

            let generator = ReportGenerator::new(format.as_str());
            let report = generator.generate(&result)?;

            if let Some(out_path) = output {
                generator.write_to_file(&report, &out_path)?;
                info!("Report saved to: {}", out_path.display());
            } else {
                println!("{}", report);
            }

            Ok(())
        }

        Commands::Encode { text } => {
            println!("{}", letter_code::encode(&text));
            Ok(())
        }

        Commands::Decode { sequence } => {
            println!("{}", letter_code::decode(&sequence));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("255").unwrap(), 255);
        assert_eq!(parse_input(" -42 ").unwrap(), -42);
        assert!(parse_input("abc").is_err());
        assert!(parse_input("12.5").is_err());
        assert!(parse_input("").is_err());
    }
}
