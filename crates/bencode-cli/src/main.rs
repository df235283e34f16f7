//! `bencode` CLI — encode, decode, and size bencode documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode JSON to bencode (stdin → stdout)
//! echo '{"spam":["a","b"]}' | bencode encode
//!
//! # Encode from file to file
//! bencode encode -i data.json -o data.bencode
//!
//! # Decode bencode back to pretty-printed JSON
//! bencode decode -i data.bencode
//!
//! # Only accept canonical input
//! bencode decode --strict -i data.bencode
//!
//! # Compare JSON and bencode sizes
//! bencode stats -i data.json
//! ```

use anyhow::{Context, Result};
use bencode_core::DecoderConfig;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Read};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "bencode",
    version,
    about = "Bencode encoder/decoder CLI",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode JSON to bencode
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode bencode to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reject non-canonical input (leading zeros, unsorted keys, trailing data)
        #[arg(long)]
        strict: bool,
        /// Maximum list/dictionary nesting depth
        #[arg(long, default_value_t = bencode_core::DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Show JSON vs bencode size for a JSON document
    Stats {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let encoded =
                bencode_core::encode_json(&json).context("Failed to encode JSON to bencode")?;
            tracing::debug!(json_bytes = json.len(), bencode_bytes = encoded.len(), "encoded");
            write_output(output.as_deref(), &encoded)?;
        }
        Commands::Decode {
            input,
            output,
            strict,
            max_depth,
        } => {
            let encoded = read_input(input.as_deref())?;
            let config = DecoderConfig::default()
                .with_strict(strict)
                .with_max_depth(max_depth);
            let value = bencode_core::decode_with(&encoded, &config)
                .context("Failed to decode bencode to JSON")?;
            tracing::debug!(kind = value.kind(), strict, "decoded");
            let pretty = serde_json::to_string_pretty(&value)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input } => {
            let json = read_input(input.as_deref())?;
            let encoded =
                bencode_core::encode_json(&json).context("Failed to encode JSON to bencode")?;
            let json_bytes = json.trim_end().len();
            let bencode_bytes = encoded.len();
            let change = if json_bytes > 0 {
                (bencode_bytes as f64 / json_bytes as f64 - 1.0) * 100.0
            } else {
                0.0
            };
            println!("JSON size:     {} bytes", json_bytes);
            println!("Bencode size:  {} bytes", bencode_bytes);
            println!("Size change:   {:+.1}%", change);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for encoded output.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
