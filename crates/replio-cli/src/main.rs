// Rust guideline compliant 2026-10-16

//! Replio CLI Application
//!
//! Builds one JSON API response from command-line flags and writes it to
//! stdout as a raw HTTP/1.1 response.

use anyhow::{Context, Result};
use clap::Parser;
use replio_cli::{compose, init_tracing, parse_header, parse_value, Composition, Outcome};
use replio_core::{status, Config, Http1Writer};
use std::path::PathBuf;

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "replio.toml";

#[derive(Parser, Debug)]
#[command(
    name = "replio",
    version,
    about = "Replio: uniform JSON API responses",
    long_about = "Replio builds a response envelope (success, message, data, errors) with a status code and headers, and writes it as a raw HTTP/1.1 response to stdout.",
    after_help = "Examples:\n  replio success -m ok --data '{\"id\":1}'\n  replio error -m \"bad input\" -e \"field x required\"\n  replio -H X-Trace:abc --pretty success\n  replio --status 201 success -m created\n"
)]
struct Cli {
    /// Config file path (default: ./replio.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print the body
    #[arg(long, global = true)]
    pretty: bool,

    /// Escape '/' in the body
    #[arg(long, global = true)]
    escape_slashes: bool,

    /// Escape non-ASCII characters in the body
    #[arg(long, global = true)]
    escape_unicode: bool,

    /// Maximum nesting depth of the body
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Reject invalid status codes and headers instead of passing them through
    #[arg(long, global = true)]
    strict: bool,

    /// Custom header as NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header", global = true, value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// Override the status code
    #[arg(long)]
    status: Option<u16>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Send a success envelope (status 200)
    Success {
        /// Message text
        #[arg(short, long, default_value = "")]
        message: String,

        /// Payload as JSON (plain text is sent as a string)
        #[arg(long)]
        data: Option<String>,
    },

    /// Send an error envelope (status 400 unless given)
    Error {
        /// Message text
        #[arg(short, long)]
        message: String,

        /// Status code
        #[arg(long, default_value_t = status::BAD_REQUEST)]
        status: u16,

        /// Error descriptor as JSON or text (repeatable)
        #[arg(short = 'e', long = "error")]
        errors: Vec<String>,

        /// Payload as JSON (plain text is sent as a string)
        #[arg(long)]
        data: Option<String>,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if cli.pretty {
        config.serialization.pretty_print = true;
    }
    if cli.escape_slashes {
        config.serialization.escape_slashes = true;
    }
    if cli.escape_unicode {
        config.serialization.escape_unicode = true;
    }
    if let Some(max_depth) = cli.max_depth {
        anyhow::ensure!(max_depth > 0, "--max-depth must be greater than 0");
        config.serialization.max_depth = max_depth;
    }
    if cli.strict {
        config.strict = true;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let config = load_config(&cli)?;

    let outcome = match cli.command {
        Commands::Success { message, data } => Outcome::Success {
            message,
            data: data.as_deref().map(parse_value),
        },
        Commands::Error {
            message,
            status,
            errors,
            data,
        } => Outcome::Error {
            message,
            status,
            errors: errors.iter().map(|e| parse_value(e)).collect(),
            data: data.as_deref().map(parse_value),
        },
    };

    let builder = compose(
        &config,
        Composition {
            outcome,
            status: cli.status,
            headers: cli.headers,
        },
    );

    let stdout = std::io::stdout();
    let mut sink = Http1Writer::new(stdout.lock());
    let sent = builder
        .send(&mut sink)
        .context("Failed to send response")?;

    tracing::info!(
        status = sent.status,
        bytes = sent.body_len,
        fallback = sent.fallback,
        "response written"
    );

    Ok(())
}
