//! Knot CLI - Literate Programming Tangle Engine

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use knot::commands::{self, ListOptions, TangleOptions};
use knot::config::{self, Config, Dialect};

/// Input dialect for CLI argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDialect {
    /// Four-space indented code, `(in NAME)` switches chunks
    Indented,
    /// `<<NAME>>=` blocks closed by `@`
    Block,
}

impl From<CliDialect> for Dialect {
    fn from(cli_dialect: CliDialect) -> Self {
        match cli_dialect {
            CliDialect::Indented => Dialect::Indented,
            CliDialect::Block => Dialect::Block,
        }
    }
}

#[derive(Parser)]
#[command(name = "knot")]
#[command(author, version, about = "Literate programming tangle engine", long_about = None)]
struct Cli {
    /// Chunk to expand (defaults to `*`, or `default_chunk` from the config)
    #[arg(value_name = "CHUNK")]
    chunk: Option<String>,

    /// Read the document from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input dialect (overrides config file)
    #[arg(short, long, value_enum)]
    dialect: Option<CliDialect>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List defined chunks instead of expanding one
    #[arg(short, long)]
    list: bool,

    /// Print the chunk list as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Config {
    let loaded = match cli.config {
        Some(ref path) => config::read_config_file(path),
        None => {
            let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            config::read_config(&base_dir)
        }
    };

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("ignoring configuration: {}", e);
        Config::default()
    });

    // Override dialect if specified on command line
    if let Some(cli_dialect) = cli.dialect {
        config.dialect = cli_dialect.into();
    }
    config
}

fn run(cli: Cli) -> knot::Result<()> {
    let config = load_config(&cli);
    let input = commands::open_input(cli.input.as_deref())?;

    // Nothing is written until the command has produced its full output
    let text = if cli.list {
        let options = ListOptions {
            json: cli.json,
            source_path: cli.input.clone(),
        };
        commands::list(&config, &options, input)?
    } else {
        let options = TangleOptions {
            chunk: cli.chunk.clone(),
            source_path: cli.input.clone(),
        };
        commands::tangle(&config, &options, input)?
    };

    commands::write_output(cli.output.as_deref(), &text)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; stdout carries the tangled program
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
