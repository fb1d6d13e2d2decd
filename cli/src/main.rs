//! Rule30 CLI - Deterministic Bit Generation From the Command Line
//!
//! # Commands
//!
//! - `rule30 bits --count N` - Raw bits as `0`/`1`
//! - `rule30 bytes --count N` - Bytes as lowercase hex
//! - `rule30 ints --count N --below B` - Bounded integers
//! - `rule30 floats --count N` - Values in `[0, 1)`
//! - `rule30 state --skip N` - Snapshot after N bits, as JSON
//!
//! Engine parameters come from `--config <file.json>` and/or the `--seed`,
//! `--size` and `--bit-spacing` flags (flags win).

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rule30_rng::Rule30Engine;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// Rule 30 deterministic bit generator
#[derive(Parser)]
#[command(name = "rule30")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed (overrides config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Automaton width in cells (overrides config file)
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Output stride in cells (overrides config file)
    #[arg(long, global = true)]
    bit_spacing: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw bits
    Bits {
        #[arg(short = 'n', long, default_value = "64")]
        count: usize,
    },

    /// Print bytes as hex
    Bytes {
        #[arg(short = 'n', long, default_value = "32")]
        count: usize,
    },

    /// Print integers in [0, below)
    Ints {
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Exclusive upper bound
        #[arg(short, long)]
        below: u64,
    },

    /// Print floats in [0, 1)
    Floats {
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Print the engine snapshot as JSON
    State {
        /// Bits to draw before taking the snapshot
        #[arg(short, long, default_value = "0")]
        skip: usize,

        /// Emit the full boolean form instead of compact bytes
        #[arg(long)]
        full: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing on stderr so stdout carries only generated output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let overrides = config::Overrides {
        seed: cli.seed,
        state_length: cli.size,
        bit_spacing: cli.bit_spacing,
    };
    let engine_config = overrides.apply(config::load(cli.config.as_deref())?);
    debug!(?engine_config, "resolved engine configuration");

    let mut engine = Rule30Engine::from_config(&engine_config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Bits { count } => commands::generate::bits(&mut engine, count, &mut out)?,
        Commands::Bytes { count } => commands::generate::bytes(&mut engine, count, &mut out)?,
        Commands::Ints { count, below } => {
            commands::generate::ints(&mut engine, count, below, &mut out)?
        }
        Commands::Floats { count } => commands::generate::floats(&mut engine, count, &mut out)?,
        Commands::State { skip, full } => commands::state::run(&mut engine, skip, full, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
