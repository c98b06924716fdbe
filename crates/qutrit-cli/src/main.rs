//! Qutrit Command-Line Interface
//!
//! Inspect single-qutrit gates, basis states and pulse calibrations.
//!
//! ```text
//!          |h⟩ ───────────
//!               ╲   X12
//!          |e⟩ ───────────
//!               ╲   X01
//!          |g⟩ ───────────
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::OutputFormat;
use commands::{calibration, check, gate, state, version};
use qutrit_gates::{Subspace, UNITARITY_TOLERANCE};

/// qutrit - single-qutrit gate algebra
#[derive(Parser)]
#[command(name = "qutrit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a gate and print its matrix
    Gate {
        /// Gate name (x01, x12, y01, y12, z01, z12, p0, p2, r01, r12)
        name: String,

        /// Angles in radians or `pi` expressions (2pi, 3*pi/4). Put `--` before
        /// expressions that start with `-`, such as -pi/2
        #[arg(allow_negative_numbers = true)]
        params: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Apply the gate to this basis state (g, e, h)
        #[arg(short, long)]
        initial: Option<String>,
    },

    /// Print the basis vector for a level label
    State {
        /// Level label (g, e, h)
        label: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Sweep every gate family and check unitarity and locality
    Check {
        /// Evenly spaced angles over [-4π, 4π], on top of the edge values
        #[arg(short, long, default_value = "257")]
        samples: usize,

        /// Maximum allowed unitarity error
        #[arg(short, long, default_value_t = UNITARITY_TOLERANCE)]
        tolerance: f64,
    },

    /// List pulse calibrations
    Calibration {
        /// Calibration YAML file (defaults to the built-in set)
        #[arg(short, long, env = config::CALIBRATION_ENV)]
        calibration: Option<PathBuf>,

        /// Only show this backend
        #[arg(short, long)]
        backend: Option<String>,

        /// Only show this transition (01, 12)
        #[arg(short, long)]
        transition: Option<Subspace>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Gate {
            name,
            params,
            format,
            initial,
        } => gate::execute(&name, &params, initial.as_deref(), format),

        Commands::State { label, format } => state::execute(&label, format),

        Commands::Check { samples, tolerance } => check::execute(samples, tolerance),

        Commands::Calibration {
            calibration: path,
            backend,
            transition,
            format,
        } => calibration::execute(path.as_deref(), backend.as_deref(), transition, format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
