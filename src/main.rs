//! Currents - DC branch current solver
//!
//! Reads an edge list, solves the network and prints one current per edge.
//!
//! # Usage
//!
//! ```bash
//! currents circuit.txt
//! currents < circuit.txt
//! ```

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use kirchhoff::{circuit::Circuit, dsl, error::Result, report, SolverConfig, DEFAULT_EPSILON};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Steady-state currents in a resistive DC network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the edge list; reads stdin when omitted
    #[arg(value_name = "EDGE_FILE")]
    edge_file: Option<PathBuf>,

    /// Relative tolerance for singularity detection
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Round printed currents to this many decimals
    #[arg(short, long)]
    precision: Option<usize>,

    /// Solve connected components in parallel
    #[arg(long)]
    parallel: bool,

    /// Log solver progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with_writer(io::stderr)
        .init();

    // Parse the edge list
    let edges = match &args.edge_file {
        Some(path) => dsl::parse_file(path)?,
        None => {
            if let Some(hint) = stdin_hint(io::stdin().is_terminal()) {
                eprintln!("{hint}");
            }
            dsl::parse_reader(io::stdin().lock())?
        }
    };
    debug!(edges = edges.len(), "parsed edge list");

    // Build and solve
    let circuit = Circuit::new(edges)?;
    let config = SolverConfig::new()
        .with_epsilon(args.epsilon)
        .with_parallel(args.parallel);
    let solution = circuit.solve_with(&config)?;

    report::write_solution(&mut io::stdout().lock(), &solution, args.precision)?;

    Ok(())
}

/// Prompt shown on stderr when edges are typed in by hand. Printed directly
/// so that it appears at the default log level.
fn stdin_hint(interactive: bool) -> Option<&'static str> {
    interactive.then_some("Reading edges from stdin, end with Ctrl-D")
}
