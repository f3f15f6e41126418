use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dockyard: inspect, check and normalize docking layout documents.
#[derive(Parser, Debug)]
#[command(name = "dockyard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log directive override (e.g. `debug` or `dockyard_layout=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print an indented outline of a layout.
    Inspect {
        file: PathBuf,

        /// Also print the rectangle of every visible panel and pane.
        #[arg(long)]
        geometry: bool,

        /// Main window size used with `--geometry`, as WIDTHxHEIGHT.
        #[arg(long, default_value = "1280x800", value_parser = parse_size)]
        size: (f64, f64),
    },

    /// Load a layout and verify its structural invariants.
    Check { file: PathBuf },

    /// Load a layout (collecting garbage) and write it back out.
    Normalize {
        file: PathBuf,

        /// Output path. Prints to stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let dimension = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite() && *n > 0.0)
            .ok_or_else(|| format!("invalid dimension '{v}'"))
    };
    Ok((dimension(w)?, dimension(h)?))
}
