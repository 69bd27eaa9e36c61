//! Seating Layout CLI
//!
//! Usage:
//!   seating-layout [OPTIONS] <COMMAND>
//!
//! Commands:
//!   generate   Generate a preset layout for a chair count
//!   arrange    Rearrange a saved arrangement into a preset
//!   estimate   Print the recommended canvas size for a layout
//!   resolve    Resolve collisions in a saved arrangement
//!   lint       Report overlapping and out-of-bounds chairs
//!   fit        Recommend a container size for a saved arrangement
//!
//! Options:
//!   -c, --config <FILE>  Engine tuning (TOML format)
//!   -v, --verbose        Log engine decisions to stderr
//!       --log <FILTER>   Tracing filter directive, e.g. "seating_layout=trace"

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use seating_layout::{
    apply_preset, fit_container, lint, positions_from_json, positions_to_json, try_generate_layout,
    try_resolve_collisions, ContainerBounds, Error, FitOptions, LayoutConfig, LayoutType,
};

#[derive(Parser)]
#[command(name = "seating-layout")]
#[command(about = "Generate and validate classroom seating layouts")]
struct Cli {
    /// Engine tuning file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tracing filter directive (overrides --verbose)
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a preset layout for a chair count
    Generate {
        /// rows, grid, groups or scattered
        layout: LayoutType,
        /// Number of chairs
        count: usize,
        #[arg(long, default_value_t = 1200.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },

    /// Rearrange a saved arrangement into a preset, keeping its chair ids
    Arrange {
        layout: LayoutType,
        /// Saved arrangement (reads stdin if omitted)
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 1200.0)]
        width: f64,
        #[arg(long, default_value_t = 800.0)]
        height: f64,
    },

    /// Print the recommended canvas size for a layout
    Estimate {
        layout: LayoutType,
        count: usize,
    },

    /// Resolve collisions in a saved arrangement (reads stdin if no file)
    Resolve {
        input: Option<PathBuf>,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },

    /// Report overlapping and out-of-bounds chairs; exits 1 on any warning
    Lint {
        input: Option<PathBuf>,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },

    /// Recommend a container size for a saved arrangement
    Fit {
        input: Option<PathBuf>,
        #[arg(long, default_value_t = 1920.0)]
        viewport_width: f64,
        #[arg(long, default_value_t = 1080.0)]
        viewport_height: f64,
        /// Padding kept around the chairs
        #[arg(long)]
        padding: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let directive = cli.log.clone().unwrap_or_else(|| {
        if cli.verbose {
            "seating_layout=debug".to_string()
        } else {
            "seating_layout=warn".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::new(directive))
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Error> {
    let config = match &cli.config {
        Some(path) => LayoutConfig::from_file(path)?,
        None => LayoutConfig::default(),
    };

    match cli.command {
        Command::Generate {
            layout,
            count,
            width,
            height,
        } => {
            let positions = try_generate_layout(layout, count, width, height, &config)?;
            println!("{}", positions_to_json(&positions)?);
        }
        Command::Arrange {
            layout,
            input,
            width,
            height,
        } => {
            let existing = positions_from_json(&read_input(input.as_ref())?)?;
            let positions = apply_preset(&existing, layout, width, height, &config);
            println!("{}", positions_to_json(&positions)?);
        }
        Command::Estimate { layout, count } => {
            let size = seating_layout::layout::estimate_optimal_size(count, layout, &config);
            println!("{}", serde_json::to_string_pretty(&size).map_err(Error::from)?);
        }
        Command::Resolve {
            input,
            width,
            height,
        } => {
            let positions = positions_from_json(&read_input(input.as_ref())?)?;
            let resolved =
                try_resolve_collisions(&positions, ContainerBounds::new(width, height), &config)?;
            println!("{}", positions_to_json(&resolved)?);
        }
        Command::Lint {
            input,
            width,
            height,
        } => {
            let positions = positions_from_json(&read_input(input.as_ref())?)?;
            let warnings = lint(&positions, ContainerBounds::new(width, height), &config);
            for warning in &warnings {
                println!("{}", warning);
            }
            if !warnings.is_empty() {
                eprintln!("{} warning(s)", warnings.len());
                return Ok(1);
            }
        }
        Command::Fit {
            input,
            viewport_width,
            viewport_height,
            padding,
        } => {
            let positions = positions_from_json(&read_input(input.as_ref())?)?;
            let mut options = FitOptions::default();
            if let Some(padding) = padding {
                options = options.with_padding(padding);
            }
            let size = fit_container(
                &positions,
                ContainerBounds::new(viewport_width, viewport_height),
                &options,
                &config,
            );
            println!("{}", serde_json::to_string_pretty(&size).map_err(Error::from)?);
        }
    }

    Ok(0)
}

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
