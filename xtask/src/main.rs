// Desktop/tooling crate — unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod layouts;
mod render;
mod samples;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Dashboard display development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one PNG per widget and layout into a directory
    Samples {
        /// Output directory
        #[arg(long, default_value = "samples")]
        out: PathBuf,
        /// Use the light theme
        #[arg(long)]
        light: bool,
    },
    /// Print the slot rectangles of every layout preset
    Layouts {
        /// Canvas width
        #[arg(long, default_value_t = 240)]
        width: u32,
        /// Canvas height
        #[arg(long, default_value_t = 240)]
        height: u32,
    },
    /// Render a screen definition to a PNG or JPEG file
    Render(render::RenderArgs),
    /// Run all tests (unit, integration and doc)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
    },
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: warn).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Samples { out, light } => samples::run(&out, light),
        Commands::Layouts { width, height } => layouts::run(width, height),
        Commands::Render(args) => render::run(&args),
        Commands::Test { unit } => test::run(unit),
    }
}
