#![deny(missing_docs)]

//! # API Catalog CLI
//!
//! Command Line Interface for the endpoint catalog toolchain.
//!
//! Supported Commands:
//! - `build`: Specification document -> serialized endpoint catalog.

use catalog_core::AppResult;
use clap::{Parser, Subcommand};

mod build;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Endpoint Catalog CLI")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Builds the endpoint catalog from a specification document.
    Build(build::BuildArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build(args) => {
            build::execute(args)?;
        }
    }

    Ok(())
}
