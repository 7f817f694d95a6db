#![deny(missing_docs)]

//! # Build Command
//!
//! Reads a specification document, builds the endpoint catalog and
//! writes it as JSON.

use std::fs;
use std::path::PathBuf;

use catalog_core::{build_catalog, parse_spec_document, AppError, AppResult};

/// Arguments for the build command.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the specification document (YAML or JSON).
    pub spec_path: PathBuf,

    /// Output path for the catalog JSON. Writes to stdout when omitted.
    #[clap(long)]
    pub output_path: Option<PathBuf>,

    /// Pretty-print the catalog JSON.
    #[clap(long)]
    pub pretty: bool,
}

/// Executes the catalog build.
pub fn execute(args: &BuildArgs) -> AppResult<()> {
    if !args.spec_path.exists() {
        return Err(AppError::General(format!(
            "Specification file not found: {:?}",
            args.spec_path
        )));
    }

    // 1. Read Document
    let content = fs::read_to_string(&args.spec_path)
        .map_err(|e| AppError::General(format!("Failed to read specification: {}", e)))?;

    // 2. Parse
    let document = parse_spec_document(&content)?;

    // 3. Build Catalog
    let endpoints = build_catalog(&document)?;

    // 4. Serialize
    let json = if args.pretty {
        serde_json::to_string_pretty(&endpoints)
    } else {
        serde_json::to_string(&endpoints)
    }
    .map_err(|e| AppError::General(format!("Failed to serialize catalog: {}", e)))?;

    // 5. Write Output
    match &args.output_path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::General(format!("Failed to create output dir: {}", e))
                })?;
            }
            fs::write(path, &json)
                .map_err(|e| AppError::General(format!("Failed to write catalog: {}", e)))?;
            println!(
                "Catalog written to {:?}. {} endpoints updated",
                path,
                endpoints.len()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
