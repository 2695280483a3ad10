use std::error::Error;
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use colored::*;
use tracing::{info, warn};
use crate::catalog::{self, CatalogError, ModelCatalog};
use crate::config::Settings;
use crate::display;

/// Command line interface for browsing and validating the model catalog
#[derive(Parser)]
#[command(name = "mcat", about = "Model catalog browser and validator", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available catalog commands
#[derive(Subcommand)]
pub enum Command {
    /// List all models in the catalog
    List,
    /// List all providers and their default parameters
    Providers,
    /// Show details for one model
    Show {
        /// Id of the model to show (e.g., "mistral-7b")
        model_id: String,
    },
    /// Load and validate a catalog directory, reporting any errors
    Check {
        /// Directory of catalog documents to validate (defaults to the
        /// configured catalog directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Executes the parsed command against the configured catalog.
///
/// # Arguments
///
/// * `cli` - The parsed command line arguments
/// * `settings` - Application settings loaded from the config directory
pub fn run(cli: Cli, settings: &Settings) -> Result<(), Box<dyn Error + Send + Sync>> {
    match cli.command {
        Command::List => {
            let catalog = load_catalog(settings)?;
            display::display_models_table(&catalog);
        }
        Command::Providers => {
            let catalog = load_catalog(settings)?;
            display::display_providers_table(&catalog);
        }
        Command::Show { model_id } => {
            let catalog = load_catalog(settings)?;
            match catalog.get_model(&model_id) {
                Some(model) => {
                    // Loader guarantees the reference resolves
                    if let Some(provider) = catalog.provider_for(model) {
                        display::display_model_details(model, provider);
                    }
                }
                None => {
                    println!("{}", format!("Model '{}' not found in catalog", model_id).red());
                    let ids: Vec<&str> = catalog.models().iter().map(|m| m.id.as_str()).collect();
                    println!("Known models: {}", ids.join(", "));
                }
            }
        }
        Command::Check { dir } => {
            let dir = dir.unwrap_or_else(|| settings.catalog.directory.clone());
            handle_check(&dir);
        }
    }
    Ok(())
}

/// Loads the catalog from the configured directory, falling back to the
/// catalog bundled with the binary when the directory is absent.
fn load_catalog(settings: &Settings) -> Result<ModelCatalog, CatalogError> {
    let dir = &settings.catalog.directory;
    if dir.is_dir() {
        info!("Loading catalog from {}", dir.display());
        catalog::load_dir(dir)
    } else {
        warn!(
            "Catalog directory {} not found, using bundled catalog",
            dir.display()
        );
        ModelCatalog::builtin()
    }
}

/// Validates a catalog directory and prints a human-readable verdict.
fn handle_check(dir: &std::path::Path) {
    match catalog::load_dir(dir) {
        Ok(catalog) => {
            println!(
                "{}",
                format!(
                    "OK: {} models across {} providers loaded from {}",
                    catalog.model_count(),
                    catalog.provider_count(),
                    dir.display()
                )
                .green()
            );
        }
        Err(e) => {
            println!("{}", format!("Catalog validation failed: {}", e).red());
        }
    }
}
