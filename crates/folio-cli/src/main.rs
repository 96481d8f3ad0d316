//! Folio CLI
//!
//! Offline helpers around folio-core for preparing the site.
//!
//! ## Usage
//!
//! ```bash
//! # Print the contact card for the default profile
//! folio vcard
//!
//! # Write the card for a custom profile
//! folio --config site.json vcard --output card.vcf
//!
//! # List pages in navigation order
//! folio pages
//!
//! # Validate a site config
//! folio --config site.json check
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{ContactCard, PageId, SiteConfig};

/// Folio - portfolio site tooling
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio site tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site config (JSON). Defaults to the built-in profile.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the contact card (vCard 3.0)
    Vcard {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List pages in navigation order
    Pages,

    /// Validate the site config
    Check,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load site config from {}", path.display())),
        None => Ok(SiteConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Vcard { output } => {
            let card = ContactCard::from_profile(&config.profile);
            let body = card.render();
            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{body}\n"))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "Contact card written");
                    println!("Wrote {} to {}", card.file_name(), path.display());
                }
                None => println!("{body}"),
            }
        }

        Commands::Pages => {
            for page in PageId::ALL {
                println!(
                    "{}  {:<9} {:<10} {}",
                    page.index(),
                    page.as_str(),
                    page.fragment(),
                    page.display_name()
                );
            }
        }

        Commands::Check => {
            // load_config already validated; summarize what was found
            println!("Config OK");
            println!("  Name: {}", config.profile.name);
            println!("  Initial page: {:?}", config.initial_page);
            println!("  Projects: {}", config.content.projects.len());
            println!(
                "  CV asset: {}",
                config.assets.cv.as_deref().unwrap_or("(simulated)")
            );
        }
    }

    Ok(())
}
