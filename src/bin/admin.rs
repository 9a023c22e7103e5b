//! CLI administration tool for slug-shortener.
//!
//! Inspects and seeds the link store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and schema
//! cargo run --bin admin -- db check
//!
//! # Count stored links
//! cargo run --bin admin -- links count
//!
//! # Show where a slug points
//! cargo run --bin admin -- links show aB3xY9
//!
//! # Create a link (same slug rules as POST /)
//! cargo run --bin admin -- links create https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DB_URL`, `SLUG_LENGTH` and the pool settings.

use slug_shortener::application::services::LinkService;
use slug_shortener::config::{self, mask_connection_string};
use slug_shortener::error::AppError;
use slug_shortener::infrastructure::persistence::PgLinkRepository;
use slug_shortener::server::connect_database;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect or create links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply the schema
    Check,
}

#[derive(Subcommand)]
enum LinkAction {
    /// Print the number of stored links
    Count,

    /// Print the URL a slug redirects to
    Show {
        slug: String,
    },

    /// Create a short link
    Create {
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = connect_database(&config).await?;
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = LinkService::with_slug_length(repository, config.slug_length);

    let result = match cli.command {
        Commands::Db {
            action: DbAction::Check,
        } => db_check(&service, &config.database_url).await,
        Commands::Links { action } => handle_link_action(&service, action).await,
    };

    pool.close().await;
    result
}

async fn db_check(service: &LinkService, database_url: &str) -> Result<()> {
    println!("{}", "Database check".bright_blue().bold());
    println!("  URL: {}", mask_connection_string(database_url).cyan());

    service.check_store().await?;
    println!("{}", "  Connection OK, schema up to date".green());

    Ok(())
}

async fn handle_link_action(service: &LinkService, action: LinkAction) -> Result<()> {
    match action {
        LinkAction::Count => {
            let count = service.count().await?;
            println!("{} {}", "Stored links:".bright_white(), count.to_string().bold());
        }
        LinkAction::Show { slug } => match service.resolve(&slug).await {
            Ok(url) => println!("{} → {}", slug.cyan(), url.bright_yellow()),
            Err(AppError::NotFound) => println!("{}", format!("No link for '{slug}'").red()),
            Err(e) => return Err(e.into()),
        },
        LinkAction::Create { url } => {
            let link = service.create_short_link(&url).await?;
            println!("{}", "Link created".green().bold());
            println!("  Slug: {}", link.slug.bright_yellow().bold());
            println!("  URL:  {}", link.long_url.cyan());
        }
    }

    Ok(())
}
