//! CLI administration tool for draft-preview.
//!
//! Inspects and discards drafts directly in the Redis draft store, without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show what is stored under a preview token
//! cargo run --bin admin -- draft show Zx8pQ...
//!
//! # Discard a draft
//! cargo run --bin admin -- draft delete Zx8pQ...
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST` (required): draft store connection
//! - `DRAFT_TTL_SECONDS` (optional): used only to open the store

use draft_preview::application::converters::{
    DRAFT_PREVIEW_NAMESPACE, DraftLookup, DraftResolver,
};
use draft_preview::config::Config;
use draft_preview::domain::repositories::{DraftStore, NamespacedStore};
use draft_preview::infrastructure::draft_store::RedisDraftStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing stored preview drafts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect or discard drafts
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Draft store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    /// Show the draft stored under a token
    Show {
        /// Preview token
        token: String,
    },

    /// Delete the draft stored under a token
    Delete {
        /// Preview token
        token: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let store: Arc<dyn DraftStore> = Arc::new(
        RedisDraftStore::connect(redis_url, config.draft_ttl_seconds)
            .await
            .context("Failed to connect to draft store")?,
    );
    let previews = NamespacedStore::new(store.clone(), DRAFT_PREVIEW_NAMESPACE);

    match cli.command {
        Commands::Draft { action } => match action {
            DraftAction::Show { token } => show_draft(previews, &token).await?,
            DraftAction::Delete { token, yes } => delete_draft(previews, &token, yes).await?,
        },
        Commands::Store {
            action: StoreAction::Check,
        } => check_store(store).await?,
    }

    Ok(())
}

/// Prints the lookup outcome, metadata, and entity summary for a token.
///
/// Unlike the preview page, this tells a missing draft apart from a stored
/// state that carries no entity.
async fn show_draft(previews: NamespacedStore, token: &str) -> Result<()> {
    println!("{}", "Draft".bright_blue().bold());
    println!("  Token: {}", token.cyan());

    let metadata = previews
        .get_metadata(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;
    let lookup = DraftResolver::new(previews).lookup(token).await;

    match lookup {
        DraftLookup::Missing => {
            println!("  Status: {}", "MISSING".red());
            return Ok(());
        }
        DraftLookup::Empty => println!("  Status: {}", "EMPTY (no entity)".yellow()),
        DraftLookup::Found(_) => println!("  Status: {}", "FOUND".green()),
    }

    if let Some(metadata) = metadata {
        println!(
            "  Owner:   {}",
            metadata.owner.as_deref().unwrap_or("-").cyan()
        );
        println!(
            "  Updated: {}",
            metadata
                .updated_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black()
        );
    }

    if let DraftLookup::Found(node) = lookup {
        println!();
        println!("  {:<10} {}", "Bundle".bright_white().bold(), node.bundle);
        println!("  {:<10} {}", "Title".bright_white().bold(), node.title);
        println!("  {:<10} {}", "Language".bright_white().bold(), node.langcode);
        println!(
            "  {:<10} {}",
            "Node".bright_white().bold(),
            node.nid
                .map(|nid| nid.to_string())
                .unwrap_or_else(|| "new".to_string())
        );
        println!(
            "  {:<10} {}",
            "Published".bright_white().bold(),
            if node.published { "yes" } else { "no" }
        );
    }
    println!();

    Ok(())
}

/// Deletes a draft after confirmation.
async fn delete_draft(previews: NamespacedStore, token: &str, skip_confirm: bool) -> Result<()> {
    println!("  Token: {}", token.cyan());

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this draft?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let deleted = previews
        .delete(token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete draft: {}", e))?;

    if deleted {
        println!("{}", "Draft deleted".green().bold());
    } else {
        println!("{}", "Nothing stored under this token".yellow());
    }

    Ok(())
}

async fn check_store(store: Arc<dyn DraftStore>) -> Result<()> {
    if store.health_check().await {
        println!("{}", "Draft store reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Draft store did not answer PING")
    }
}
