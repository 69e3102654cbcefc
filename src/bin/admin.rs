//! CLI administration tool for shorty.
//!
//! Provides commands for inspecting and removing links, looking up accounts,
//! and checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show a link
//! cargo run --bin admin -- link show abc123
//!
//! # Delete a link (asks for confirmation unless -y)
//! cargo run --bin admin -- link delete abc123
//!
//! # Show an account and list its links
//! cargo run --bin admin -- account show alice@example.com
//! cargo run --bin admin -- account links alice@example.com
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorty::domain::entities::Link;
use shorty::domain::repositories::{AccountRepository, LinkRepository};
use shorty::infrastructure::persistence::{PgAccountRepository, PgLinkRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorty.
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
    /// Inspect or remove short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show a link by its short code
    Show { code: String },

    /// Delete a link by its short code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Show an account by email
    Show { email: String },

    /// List links owned by an account
    Links { email: String },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Link { action } => {
            let links = PgLinkRepository::new(pool);
            handle_link_action(action, &links).await?
        }
        Commands::Account { action } => {
            let accounts = PgAccountRepository::new(pool.clone());
            let links = PgLinkRepository::new(pool);
            handle_account_action(action, &accounts, &links).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_link_action(action: LinkAction, links: &PgLinkRepository) -> Result<()> {
    match action {
        LinkAction::Show { code } => {
            let link = find_link(links, &code).await?;
            print_link(&link);
        }
        LinkAction::Delete { code, yes } => delete_link(links, &code, yes).await?,
    }

    Ok(())
}

async fn find_link(links: &PgLinkRepository, code: &str) -> Result<Link> {
    links
        .find_by_code(code)
        .await
        .context("Database error")?
        .with_context(|| format!("Link '{}' not found", code))
}

fn print_link(link: &Link) {
    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();
    println!("  Code:     {}", link.code.cyan());
    println!("  Target:   {}", link.original_url.bright_white());
    println!(
        "  Owner:    {}",
        link.owner_id.as_deref().unwrap_or("anonymous").bright_black()
    );
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
    );
    if let Some(expires_at) = link.expires_at {
        println!("  Expires:  {}", expires_at.format("%Y-%m-%d %H:%M"));
    }
    if let Some(view_once) = link.view_once {
        println!("  View once: {}", view_once);
    }
    println!(
        "  Clicks:   {}",
        link.clicks.to_string().bright_green().bold()
    );
    println!();
}

/// Deletes a link after confirmation.
///
/// Confirmation defaults to No and is skipped with `--yes`.
async fn delete_link(links: &PgLinkRepository, code: &str, skip_confirm: bool) -> Result<()> {
    let link = find_link(links, code).await?;
    print_link(&link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = links
        .delete(code)
        .await
        .context("Failed to delete link")?;

    if deleted {
        println!("{}", "✅ Link deleted".green().bold());
    } else {
        println!("{}", "⚠️  Link was already gone".yellow());
    }
    println!();

    Ok(())
}

async fn handle_account_action(
    action: AccountAction,
    accounts: &PgAccountRepository,
    links: &PgLinkRepository,
) -> Result<()> {
    let email = match &action {
        AccountAction::Show { email } | AccountAction::Links { email } => {
            email.trim().to_lowercase()
        }
    };

    let account = accounts
        .find_by_email(&email)
        .await
        .context("Database error")?
        .with_context(|| format!("Account '{}' not found", email))?;

    match action {
        AccountAction::Show { .. } => {
            println!("{}", "👤 Account".bright_blue().bold());
            println!();
            println!("  ID:       {}", account.id.bright_black());
            println!("  Email:    {}", account.email.cyan());
            println!(
                "  Created:  {}",
                account.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
            );
            println!();
        }
        AccountAction::Links { .. } => {
            let owned = links
                .list_by_owner(&account.id)
                .await
                .context("Failed to list links")?;

            println!(
                "{} {}",
                "📋 Links of".bright_blue().bold(),
                account.email.cyan()
            );
            println!();

            if owned.is_empty() {
                println!("{}", "  No links found".yellow());
                return Ok(());
            }

            println!(
                "  {:<12} {:<20} {:<8} {}",
                "Code".bright_white().bold(),
                "Created".bright_white().bold(),
                "Clicks".bright_white().bold(),
                "Target".bright_white().bold()
            );
            println!("  {}", "─".repeat(75).bright_black());

            for link in &owned {
                println!(
                    "  {:<12} {:<20} {:<8} {}",
                    link.code.cyan(),
                    link.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    link.clicks.to_string().bright_green(),
                    link.original_url
                );
            }

            println!();
            println!(
                "  Total: {}",
                owned.len().to_string().bright_white().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;
            let accounts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!();
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_green().bold());
            println!("  Accounts:   {}", accounts.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
