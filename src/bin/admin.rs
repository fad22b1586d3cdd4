//! CLI administration tool for user-api.
//!
//! Manages users and checks the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Create a user (prompts for missing fields)
//! cargo run --bin admin -- user create --name Ada --bio math
//!
//! # Delete a user
//! cargo run --bin admin -- user delete 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or the `DB_*` components (required)

use user_api::application::services::{UserFields, UserService};
use user_api::config::{self, Config};
use user_api::domain::entities::User;
use user_api::infrastructure::persistence::PgUserRepository;
use user_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-api.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Create a user
    Create {
        /// User name
        #[arg(short, long)]
        name: Option<String>,

        /// Short biography
        #[arg(short, long)]
        bio: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
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
    let config = config::load_from_env()?;
    let pool = open_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn open_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_NAME, DB_USER, DB_PASSWORD) must be set")?;

    let pool = connect_pool(config, database_url).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::List => list_users(&service).await?,
        UserAction::Create { name, bio } => create_user(&service, name, bio).await?,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all users as a table.
///
/// ```text
/// 👥 Users
///
///   ID   Name                     Bio                                 Created
///   ────────────────────────────────────────────────────────────────────────────
///   1    Ada                      math                                2024-01-15 10:30
/// ```
async fn list_users(service: &UserService) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<35} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Bio".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &users {
        println!(
            "  {:<4} {:<24} {:<35} {}",
            user.id.to_string().bright_black(),
            truncate(&user.name, 24).cyan(),
            truncate(&user.bio, 35),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a user, prompting for any field not given on the command line.
async fn create_user(
    service: &UserService,
    name: Option<String>,
    bio: Option<String>,
) -> Result<()> {
    println!("{}", "➕ Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };
    let bio = match bio {
        Some(b) => b,
        None => Input::new().with_prompt("Bio").interact_text()?,
    };

    let fields = UserFields::new(Some(name), Some(bio))
        .map_err(|e| anyhow::anyhow!("Invalid user: {}", e))?;

    let user = service
        .create_user(fields)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    print_user(&user);

    Ok(())
}

/// Deletes a user after confirmation.
async fn delete_user(service: &UserService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    let user = service
        .get_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot delete user {}: {}", id, e))?;
    print_user(&user);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Database query failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Users: {}", users.to_string().bright_white().bold());
        }
    }

    Ok(())
}

fn print_user(user: &User) {
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!("  Name: {}", user.name.cyan());
    println!("  Bio:  {}", user.bio);
    println!();
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
