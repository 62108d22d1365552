//! Customer Registry CLI - Table setup, sample data and connection checks.
//!
//! # Usage
//!
//! ```bash
//! # Create the tables (no-op for tables that exist)
//! cr-cli db create
//!
//! # Drop every table
//! cr-cli db drop
//!
//! # Drop, recreate and seed
//! cr-cli db reset
//!
//! # Insert sample customers, items and purchases
//! cr-cli seed
//!
//! # Verify the database is reachable
//! cr-cli check
//! ```
//!
//! Connection settings are read from the same environment variables as the
//! API server (`DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "cr-cli")]
#[command(author, version, about = "Customer registry CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage database tables
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Insert sample data, skipping rows that already exist
    Seed,
    /// Test the database connection
    Check,
}

#[derive(Subcommand)]
enum DbAction {
    /// Create all tables
    Create,
    /// Drop all tables
    Drop,
    /// Drop, recreate and seed all tables
    Reset,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let pool = commands::connect().await?;

    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Create => commands::schema::create(&pool).await?,
            DbAction::Drop => commands::schema::drop_all(&pool).await?,
            DbAction::Reset => {
                commands::schema::drop_all(&pool).await?;
                commands::schema::create(&pool).await?;
                commands::seed::sample_data(&pool).await?;
            }
        },
        Commands::Seed => commands::seed::sample_data(&pool).await?,
        Commands::Check => commands::check::connection(&pool).await?,
    }
    Ok(())
}
