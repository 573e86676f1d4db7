use clap::{Parser, Subcommand};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use warehouse_api::{
    db::{establish_connection_with_config, DbConfig},
    migrator::Migrator,
};

#[derive(Parser)]
#[command(name = "migration", about = "Manage the warehouse API database schema", version)]
struct Cli {
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://warehouse.db?mode=rwc",
        help = "Database connection URL"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply every pending migration (default)
    Up,
    /// Roll back the most recent migrations
    Down {
        #[arg(long, default_value_t = 1, help = "Number of migrations to roll back")]
        steps: u32,
    },
    /// Drop every table and re-apply all migrations
    Fresh,
    /// Show which migrations have been applied
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let cli = Cli::parse();

    info!("Connecting to database: {}", cli.database_url);
    let db = establish_connection_with_config(&DbConfig {
        url: cli.database_url.clone(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    })
    .await?;

    match cli.command.unwrap_or(Command::Up) {
        Command::Up => {
            Migrator::up(&db, None).await?;
            info!("Migrations applied");
        }
        Command::Down { steps } => {
            Migrator::down(&db, Some(steps)).await?;
            info!("Rolled back {} migration(s)", steps);
        }
        Command::Fresh => {
            Migrator::fresh(&db).await?;
            info!("Schema recreated");
        }
        Command::Status => {
            Migrator::status(&db).await?;
        }
    }

    Ok(())
}
