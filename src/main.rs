use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sea_orm::DbBackend;
use serde::Serialize;
use tracing::{error, info};

use storefront_schema::{
    config::{self, AppConfig},
    db::{self, DbPool},
    schema::{self, InitMode, InitReport, TableStatus},
    AppResult,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => {
            let cfg = load_and_trace()?;
            let mode = if args.strict {
                InitMode::Strict
            } else {
                cfg.init_mode
            };
            let pool = connect(&cfg).await?;
            let result = run_init(&pool, mode).await;
            db::close_pool(pool).await?;

            let report = result.context("schema initialization aborted")?;
            if cli.json {
                print_json(&report)?;
            } else {
                println!("Schema initialization: {}", report);
                for failure in &report.failed {
                    println!("  {}: {}", failure.table, failure.message);
                }
            }
        }
        Commands::Status => {
            let cfg = load_and_trace()?;
            let pool = connect(&cfg).await?;
            let result = run_status(&pool).await;
            db::close_pool(pool).await?;

            let statuses = result.context("failed to inspect schema")?;
            if cli.json {
                print_json(&statuses)?;
            } else {
                for status in &statuses {
                    let state = if status.present { "present" } else { "missing" };
                    println!("{:<20} {}", status.table, state);
                }
            }
        }
        Commands::Sql(args) => {
            print!("{}", render_sql(args.backend.into()));
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "storefront-schema",
    about = "Create and inspect the storefront database schema",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create every missing table
    Init(InitArgs),
    /// List which tables exist
    Status,
    /// Print the create statements without connecting
    Sql(SqlArgs),
}

#[derive(Debug, clap::Args)]
struct InitArgs {
    #[arg(long, help = "Stop at the first table that cannot be created")]
    strict: bool,
}

#[derive(Debug, clap::Args)]
struct SqlArgs {
    #[arg(long, value_enum, default_value_t = Backend::Mysql)]
    backend: Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Mysql,
    Postgres,
    Sqlite,
}

impl From<Backend> for DbBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Mysql => DbBackend::MySql,
            Backend::Postgres => DbBackend::Postgres,
            Backend::Sqlite => DbBackend::Sqlite,
        }
    }
}

fn load_and_trace() -> Result<AppConfig> {
    let cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(cfg.log_level(), cfg.log_json);
    Ok(cfg)
}

// Connection failures are fatal; there is no retry.
async fn connect(cfg: &AppConfig) -> Result<DbPool> {
    let pool = db::establish_connection_from_app_config(cfg)
        .await
        .map_err(|e| {
            error!("Database connection failed: {}", e);
            e
        })
        .context("could not connect to the database")?;
    db::check_connection(&pool)
        .await
        .context("database did not answer a ping")?;
    info!("Connected to {:?} database", cfg.backend());
    Ok(pool)
}

async fn run_init(pool: &DbPool, mode: InitMode) -> AppResult<InitReport> {
    Ok(schema::initialize(pool, mode).await?)
}

async fn run_status(pool: &DbPool) -> AppResult<Vec<TableStatus>> {
    Ok(schema::status(pool).await?)
}

/// The create statements of the whole catalog, one per paragraph
fn render_sql(backend: DbBackend) -> String {
    schema::catalog()
        .iter()
        .map(|table| format!("{};\n\n", table.to_sql(backend)))
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}
