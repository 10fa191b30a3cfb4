// src/main.rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, info};

use pilihanmotor::config::{CONFIG, MotorConfig};
use pilihanmotor::core::OpContext;
use pilihanmotor::core::ops::ranking::{RankingMethod, rank};
use pilihanmotor::core::primitives::{SawWeighting, ScoreResult, WeightTable};
use pilihanmotor::motor::{MotorRecord, SqliteMotorStore};
use pilihanmotor::server::{self, create_pool, run_migrations};

#[derive(Parser, Debug)]
#[command(name = "pilihanmotor", version, about = "Rank motorcycles with Weighted Product and SAW")]
struct Cli {
    /// SQLite database URL (defaults to DATABASE_URL)
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run migrations and serve the HTTP API (default)
    Serve {
        /// Port to listen on (defaults to MOTOR_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Apply pending migrations and exit
    Migrate,
    /// Insert or replace records from a JSON array file
    Import {
        /// JSON file holding an array of records
        file: PathBuf,
    },
    /// Print a ranking table
    Rank {
        #[arg(long, value_enum, default_value = "wp")]
        method: RankingMethod,

        /// JSON file holding a raw weight object with all five criteria
        #[arg(long)]
        weights: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config: MotorConfig = CONFIG.clone();
    if let Some(url) = cli.database_url.clone() {
        config.database_url = url;
    }

    let level = if cli.debug { Level::DEBUG } else { config.tracing_level() };
    tracing_subscriber::fmt().with_max_level(level).init();

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            info!("Starting pilihanmotor API");
            let state = server::build_state(&config).await?;
            server::serve(&config, state).await
        }
        Command::Migrate => {
            let pool = create_pool(&config.database_url, config.sqlite_max_connections).await?;
            run_migrations(&pool, Path::new(&config.migrations_dir)).await
        }
        Command::Import { file } => import_records(&config, &file).await,
        Command::Rank { method, weights } => print_ranking(&config, method, weights.as_deref()).await,
    }
}

async fn open_store(config: &MotorConfig) -> Result<SqliteMotorStore> {
    let pool = create_pool(&config.database_url, config.sqlite_max_connections).await?;
    run_migrations(&pool, Path::new(&config.migrations_dir)).await?;
    Ok(SqliteMotorStore::new(pool))
}

async fn import_records(config: &MotorConfig, file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<MotorRecord> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid record file {}", file.display()))?;

    let store = open_store(config).await?;
    let written = store.upsert_many(&records).await?;
    info!("Imported {} records from {}", written, file.display());
    Ok(())
}

async fn load_weights(path: Option<&Path>) -> Result<WeightTable> {
    let Some(path) = path else {
        return Ok(WeightTable::default());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let map: BTreeMap<String, f64> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid weight file {}", path.display()))?;
    Ok(WeightTable::from_raw(&map)?)
}

async fn print_ranking(config: &MotorConfig, method: RankingMethod, weights: Option<&Path>) -> Result<()> {
    let weights = load_weights(weights).await?;
    let store = open_store(config).await?;
    let ctx = OpContext::new(Arc::new(store))
        .with_saw_weighting(SawWeighting::from_legacy_flag(config.saw_legacy_cc_weight));

    let results = rank(&ctx, method, &weights).await?;
    print!("{}", format_table(&results));
    Ok(())
}

fn format_table(results: &[ScoreResult]) -> String {
    let mut out = format!("{:>4}  {:>6}  {:>10}\n", "rank", "id", "score");
    out.push_str(&format!("{}\n", "-".repeat(24)));
    for (i, r) in results.iter().enumerate() {
        out.push_str(&format!("{:>4}  {:>6}  {:>10.5}\n", i + 1, r.id, r.score));
    }
    out
}
