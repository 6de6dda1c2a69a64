//! Control Center Binary
//!
//! Builds one portfolio snapshot from a position file and a price table and
//! prints it as JSON on stdout. The file is served as a data source answering
//! `data_source.positions_query`, so rows go through the same load path as a
//! database would.
//!
//! # Usage
//!
//! ```bash
//! POSITIONS_FILE=positions.json PRICES_FILE=prices.json cargo run --bin control-center
//! ```
//!
//! # Environment Variables
//!
//! - `POSITIONS_FILE`: JSON array of position rows (default: positions.json)
//! - `PRICES_FILE`: JSON object of `{"TICKER": price}` (optional)
//! - `CONTROL_CENTER_CONFIG`: YAML config file (optional; defaults apply without it)
//! - `AS_OF`: snapshot date as YYYY-MM-DD (default: today, UTC)
//! - `RUST_LOG`: overrides the configured log level

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use control_center::config::{Config, DataSourceConfig, load_config};
use control_center::telemetry::init_tracing;
use control_center::{
    ConnectionStatus, LoadPositionsUseCase, OptionPositionRecord, RefreshSnapshotUseCase,
    StaticPriceTable, file_positions_source,
};

const DEFAULT_POSITIONS_FILE: &str = "positions.json";

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();

    let config = match std::env::var("CONTROL_CENTER_CONFIG") {
        Ok(path) => load_config(Some(&path)).with_context(|| format!("loading {path}"))?,
        Err(_) => Config::default(),
    };
    init_tracing(&config.observability.logging)?;

    let positions_path =
        std::env::var("POSITIONS_FILE").unwrap_or_else(|_| DEFAULT_POSITIONS_FILE.to_string());
    let records = load_positions(&config.data_source, Path::new(&positions_path)).await?;

    let prices = match std::env::var("PRICES_FILE") {
        Ok(path) => read_prices(Path::new(&path)).await?,
        Err(_) => {
            tracing::warn!("PRICES_FILE not set, every position is scored from a fallback price");
            StaticPriceTable::new()
        }
    };

    let as_of = parse_as_of()?;
    tracing::info!(
        positions = records.len(),
        prices = prices.len(),
        %as_of,
        "Building portfolio snapshot"
    );

    let snapshot = RefreshSnapshotUseCase::new(config.watchlist)
        .execute(records, &prices, as_of)
        .context("building portfolio snapshot")?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

async fn load_positions(
    config: &DataSourceConfig,
    path: &Path,
) -> Result<Vec<OptionPositionRecord>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading positions from {}", path.display()))?;
    let source = file_positions_source(config, &contents)
        .with_context(|| format!("opening positions source {}", path.display()))?;

    let use_case = LoadPositionsUseCase::new(Arc::new(source), config.positions_query.as_str());
    let status = use_case.connection_status(config.slow_after_ms).await;
    if status != ConnectionStatus::Ok {
        tracing::warn!(?status, "Positions source is not healthy");
    }

    use_case
        .execute()
        .await
        .with_context(|| format!("loading positions from {}", path.display()))
}

async fn read_prices(path: &Path) -> Result<StaticPriceTable> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading prices from {}", path.display()))?;
    StaticPriceTable::from_json(&contents)
        .with_context(|| format!("decoding prices in {}", path.display()))
}

fn parse_as_of() -> Result<NaiveDate> {
    match std::env::var("AS_OF") {
        Ok(value) => NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .with_context(|| format!("AS_OF must be YYYY-MM-DD, got {value}")),
        Err(_) => Ok(Utc::now().date_naive()),
    }
}
