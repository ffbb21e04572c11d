/// Print review progress for one map
///
/// Reads the map's relation partition and reports how many relations are
/// reviewable and how many still need review.
///
/// Usage:
///   DATABASE_URL=postgres://... REVIEW_MAP_ID=42 cargo run --bin review-stats
///
/// Environment variables:
///   - DATABASE_URL: PostgreSQL connection string
///   - REVIEW_MAP_ID: map whose statistics are computed
///   - REVIEW_CONSISTENT_SNAPSHOT: take both counts from one snapshot (default: false)
use anyhow::{Context, Result};
use review_service::config::Config;
use review_service::{execute_in_snapshot, ReviewableQuery, ReviewableStatisticsQuery};
use sqlx::{Connection, PgConnection};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("review_stats=info".parse()?)
                .add_directive("review_service=info".parse()?)
                .add_directive("sqlx=warn".parse()?),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        env = %config.env,
        map_id = %config.map_id,
        consistent_snapshot = config.consistent_snapshot,
        "Configuration loaded"
    );

    let mut conn = PgConnection::connect(&config.database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    let result = if config.consistent_snapshot {
        execute_in_snapshot(&mut conn, config.map_id).await
    } else {
        ReviewableStatisticsQuery::new(&mut conn, config.map_id)
            .execute()
            .await
    };
    let stats = result.with_context(|| {
        format!(
            "Failed to compute review statistics for map {}",
            config.map_id
        )
    })?;

    info!(
        map_id = %config.map_id,
        total_count = stats.total_count(),
        remaining_count = stats.remaining_count(),
        "Review statistics computed"
    );

    println!("{}", serde_json::to_string_pretty(&stats)?);

    conn.close().await.context("Failed to close connection")?;
    Ok(())
}
