use anyhow::Result;
use score_predictor::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Picks the log level (RUST_LOG wins over the config file) and checks it
/// before any subscriber is installed.
fn resolve_log_level(env_level: Option<String>, configured: &str) -> Result<String> {
    let level = env_level.unwrap_or_else(|| configured.to_string());
    level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })?;
    Ok(level)
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .json()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration errors are reported before logging exists
    let config = config::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let env_level = std::env::var("RUST_LOG").ok();
    let log_level =
        resolve_log_level(env_level, &config.server.logs.level).unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });

    init_tracing(&log_level);

    info!(
        host = %config.server.host,
        port = config.server.port,
        pipeline = %config.pipeline.endpoint,
        timeout_secs = config.pipeline.timeout_secs,
        log_level = %log_level,
        "Starting score predictor"
    );

    server::run(config).await?;

    Ok(())
}
