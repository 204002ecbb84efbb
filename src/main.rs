use std::sync::Arc;

use clap::Parser;
use legal_advisor::{
    config::{Args, Config},
    routes,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env(&args).inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
    })?;

    let state = Arc::new(AppState::from_config(&config));

    let app = routes::create_router(&config.public_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!(
        addr = %config.bind_addr,
        model = %config.model,
        debug = config.debug,
        "Legal advisor running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
