use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use verdict::Analyzer;
use veritas::config::AppConfig;
use veritas::{build_router, provider_factory, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let analyzer = Analyzer::new(provider_factory::build_provider(&cfg));
    let state = AppState::new(cfg.clone(), analyzer).shared();
    let app = build_router(state);

    let addr = &cfg.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(app = %cfg.app_name, "veritas listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
