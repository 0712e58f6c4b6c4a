use report_viewer::{AppState, FileCatalogSource, resolve_config_path, router};
use std::{env, net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config_path = resolve_config_path();
    let state = AppState::new(Arc::new(FileCatalogSource::new(config_path.clone())));

    // Load the catalog up front so a missing or broken config file
    // fails at startup instead of on the first request.
    if let Err(err) = state.ensure_fresh().await {
        return Err(format!(
            "failed to load report catalog from {}: {}",
            config_path.display(),
            err.message
        )
        .into());
    }

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
