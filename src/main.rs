use gift_recommender::{
    api::{create_router, AppState},
    config::Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    if config.hf_api_key.is_none() {
        tracing::warn!("HF_API_KEY not set; every request will use fallback suggestions");
    }

    // Initialize application state
    let state = AppState::from_config(&config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        address = %addr,
        model = %config.hf_model,
        catalog = %config.catalog_path,
        "Gift recommender listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
