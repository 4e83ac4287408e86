mod model;
mod server;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let store = startup::build_store(&config).await?;
    let state = AppState::new(store, config.validation_rules());

    let app = router::app(state, &config.base_path, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        "Server is running on {} ({} store, routes at {})",
        config.port,
        config.store,
        config.base_path
    );

    axum::serve(listener, app).await?;

    Ok(())
}
