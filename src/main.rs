use clinic_api::config::AppConfig;
use clinic_api::{app, seed, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SESSION_SECRET, CLINIC_DATA_DIR, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clinic_api=info,tower_http=info".into()),
        )
        .init();

    // Missing SESSION_SECRET is fatal here, before anything binds
    let config = AppConfig::from_env()?;
    tracing::info!("Starting Clinic CMS API in {:?} mode", config.environment);

    let port = config.server.port;
    let state = AppState::new(config);
    seed::ensure_admin_user(&state)?;

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
