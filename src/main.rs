use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use setu::server::{config::Config, error::Error, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server failed: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Database connected");

    startup::create_schema(&db).await?;
    startup::seed_reference_data(&db).await?;

    let state = AppState::new(db, &config.jwt_secret);
    let app = router::routes().with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| Error::InternalError(format!("Failed to bind {}: {e}", config.listen_addr)))?;

    tracing::info!("Server running on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::InternalError(format!("Server error: {e}")))?;

    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
