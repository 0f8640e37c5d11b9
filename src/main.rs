use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deadline_tracker::api::router;
use deadline_tracker::clock::SystemClock;
use deadline_tracker::config::AppConfig;
use deadline_tracker::db::{self, SqliteDeadlineStore};
use deadline_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::new_from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;
    info!("database connected successfully");

    let state = AppState {
        store: Arc::new(SqliteDeadlineStore::new(pool)),
        clock: Arc::new(SystemClock),
    };

    let app = router(state);

    let addr = config.bind_addr();
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
