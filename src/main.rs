use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use aura::bank::UserDirectory;
use aura::handlers::router;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let directory = Arc::new(Mutex::new(UserDirectory::seeded()));

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

    let app = router(directory);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:".to_string() + &port).await?;

    info!("mock API listening on port {port}");

    axum::serve(listener, app).await?;

    Ok(())
}
