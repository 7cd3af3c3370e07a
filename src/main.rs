use std::sync::Arc;

use anyhow::Context;
use task_tracker::{
    db::{connect_with_retry, run_migrations},
    routes::create_router,
    state::{AppState, Config},
    task::{TaskRepository, TaskService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_tracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env().context("invalid configuration")?);

    tracing::info!(
        db_host = %config.db_host,
        db_user = %config.db_user,
        db_name = %config.db_name,
        db_port = config.db_port,
        password_set = !config.db_password.is_empty(),
        "Starting server..."
    );

    tracing::info!("Connecting to database...");
    let db = connect_with_retry(&config)
        .await
        .context("could not connect to database")?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await.context("database migration failed")?;

    let task_repository = TaskRepository::new(db.clone());
    let task_service = TaskService::new(Arc::new(task_repository));

    let state = AppState {
        config: config.clone(),
        task_service,
    };

    let app = create_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server is running on {}", addr);
    tracing::info!("API available at {}/tasks", config.api_url);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
