use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workout_planner::api::{create_routes, AppState};
use workout_planner::config::AppConfig;
use workout_planner::services::{
    ExerciseVideoService, GroqClient, PlanGenerationService, YouTubeClient,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let groq = GroqClient::new(&config.groq).context("Failed to create completion client")?;
    info!("Using completion model {}", groq.model());
    let youtube = YouTubeClient::new(&config.youtube).context("Failed to create video search client")?;

    let state = AppState {
        plan_generation_service: PlanGenerationService::new(
            Arc::new(groq),
            config.plan_generation.clone(),
        ),
        exercise_video_service: ExerciseVideoService::new(Arc::new(youtube)),
    };

    // Create the application routes
    let app = create_routes(state, &config.cors_allowed_origins);

    // Start the server
    let address = config.server_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(
        "Workout planner starting on http://{} ({})",
        address, config.environment
    );
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
