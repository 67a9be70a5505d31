//! chat-relay server binary.

use std::sync::Arc;

use secrecy::ExposeSecret;
use thiserror::Error;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use chat_relay::adapters::ai::{GeminiConfig, GeminiProvider};
use chat_relay::adapters::http::{build_app, ChatAppState};
use chat_relay::application::{IdleSessionSweeper, IdleSessionSweeperConfig, SessionRouter};
use chat_relay::config::{AppConfig, ConfigError, LogFormat, ServerConfig, ValidationError};
use chat_relay::domain::chat::{ConversationOptions, SessionRegistry};
use chat_relay::ports::AIError;

/// Failures that stop the server before or while serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build AI provider: {0}")]
    Provider(#[from] AIError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    if !config.ai.has_api_key() {
        tracing::warn!("No Gemini API key configured; chat requests will fail");
    }

    let provider = GeminiProvider::new(gemini_config(&config))?;
    let registry = Arc::new(SessionRegistry::new());
    let router = SessionRouter::new(Arc::new(provider), registry.clone()).with_options(
        ConversationOptions {
            temperature: config.ai.temperature,
            max_output_tokens: config.ai.max_output_tokens,
        },
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper_task = config.sessions.idle_ttl().map(|idle_ttl| {
        let sweeper = IdleSessionSweeper::new(
            registry.clone(),
            IdleSessionSweeperConfig::default()
                .with_idle_ttl(idle_ttl)
                .with_sweep_interval(config.sessions.sweep_interval()),
        );
        tracing::info!(idle_ttl_secs = idle_ttl.as_secs(), "Idle session sweeper enabled");
        tokio::spawn(async move { sweeper.run(shutdown_rx).await })
    });

    let state = ChatAppState::new(Arc::new(router), config.server.index_path.clone());
    let app = build_app(
        state,
        &config.server.cors_origins_list(),
        config.server.request_timeout(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        model = %config.ai.model,
        environment = ?config.server.environment,
        "chat-relay listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Some(task) = sweeper_task {
        if let Err(err) = task.await {
            tracing::error!(error = %err, "Idle session sweeper terminated abnormally");
        }
    }

    tracing::info!("chat-relay stopped");
    Ok(())
}

fn gemini_config(config: &AppConfig) -> GeminiConfig {
    let api_key = config
        .ai
        .gemini_api_key
        .as_ref()
        .map(|k| k.expose_secret().clone())
        .unwrap_or_default();

    GeminiConfig::new(api_key)
        .with_model(&config.ai.model)
        .with_base_url(&config.ai.base_url)
        .with_timeout(config.ai.timeout())
        .with_max_retries(config.ai.max_retries)
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
