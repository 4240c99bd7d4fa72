//! ProjHub - Application Entry Point
//!
//! This is the main entry point for the ProjHub server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use lettre::{
    AsyncSmtpTransport, Tokio1Executor,
    transport::smtp::authentication::Credentials,
};
use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projhub::{
    config::{CONFIG, SmtpConfig},
    db, handlers,
    middleware::{logging::logging_middleware, rate_limit::rate_limit_middleware},
    services::chatbot_service::{ChatModel, GroqChatModel},
    state::{AppState, Mailer},
};

fn build_mailer(smtp: &SmtpConfig) -> anyhow::Result<Mailer> {
    let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
        .port(smtp.port)
        .credentials(Credentials::new(
            smtp.username.clone(),
            smtp.password.clone(),
        ))
        .build();

    Ok(mailer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ProjHub server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Initialize Redis connection
    tracing::info!("Connecting to Redis...");
    let redis_client = RedisClient::open(CONFIG.redis.url.as_str())?;
    let redis_conn = redis::aio::ConnectionManager::new(redis_client).await?;

    // Initialize the SMTP transport when configured
    let mailer = match &CONFIG.smtp {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, "Email delivery enabled");
            Some(build_mailer(smtp)?)
        }
        None => {
            tracing::warn!("SMTP not configured; notification intents will be logged only");
            None
        }
    };

    // Chat model behind the chatbot boundary
    let chat_model: Arc<dyn ChatModel> = Arc::new(GroqChatModel::new(CONFIG.chatbot.clone()));

    // Create application state
    let state = AppState::new(db_pool, redis_conn, mailer, chat_model, CONFIG.clone());

    // Build the router
    let app = Router::new()
        .nest("/api/v1", handlers::routes(state.clone()))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
