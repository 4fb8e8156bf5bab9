mod api;
mod classifier;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::handlers::AppState;
use crate::services::config::FactServiceConfig;
use crate::services::facts::create_provider;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Inicializar logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "number_classifier=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Number Classifier API...");

    // Crear el proveedor de fun facts
    let fact_config = FactServiceConfig::from_env();
    info!(
        "Fun fact provider: {} ({}, timeout {:?})",
        fact_config.provider, fact_config.base_url, fact_config.timeout
    );
    let facts = create_provider(fact_config);

    // Crear estado compartido
    let state = Arc::new(AppState { facts });

    // Configurar CORS (permisivo, el API es de solo lectura)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let app = api::routes::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Obtener puerto desde env
    let port: u16 = std::env::var("SERVER_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .unwrap_or(3000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Number Classifier API server starting on http://{}", addr);
    api::routes::print_routes();

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Number Classifier shut down gracefully");

    Ok(())
}

/// Señal de shutdown graceful
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    info!("Shutdown signal received...");
}
