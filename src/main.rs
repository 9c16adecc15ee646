//src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;


use crate::{
    common::log_sink::LogSink,
    config::{AppState, Config},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // WARN ou mais grave também vai para o sink (memória e, opcionalmente, arquivo).
    let log_sink = match &config.log_sink_path {
        Some(path) => LogSink::with_file(config.log_sink_capacity, path)?,
        None => LogSink::new(config.log_sink_capacity),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tower_http=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .with(log_sink)
        .init();

    let db_pool = config.connect().await?;

    // Faz o app rodar as migrações do SQLx na inicialização
    sqlx::migrate!().run(&db_pool).await?;
    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let app_state = AppState::from_pool(db_pool.clone(), &config);
    let app = routes::router(app_state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db_pool.close().await;
    tracing::info!("servidor encerrado");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("falha ao escutar o sinal de encerramento: {}", e);
        std::future::pending::<()>().await;
    }
}
