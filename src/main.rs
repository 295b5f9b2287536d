use std::str::FromStr;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::status_service::StatusService;
use crate::services::whatsapp_service::WhatsAppService;

mod app;
mod config;
mod error;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

async fn setup_database(config: &AppConfig) -> Result<Pool<Sqlite>> {
    // SQLite no crea la carpeta del archivo por su cuenta
    if config.database_url.starts_with("sqlite:data/") {
        std::fs::create_dir_all("data").context("No se pudo crear directorio 'data'")?;
    }

    log::info!(
        "Conectando a la base '{}' en {}",
        config.db_name,
        config.database_url
    );

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("DATABASE_URL inválida: {}", config.database_url))?
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("No se pudo conectar a la base de datos SQLite")?;

    Ok(db_pool)
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env()?;

    let db_pool = setup_database(&config).await?;
    let status_service = StatusService::new(db_pool);
    status_service.run_migrations().await?;

    let whatsapp_service = WhatsAppService::new(config.gateway.clone())?;
    if !whatsapp_service.is_configured() {
        log::warn!("WhatsApp API sin configurar: /api/whatsapp/send responderá 503");
    }

    if config.allows_any_origin() {
        log::info!("CORS abierto a cualquier origen");
    } else {
        log::info!("CORS limitado a {:?}", config.cors_origins);
    }

    serve(&config, status_service, whatsapp_service).await
}

/// Levanta el servidor y, pase lo que pase (bind fallido, error al correr o
/// apagado normal), cierra el pool al final.
async fn serve(
    config: &AppConfig,
    status_service: StatusService,
    whatsapp_service: WhatsAppService,
) -> Result<()> {
    log::info!("Levantando servidor en {}:{}", config.host, config.port);
    let cors_origins = config.cors_origins.clone();
    let server_status_service = status_service.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(app::cors(&cors_origins))
            .app_data(web::Data::new(server_status_service.clone()))
            .app_data(web::Data::new(whatsapp_service.clone()))
            .configure(app::init_app)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("No se pudo escuchar en {}:{}", config.host, config.port));

    let result = match server {
        Ok(server) => server.run().await.context("El servidor terminó con error"),
        Err(e) => Err(e),
    };

    log::info!("Servidor detenido, cerrando conexión a la base de datos");
    status_service.close().await;

    result
}
