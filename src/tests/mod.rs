//! tests/mod.rs
//! Helpers compartidos por las pruebas HTTP.

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;

use crate::config::app_config::{GatewayConfig, GATEWAY_TIMEOUT};
use crate::services::status_service::StatusService;
use crate::services::whatsapp_service::WhatsAppService;

/// App con la tabla de rutas real y los servicios dados.
macro_rules! test_app {
    ($status:expr, $whatsapp:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($status))
                .app_data(actix_web::web::Data::new($whatsapp))
                .configure(crate::app::init_app),
        )
        .await
    };
}


/// SQLite en memoria con una sola conexión (cada conexión tendría su
/// propia base) y migraciones aplicadas.
pub async fn memory_status_service() -> StatusService {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    let service = StatusService::new(pool);
    service
        .run_migrations()
        .await
        .expect("Failed to run migrations");
    service
}

pub fn gateway_config(base_url: Option<&str>, api_key: Option<&str>) -> GatewayConfig {
    GatewayConfig {
        base_url: base_url.map(str::to_string),
        api_key: api_key.map(str::to_string),
        instance_id: "admin_profamilia".to_string(),
        timeout: GATEWAY_TIMEOUT,
    }
}

pub fn whatsapp_service(base_url: Option<&str>, api_key: Option<&str>) -> WhatsAppService {
    WhatsAppService::new(gateway_config(base_url, api_key))
        .expect("Failed to build WhatsAppService")
}

pub fn whatsapp_service_with_timeout(base_url: &str, timeout: Duration) -> WhatsAppService {
    let mut config = gateway_config(Some(base_url), Some("secret"));
    config.timeout = timeout;
    WhatsAppService::new(config).expect("Failed to build WhatsAppService")
}
