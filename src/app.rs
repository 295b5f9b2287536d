//! app.rs
use actix_cors::Cors;
use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::handlers::{root_handler, status_handler, whatsapp_handler};

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("", web::get().to(root_handler::root_endpoint))
            .route("/", web::get().to(root_handler::root_endpoint))
            .service(
                web::scope("/status")
                    .route(
                        "",
                        web::post().to(status_handler::create_status_check_endpoint),
                    )
                    .route(
                        "",
                        web::get().to(status_handler::list_status_checks_endpoint),
                    ),
            )
            .service(
                web::scope("/whatsapp")
                    .route("/send", web::post().to(whatsapp_handler::send_whatsapp_endpoint)),
            ),
    );
}

/// Bodies JSON mal formados o con campos faltantes -> 422 `{"detail": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        log::warn!("(json_config) Body rechazado: {}", detail);
        error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

/// CORS según `CORS_ORIGINS`: `*` acepta cualquier origen (se refleja el
/// Origin de la request), si no solo los listados.
pub fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
