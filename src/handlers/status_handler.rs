//! handlers/status_handler.rs
use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::status_model::{StatusCheck, StatusCheckCreate};
use crate::services::status_service::{StatusService, DEFAULT_LIST_LIMIT};

/// POST /api/status
pub async fn create_status_check_endpoint(
    status_service: web::Data<StatusService>,
    body: web::Json<StatusCheckCreate>,
) -> Result<HttpResponse, ApiError> {
    let StatusCheckCreate { client_name } = body.into_inner();

    // Se valida antes de tocar la DB
    if client_name.is_empty() {
        log::warn!("(create_status_check) client_name vacío, se rechaza");
        return Err(ApiError::Validation("client_name must not be empty".to_string()));
    }

    let record = StatusCheck::new(client_name);
    status_service.insert(&record).await.map_err(|e| {
        log::error!("(create_status_check) {:#}", e);
        ApiError::Store(e)
    })?;

    log::info!(
        "(create_status_check) id={} client_name='{}'",
        record.id,
        record.client_name
    );
    Ok(HttpResponse::Ok().json(record))
}

/// GET /api/status
pub async fn list_status_checks_endpoint(
    status_service: web::Data<StatusService>,
) -> Result<HttpResponse, ApiError> {
    let records = status_service
        .list_all(DEFAULT_LIST_LIMIT)
        .await
        .map_err(|e| {
            log::error!("(list_status_checks) {:#}", e);
            ApiError::Store(e)
        })?;

    Ok(HttpResponse::Ok().json(records))
}
