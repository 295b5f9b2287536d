//! handlers/whatsapp_handler.rs
use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::whatsapp_model::{WhatsAppMessage, WhatsAppSendResponse};
use crate::services::whatsapp_service::WhatsAppService;

/// POST /api/whatsapp/send
///
/// Reenvía el mensaje al gateway. 503 si el gateway no está configurado,
/// 500 si el gateway falla, y el JSON del gateway en `data` si todo va bien.
pub async fn send_whatsapp_endpoint(
    whatsapp_service: web::Data<WhatsAppService>,
    body: web::Json<WhatsAppMessage>,
) -> Result<HttpResponse, ApiError> {
    let message = body.into_inner();

    if message.number.is_empty() || message.text.is_empty() {
        log::warn!("(send_whatsapp) number o text vacío, se rechaza");
        return Err(ApiError::Validation(
            "number and text must not be empty".to_string(),
        ));
    }

    let data = whatsapp_service.send_text(&message).await.into_result()?;

    Ok(HttpResponse::Ok().json(WhatsAppSendResponse {
        success: true,
        data,
    }))
}
