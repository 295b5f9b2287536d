//! models/whatsapp_model.rs
use serde::{Deserialize, Serialize};

/// Body de `POST /api/whatsapp/send`. No se guarda en ningún lado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppMessage {
    pub number: String,
    pub text: String,
}

/// Respuesta OK del proxy: `data` es el JSON del gateway tal cual.
#[derive(Debug, Clone, Serialize)]
pub struct WhatsAppSendResponse {
    pub success: bool,
    pub data: serde_json::Value,
}
