//! services/whatsapp_service.rs
//! Proxy hacia el gateway de WhatsApp (Evolution API).
//!
//! El frontend público habla HTTPS con nosotros y nosotros hablamos con el
//! gateway interno, así el navegador nunca hace la llamada HTTP directa.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::config::app_config::GatewayConfig;
use crate::error::ApiError;
use crate::models::whatsapp_model::WhatsAppMessage;

pub const NOT_CONFIGURED_MESSAGE: &str = "WhatsApp API not configured";

/// Resultado de un intento de envío. Un solo intento, sin reintentos.
#[derive(Debug)]
pub enum GatewayOutcome {
    /// 2xx con body JSON.
    Delivered(Value),
    /// El gateway contestó, pero no con 2xx.
    Rejected { status: StatusCode, body: String },
    /// Timeout, DNS, conexión rechazada, body cortado...
    Unreachable(String),
    /// No se pudo ni armar la request (URL/headers mal configurados) o el
    /// 2xx no trae JSON.
    Unexpected(String),
    /// Falta URL o API key; no se hizo ninguna llamada.
    NotConfigured,
}

impl GatewayOutcome {
    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            GatewayOutcome::Delivered(data) => Ok(data),
            GatewayOutcome::NotConfigured => {
                Err(ApiError::ServiceUnavailable(NOT_CONFIGURED_MESSAGE.to_string()))
            }
            GatewayOutcome::Rejected { status, body } => Err(ApiError::Upstream(format!(
                "gateway returned HTTP {}: {}",
                status, body
            ))),
            GatewayOutcome::Unreachable(cause) => Err(ApiError::Upstream(cause)),
            GatewayOutcome::Unexpected(cause) => Err(ApiError::Internal(cause)),
        }
    }
}

#[derive(Clone)]
pub struct WhatsAppService {
    http_client: Client,
    config: GatewayConfig,
}

impl WhatsAppService {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        // El timeout cubre toda la llamada, incluida la lectura del body.
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("No se pudo construir el cliente HTTP del gateway")?;

        Ok(WhatsAppService {
            http_client,
            config,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.credentials().is_some()
    }

    /// Envía `text` a `number` con un único POST a
    /// `{base_url}/message/sendText/{instance}`.
    ///
    /// `number` y `text` se reenvían tal cual, sin normalizar.
    pub async fn send_text(&self, message: &WhatsAppMessage) -> GatewayOutcome {
        let Some((base_url, api_key)) = self.config.credentials() else {
            log::error!("(send_text) WHATSAPP_API_URL o WHATSAPP_API_KEY no definidas");
            return GatewayOutcome::NotConfigured;
        };

        let url = self.config.send_text_url(base_url);
        log::info!("(send_text) POST {} number='{}'", url, message.number);

        let resp = match self
            .http_client
            .post(&url)
            .header("apikey", api_key)
            .json(&json!({
                "number": message.number,
                "text": message.text,
            }))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) if e.is_builder() => {
                log::error!("(send_text) Request mal formada: {}", describe(&e));
                return GatewayOutcome::Unexpected(describe(&e));
            }
            Err(e) => {
                log::error!("(send_text) Gateway inalcanzable: {}", describe(&e));
                return GatewayOutcome::Unreachable(describe(&e));
            }
        };

        let status = resp.status();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => {
                log::error!("(send_text) Fallo leyendo respuesta: {}", describe(&e));
                return GatewayOutcome::Unreachable(describe(&e));
            }
        };

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            log::error!("(send_text) Gateway respondió {}: '{}'", status, body);
            return GatewayOutcome::Rejected { status, body };
        }

        match serde_json::from_slice::<Value>(&body) {
            Ok(data) => {
                log::info!("(send_text) Mensaje aceptado por el gateway ({})", status);
                GatewayOutcome::Delivered(data)
            }
            Err(e) => {
                log::error!("(send_text) Respuesta {} sin JSON válido: {}", status, e);
                GatewayOutcome::Unexpected(format!("invalid JSON in gateway response: {}", e))
            }
        }
    }
}

/// Mensaje del error con toda su cadena de causas
/// ("error sending request ...: operation timed out").
fn describe(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
