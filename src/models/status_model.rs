//! models/status_model.rs
//! Registro de "status check": forma en memoria y forma de almacenamiento.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registro tal como lo ve el cliente HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Nuevo registro con id y timestamp generados en el servidor.
    /// El timestamp se recorta a microsegundos, la misma precisión con la
    /// que se guarda, para que lo devuelto y lo leído después coincidan.
    pub fn new(client_name: String) -> Self {
        StatusCheck {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Body de `POST /api/status`
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Forma de almacenamiento: el timestamp viaja como texto ISO-8601.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: String,
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(record: &StatusCheck) -> Self {
        StatusCheckDocument {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: encode_timestamp(&record.timestamp),
        }
    }
}

impl TryFrom<StatusCheckDocument> for StatusCheck {
    type Error = anyhow::Error;

    fn try_from(doc: StatusCheckDocument) -> Result<Self> {
        let timestamp = decode_timestamp(&doc.timestamp)
            .with_context(|| format!("timestamp inválido en status_check id={}", doc.id))?;

        Ok(StatusCheck {
            id: doc.id,
            client_name: doc.client_name,
            timestamp,
        })
    }
}

pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Acepta RFC 3339 y también ISO-8601 sin offset (se asume UTC).
pub fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .with_context(|| format!("'{}' no es un timestamp ISO-8601", raw))?;
    Ok(naive.and_utc())
}
