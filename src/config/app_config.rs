//! config/app_config.rs
//! Configuración leída de variables de entorno (.env incluido vía dotenv).

use std::time::Duration;

use anyhow::{Context, Result};

/// Timeout total de la llamada al gateway de WhatsApp.
pub const GATEWAY_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_DB_NAME: &str = "status_gateway";
const DEFAULT_INSTANCE: &str = "admin_profamilia";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;

/// Configuración del gateway de mensajería (Evolution API).
/// `base_url` y `api_key` son opcionales: si faltan, el proxy responde 503.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub instance_id: String,
    pub timeout: Duration,
}

impl GatewayConfig {
    /// Devuelve (url, key) solo si ambas están definidas.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.base_url.as_deref(), self.api_key.as_deref()) {
            (Some(url), Some(key)) => Some((url, key)),
            _ => None,
        }
    }

    /// URL completa del endpoint `sendText` para la instancia configurada.
    pub fn send_text_url(&self, base_url: &str) -> String {
        format!(
            "{}/message/sendText/{}",
            base_url.trim_end_matches('/'),
            self.instance_id
        )
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_name: String,
    pub gateway: GatewayConfig,
    /// Orígenes CORS permitidos; `["*"]` = cualquiera.
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Una variable vacía cuenta como no definida.
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_name = get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
        let database_url =
            get("DATABASE_URL").unwrap_or_else(|| format!("sqlite:data/{}.db", db_name));

        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT inválido: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            database_url,
            db_name,
            gateway: GatewayConfig {
                base_url: get("WHATSAPP_API_URL"),
                api_key: get("WHATSAPP_API_KEY"),
                instance_id: get("WHATSAPP_INSTANCE")
                    .unwrap_or_else(|| DEFAULT_INSTANCE.to_string()),
                timeout: GATEWAY_TIMEOUT,
            },
            cors_origins: parse_origins(get("CORS_ORIGINS").as_deref().unwrap_or("*")),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}
