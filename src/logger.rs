//! logger.rs
//! Logger del servicio (env_logger detrás de la fachada `log`).

/// Filtro por defecto: info para el servicio, sqlx solo avisa de lo raro
/// (cada query a SQLite se loguea en info si no).
const DEFAULT_FILTER: &str = "info,sqlx=warn";

pub fn init_logger() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp_secs()
        .init();
}
