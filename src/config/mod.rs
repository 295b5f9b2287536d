//! config/mod.rs
//! Configuración global del servicio (se carga del entorno al arrancar).

pub mod app_config;
