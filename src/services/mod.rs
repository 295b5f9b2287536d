//! services/mod.rs
//! Capa de negocio: store de status checks y proxy de WhatsApp.

pub mod status_service;
pub mod whatsapp_service;
