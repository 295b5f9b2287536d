//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod status_model;
pub mod whatsapp_model;
