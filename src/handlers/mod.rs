//! handlers/mod.rs
//! Un archivo de handlers por recurso.
pub mod root_handler;
pub mod status_handler;
pub mod whatsapp_handler;
