//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (FontDescriptor, DocumentHandle, Message, capability traits)
//! - `controllers/` - Orchestration (FontState, DocumentController)
//! - `services/` - Business operations (file I/O, dialog filters, menu action table)
//! - `infrastructure/` - External integrations (FLTK host, system fonts)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenient external access
pub use controllers::{DocumentController, FontState, Outcome};
pub use domain::{DocumentHandle, FontDescriptor, FontSize, Message};
pub use error::{AppError, Result};
pub use infrastructure::{FltkHost, SystemFonts};
pub use state::AppState;
