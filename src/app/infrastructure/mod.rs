//! Infrastructure layer - external integrations.
//!
//! - FLTK window host (text surface, dialogs, title)
//! - System font discovery

pub mod fltk_host;
pub mod fonts;

pub use fltk_host::FltkHost;
pub use fonts::SystemFonts;
