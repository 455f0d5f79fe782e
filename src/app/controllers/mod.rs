//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the host window:
//! - Font and style selection
//! - Document file association

pub mod document;
pub mod font_state;

pub use document::{DocumentController, Outcome};
pub use font_state::FontState;
