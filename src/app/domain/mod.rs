//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Font descriptor and size presets
//! - Document handle
//! - Message types for the event system
//! - Capability traits implemented by the host window

pub mod capabilities;
pub mod defaults;
pub mod document;
pub mod font;
pub mod messages;

pub use capabilities::{EditorHost, FileFilter, FilePicker, FontCatalog, TextSurface, WindowShell};
pub use document::DocumentHandle;
pub use font::{FontDescriptor, FontSize, SIZE_PRESETS};
pub use messages::Message;
