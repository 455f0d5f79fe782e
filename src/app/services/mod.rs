//! Services layer - business operations.
//!
//! - File I/O and dialog filters
//! - Menu action table

pub mod file_filters;
pub mod file_io;
pub mod menu_binder;
