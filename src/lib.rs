//! Folio Application Library
//!
//! This library provides the application modules for the Folio book catalog.

pub mod modules;

/// Re-export commonly used types
pub use modules::*;
