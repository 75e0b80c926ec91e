//! Shared content model for morph transformation data.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_catalog, validate_text};
