#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const MORPH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod appearance;
pub mod bodypart;
pub mod catalog;
pub mod character;
pub mod colour;
pub mod config;
pub mod data_paths;
pub mod description;
pub mod engine;
pub mod error;
pub mod loader;
pub mod narration;
pub mod script;
pub mod shifter;
pub mod text;
pub mod token;

// Re-exports for convenience
pub use appearance::{Appearance, AppearanceComponent};
pub use bodypart::{Bodypart, Chirality, get_composing_parts};
pub use catalog::{Catalog, Species, Transformation};
pub use character::Character;
pub use colour::{Colour, Pattern, Shade, ShadeModifier};
pub use config::EngineConfig;
pub use description::DescriptionBuilder;
pub use engine::TransformationEngine;
pub use error::ShiftError;
pub use loader::{load_engine, load_engine_from};
pub use script::{ScriptBindings, ScriptError, ScriptEvaluator, ScriptRef};
pub use shifter::{AppearanceRemover, AppearanceShifter, ShiftAction, ShiftBodypartResult, remove, shift};
pub use text::TransformationText;
