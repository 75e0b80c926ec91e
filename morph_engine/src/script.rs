//! Scripted narration.
//!
//! Script tokens hand their text to an evaluator supplied by the caller. The engine
//! doesn't embed a scripting language itself.

use thiserror::Error;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::character::Character;

/// Text rendered in place of a script token that couldn't be evaluated.
pub const SCRIPT_ERROR_MARKER: &str = "[SCRIPT ERROR]";

/// Which script a token refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptRef {
    /// A script registered with the evaluator under a name.
    Named(String),
    /// Source code embedded directly in the template.
    Inline(String),
}

/// Values exposed to a script while it runs.
#[derive(Debug, Clone, Copy)]
pub struct ScriptBindings<'a> {
    pub character: &'a Character,
    pub appearance: &'a Appearance,
    pub component: &'a AppearanceComponent,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("no script named '{0}'")]
    UnknownScript(String),
    #[error("script failed: {0}")]
    Failed(String),
}

/// Evaluates script tokens into narration text.
pub trait ScriptEvaluator {
    /// # Errors
    /// - if the script is unknown or fails while running
    fn evaluate(&self, script: &ScriptRef, bindings: &ScriptBindings<'_>) -> Result<String, ScriptError>;
}
