//! Errors surfaced by shift and remove operations.

use thiserror::Error;

use crate::bodypart::{Bodypart, Chirality};

/// Reasons a shift or remove request can't be carried out.
///
/// A request that changes nothing is not an error; it reports `ShiftAction::Nothing`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShiftError {
    #[error("you need to specify left or right for one-sided parts like the {0}")]
    SideRequired(Bodypart),
    #[error("the {bodypart} doesn't have a {side} side")]
    SideNotApplicable { bodypart: Bodypart, side: Chirality },
    #[error("no species named '{0}'")]
    SpeciesNotFound(String),
    #[error("no {bodypart} transformation is registered for the {species} species")]
    TransformationNotFound { bodypart: Bodypart, species: String },
    #[error("{shifter} can't {operation}")]
    Unsupported {
        shifter: &'static str,
        operation: &'static str,
    },
}

impl ShiftError {
    /// Returns true for errors caused by how the request addressed the part.
    pub fn is_validation(&self) -> bool {
        matches!(self, ShiftError::SideRequired(_) | ShiftError::SideNotApplicable { .. })
    }

    /// Returns true for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShiftError::SpeciesNotFound(_) | ShiftError::TransformationNotFound { .. }
        )
    }
}
