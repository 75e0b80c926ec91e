use std::collections::HashSet;
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in authored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate species references and basic invariants in a `CatalogDef`.
///
/// Species names are compared case-insensitively, matching how the engine looks them up.
///
/// ```
/// use morph_data::{CatalogDef, SpeciesDef, TransformationDef, validate_catalog};
///
/// let catalog = CatalogDef {
///     species: vec![SpeciesDef {
///         name: "shark".into(),
///         parent: None,
///         description: "A toothy swimmer.".into(),
///     }],
///     transformations: vec![TransformationDef {
///         species: "shark".into(),
///         part: "tail".into(),
///         description: "A shark tail.".into(),
///         default_base_colour: "grey".into(),
///         default_pattern: None,
///         default_pattern_colour: None,
///         is_nsfw: false,
///         shift_message: "{@target}'s tail becomes a shark tail.".into(),
///         grow_message: "{@target} grows a shark tail.".into(),
///         uniform_shift_message: None,
///         uniform_grow_message: None,
///         single_description: "{@pronoun|subject} has a {@colour} shark tail.".into(),
///         uniform_description: None,
///     }],
/// };
/// assert!(validate_catalog(&catalog).is_empty());
/// ```
pub fn validate_catalog(catalog: &CatalogDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut species = HashSet::new();
    track_ids(
        "species",
        catalog.species.iter().map(|s| s.name.as_str()),
        &mut species,
        &mut errors,
    );

    for def in &catalog.species {
        if def.name.trim().is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: "species with an empty name".to_string(),
            });
        }
        if let Some(parent) = &def.parent {
            check_ref(
                "species",
                parent,
                &species,
                format!("parent of species '{}'", def.name),
                &mut errors,
            );
        }
    }

    let mut pairs = HashSet::new();
    for tf in &catalog.transformations {
        let context = format!("{} transformation '{}'", tf.species, tf.part);
        check_ref("species", &tf.species, &species, context.clone(), &mut errors);

        let key = format!("{}/{}", tf.species.to_lowercase(), tf.part.to_lowercase());
        if !pairs.insert(key.clone()) {
            errors.push(ValidationError::DuplicateId {
                kind: "transformation",
                id: key,
            });
        }

        for (field, text) in [
            ("shift message", &tf.shift_message),
            ("grow message", &tf.grow_message),
            ("single description", &tf.single_description),
        ] {
            if text.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: {field} is empty"),
                });
            }
        }
        if tf.default_pattern.is_some() != tf.default_pattern_colour.is_some() {
            errors.push(ValidationError::InvalidValue {
                context: format!("{context}: default pattern and pattern colour must be set together"),
            });
        }
    }

    errors
}

/// Validate that every required message table in a `TextDef` has at least one variant.
///
/// Uniform variants are optional; the engine falls back to per-side messages without them.
pub fn validate_text(text: &TextDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, set) in [
        ("colour shift", &text.colour_shift),
        ("pattern shift", &text.pattern_shift),
        ("pattern add", &text.pattern_add),
        ("pattern colour shift", &text.pattern_colour_shift),
        ("part removal", &text.part_removal),
        ("pattern removal", &text.pattern_removal),
    ] {
        check_variants(&format!("{name} (single)"), &set.single, &mut errors);
        if !set.uniform.is_empty() {
            check_variants(&format!("{name} (uniform)"), &set.uniform, &mut errors);
        }
    }

    let nc = &text.no_change;
    for (name, variants) in [
        ("no change: species", &nc.species),
        ("no change: colour", &nc.colour),
        ("no change: pattern", &nc.pattern),
        ("no change: pattern colour", &nc.pattern_colour),
        ("no change: missing part", &nc.missing_part),
        ("no change: missing pattern", &nc.missing_pattern),
        ("no change: nothing to remove", &nc.nothing_to_remove),
        ("description intro", &text.description_intro),
    ] {
        check_variants(name, variants, &mut errors);
    }

    errors
}

fn check_variants(name: &str, variants: &[String], errors: &mut Vec<ValidationError>) {
    if variants.is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: format!("{name} has no message variants"),
        });
    } else if variants.iter().any(|v| v.trim().is_empty()) {
        errors.push(ValidationError::InvalidValue {
            context: format!("{name} contains an empty message"),
        });
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_lowercase()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(&id.to_lowercase()) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
