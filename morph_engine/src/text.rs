//! Narration templates that aren't tied to a particular transformation.
//!
//! Each table holds one or more variants; a variant is chosen at random every time a
//! message is built, so repeated shifts don't read identically.

use morph_data::{MessageSetDef, TextDef};
use rand::prelude::IndexedRandom;

/// Single-part and uniform (both sides at once) variants for one kind of change.
#[derive(Debug, Clone, Default)]
pub struct MessageSet {
    single: Vec<String>,
    uniform: Vec<String>,
}

impl MessageSet {
    pub fn new(single: Vec<String>, uniform: Vec<String>) -> MessageSet {
        MessageSet { single, uniform }
    }

    /// A random single-part variant (empty if there are none).
    pub fn single(&self) -> &str {
        pick(&self.single)
    }

    /// A random uniform variant, or `None` if the table has no uniform variants.
    pub fn uniform(&self) -> Option<&str> {
        if self.uniform.is_empty() {
            None
        } else {
            Some(pick(&self.uniform))
        }
    }
}

impl From<&MessageSetDef> for MessageSet {
    fn from(def: &MessageSetDef) -> Self {
        MessageSet::new(def.single.clone(), def.uniform.clone())
    }
}

fn pick(variants: &[String]) -> &str {
    let mut rng = rand::rng();
    variants.choose(&mut rng).map_or("", String::as_str)
}

/// A list of interchangeable templates.
#[derive(Debug, Clone, Default)]
pub struct Variants(Vec<String>);

impl Variants {
    pub fn pick(&self) -> &str {
        pick(&self.0)
    }
}

impl From<&Vec<String>> for Variants {
    fn from(list: &Vec<String>) -> Self {
        Variants(list.clone())
    }
}

/// All shared narration templates.
#[derive(Debug, Clone, Default)]
pub struct TransformationText {
    pub colour_shift: MessageSet,
    pub pattern_shift: MessageSet,
    pub pattern_add: MessageSet,
    pub pattern_colour_shift: MessageSet,
    pub part_removal: MessageSet,
    pub pattern_removal: MessageSet,
    pub no_species_change: Variants,
    pub no_colour_change: Variants,
    pub no_pattern_change: Variants,
    pub no_pattern_colour_change: Variants,
    pub missing_part: Variants,
    pub missing_pattern: Variants,
    pub nothing_to_remove: Variants,
    pub description_intro: Variants,
}

impl From<&TextDef> for TransformationText {
    fn from(def: &TextDef) -> Self {
        let nc = &def.no_change;
        TransformationText {
            colour_shift: (&def.colour_shift).into(),
            pattern_shift: (&def.pattern_shift).into(),
            pattern_add: (&def.pattern_add).into(),
            pattern_colour_shift: (&def.pattern_colour_shift).into(),
            part_removal: (&def.part_removal).into(),
            pattern_removal: (&def.pattern_removal).into(),
            no_species_change: (&nc.species).into(),
            no_colour_change: (&nc.colour).into(),
            no_pattern_change: (&nc.pattern).into(),
            no_pattern_colour_change: (&nc.pattern_colour).into(),
            missing_part: (&nc.missing_part).into(),
            missing_pattern: (&nc.missing_pattern).into(),
            nothing_to_remove: (&nc.nothing_to_remove).into(),
            description_intro: (&def.description_intro).into(),
        }
    }
}
