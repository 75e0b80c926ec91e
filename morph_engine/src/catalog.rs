//! Species and transformation lookup.
//!
//! The catalog is built once from authored [`CatalogDef`] data. Species names are
//! matched case-insensitively; a transformation is keyed by `(bodypart, species)`.

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result, bail};
use log::warn;
use morph_data::{CatalogDef, TransformationDef};

use crate::bodypart::Bodypart;
use crate::colour::{Colour, Pattern};

/// A species that body parts can be shifted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    pub parent: Option<String>,
    pub description: String,
}

impl Species {
    /// Species identity is name equality, ignoring case and surrounding whitespace.
    pub fn is_same_species_as(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

/// How one body part looks when it belongs to a species, and how it narrates changing into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    pub species: String,
    pub part: Bodypart,
    pub description: String,
    pub default_base_colour: Colour,
    pub default_pattern: Option<Pattern>,
    pub default_pattern_colour: Option<Colour>,
    pub is_nsfw: bool,
    pub shift_message: String,
    pub grow_message: String,
    pub uniform_shift_message: Option<String>,
    pub uniform_grow_message: Option<String>,
    pub single_description: String,
    pub uniform_description: Option<String>,
}

impl Transformation {
    fn from_def(def: &TransformationDef) -> Result<Transformation> {
        let part: Bodypart = def.part.parse()?;
        if part.is_composite() {
            bail!("'{}' is a composite part and can't carry its own transformation", def.part);
        }
        let default_base_colour: Colour = def.default_base_colour.parse()?;
        let default_pattern: Option<Pattern> = def.default_pattern.as_deref().map(str::parse).transpose()?;
        let default_pattern_colour: Option<Colour> =
            def.default_pattern_colour.as_deref().map(str::parse).transpose()?;

        if part.is_chiral() && (def.uniform_shift_message.is_none() || def.uniform_grow_message.is_none()) {
            warn!(
                "{} {} has no uniform messages; pairs will be narrated side by side",
                def.species, def.part
            );
        }

        Ok(Transformation {
            species: def.species.clone(),
            part,
            description: def.description.clone(),
            default_base_colour,
            default_pattern,
            default_pattern_colour,
            is_nsfw: def.is_nsfw,
            shift_message: def.shift_message.clone(),
            grow_message: def.grow_message.clone(),
            uniform_shift_message: def.uniform_shift_message.clone(),
            uniform_grow_message: def.uniform_grow_message.clone(),
            single_description: def.single_description.clone(),
            uniform_description: def.uniform_description.clone(),
        })
    }
}

/// All known species and their per-part transformations.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    species: BTreeMap<String, Species>,
    transformations: HashMap<(Bodypart, String), Transformation>,
    template_species: String,
}

fn species_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// Build a catalog from authored data.
    ///
    /// # Errors
    /// - if a transformation names an unknown body part, colour or pattern
    /// - if a transformation targets a composite part
    pub fn from_def(def: &CatalogDef, template_species: &str) -> Result<Catalog> {
        let mut catalog = Catalog {
            template_species: template_species.to_string(),
            ..Catalog::default()
        };
        for sp in &def.species {
            catalog.species.insert(
                species_key(&sp.name),
                Species {
                    name: sp.name.clone(),
                    parent: sp.parent.clone(),
                    description: sp.description.clone(),
                },
            );
        }
        for tf in &def.transformations {
            let transformation = Transformation::from_def(tf)
                .with_context(|| format!("while building {} transformation '{}'", tf.species, tf.part))?;
            catalog.insert_transformation(transformation);
        }
        Ok(catalog)
    }

    /// Register (or replace) a species.
    pub fn insert_species(&mut self, species: Species) {
        self.species.insert(species_key(&species.name), species);
    }

    /// Register (or replace) the transformation for its `(part, species)` pair.
    pub fn insert_transformation(&mut self, transformation: Transformation) {
        self.transformations.insert(
            (transformation.part, species_key(&transformation.species)),
            transformation,
        );
    }

    pub fn species(&self, name: &str) -> Option<&Species> {
        self.species.get(&species_key(name))
    }

    /// All species, ordered by name.
    pub fn all_species(&self) -> impl Iterator<Item = &Species> {
        self.species.values()
    }

    /// Look up the transformation registered for a body part and species.
    pub fn lookup_transformation(&self, bodypart: Bodypart, species: &str) -> Option<&Transformation> {
        self.transformations.get(&(bodypart, species_key(species)))
    }

    /// Transformations available for a species, in taxonomy order.
    pub fn transformations_for(&self, species: &str) -> Vec<&Transformation> {
        Bodypart::ALL
            .iter()
            .filter_map(|part| self.lookup_transformation(*part, species))
            .collect()
    }

    /// Name of the placeholder species used for fresh appearances.
    pub fn template_species_name(&self) -> &str {
        &self.template_species
    }

    /// Returns true if `species` names the placeholder template species.
    pub fn is_template(&self, species: &str) -> bool {
        species_key(species) == species_key(&self.template_species)
    }
}
