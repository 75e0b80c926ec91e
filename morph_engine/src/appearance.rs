//! Appearance model.
//!
//! An [`Appearance`] is the set of concrete body parts a character currently has. Each
//! [`AppearanceComponent`] is one resolved leaf part on one side; there is never more
//! than one component per `(bodypart, chirality)` pair.

use anyhow::{Result, anyhow};
use log::info;
use serde::{Deserialize, Serialize};

use crate::bodypart::{Bodypart, Chirality, leaf_parts};
use crate::catalog::{Catalog, Transformation};
use crate::colour::{Colour, Pattern};

/// Parts every fresh appearance starts with, expanded to their leaves.
pub const DEFAULT_PARTS: [Bodypart; 5] = [
    Bodypart::Hair,
    Bodypart::Head,
    Bodypart::Body,
    Bodypart::Arms,
    Bodypart::Legs,
];

/// One concrete, side-resolved body part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceComponent {
    pub bodypart: Bodypart,
    pub chirality: Chirality,
    pub species: String,
    pub base_colour: Colour,
    pub pattern: Option<Pattern>,
    pub pattern_colour: Option<Colour>,
}

impl AppearanceComponent {
    /// Create a component for one side of a part, using a transformation's default colours.
    pub fn from_transformation(transformation: &Transformation, chirality: Chirality) -> AppearanceComponent {
        AppearanceComponent {
            bodypart: transformation.part,
            chirality,
            species: transformation.species.clone(),
            base_colour: transformation.default_base_colour,
            pattern: transformation.default_pattern,
            pattern_colour: transformation.default_pattern_colour,
        }
    }

    /// Switch this component to another species' transformation, keeping its colours.
    pub fn set_transformation(&mut self, transformation: &Transformation) {
        self.species.clone_from(&transformation.species);
    }

    /// Replace colours and pattern with a transformation's defaults.
    pub fn inherit_defaults(&mut self, transformation: &Transformation) {
        self.base_colour = transformation.default_base_colour;
        self.pattern = transformation.default_pattern;
        self.pattern_colour = transformation.default_pattern_colour;
    }

    /// Returns true if both components look identical apart from their side.
    pub fn mirrors(&self, other: &AppearanceComponent) -> bool {
        self.bodypart == other.bodypart
            && self.species.eq_ignore_ascii_case(&other.species)
            && self.base_colour.is_same_colour_as(&other.base_colour)
            && self.pattern == other.pattern
            && match (self.pattern_colour, other.pattern_colour) {
                (Some(a), Some(b)) => a.is_same_colour_as(&b),
                (None, None) => true,
                _ => false,
            }
    }
}

/// The current body-part composition of a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    components: Vec<AppearanceComponent>,
}

impl Appearance {
    pub fn new() -> Appearance {
        Appearance::default()
    }

    /// Build a fresh appearance from the catalog's template species.
    ///
    /// # Errors
    /// - if the template species lacks a transformation for one of the default parts
    pub fn default_for(catalog: &Catalog) -> Result<Appearance> {
        let template = catalog.template_species_name();
        let mut appearance = Appearance::new();
        for part in DEFAULT_PARTS {
            for (leaf, side) in leaf_parts(part) {
                let transformation = catalog
                    .lookup_transformation(leaf, template)
                    .ok_or_else(|| anyhow!("template species '{template}' has no {leaf} transformation"))?;
                appearance.insert_component(AppearanceComponent::from_transformation(transformation, side));
            }
        }
        info!(
            "default appearance created from '{template}' ({} components)",
            appearance.components.len()
        );
        Ok(appearance)
    }

    pub fn components(&self) -> impl Iterator<Item = &AppearanceComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component(&self, bodypart: Bodypart, chirality: Chirality) -> Option<&AppearanceComponent> {
        self.components
            .iter()
            .find(|c| c.bodypart == bodypart && c.chirality == chirality)
    }

    pub fn component_mut(&mut self, bodypart: Bodypart, chirality: Chirality) -> Option<&mut AppearanceComponent> {
        self.components
            .iter_mut()
            .find(|c| c.bodypart == bodypart && c.chirality == chirality)
    }

    pub fn has_component(&self, bodypart: Bodypart, chirality: Chirality) -> bool {
        self.component(bodypart, chirality).is_some()
    }

    /// Returns true if the part is present on any side.
    pub fn has_part(&self, bodypart: Bodypart) -> bool {
        self.components.iter().any(|c| c.bodypart == bodypart)
    }

    /// Insert a component, replacing any existing component for the same part and side.
    pub fn insert_component(&mut self, component: AppearanceComponent) {
        if let Some(existing) = self.component_mut(component.bodypart, component.chirality) {
            *existing = component;
        } else {
            self.components.push(component);
        }
    }

    /// Remove and return the component for a part and side, if present.
    pub fn remove_component(&mut self, bodypart: Bodypart, chirality: Chirality) -> Option<AppearanceComponent> {
        let idx = self
            .components
            .iter()
            .position(|c| c.bodypart == bodypart && c.chirality == chirality)?;
        Some(self.components.remove(idx))
    }

    /// Components ordered by body part, then side (left, right, center).
    pub fn sorted_components(&self) -> Vec<&AppearanceComponent> {
        let mut sorted: Vec<_> = self.components.iter().collect();
        sorted.sort_by_key(|c| (c.bodypart, c.chirality));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Shade;

    fn component(bodypart: Bodypart, chirality: Chirality, species: &str) -> AppearanceComponent {
        AppearanceComponent {
            bodypart,
            chirality,
            species: species.into(),
            base_colour: Colour::new(Shade::Brown, None),
            pattern: None,
            pattern_colour: None,
        }
    }

    #[test]
    fn insert_replaces_matching_side() {
        let mut appearance = Appearance::new();
        appearance.insert_component(component(Bodypart::Arm, Chirality::Left, "human"));
        appearance.insert_component(component(Bodypart::Arm, Chirality::Right, "human"));
        appearance.insert_component(component(Bodypart::Arm, Chirality::Left, "shark"));

        assert_eq!(appearance.len(), 2);
        let left = appearance.component(Bodypart::Arm, Chirality::Left).expect("left arm");
        assert_eq!(left.species, "shark");
    }

    #[test]
    fn remove_returns_the_component() {
        let mut appearance = Appearance::new();
        appearance.insert_component(component(Bodypart::Tail, Chirality::Center, "fox"));

        assert!(appearance.remove_component(Bodypart::Tail, Chirality::Left).is_none());
        let removed = appearance
            .remove_component(Bodypart::Tail, Chirality::Center)
            .expect("tail removed");
        assert_eq!(removed.species, "fox");
        assert!(appearance.is_empty());
        assert!(!appearance.has_part(Bodypart::Tail));
    }

    #[test]
    fn mirrors_ignores_side_only() {
        let left = component(Bodypart::Ear, Chirality::Left, "fox");
        let mut right = component(Bodypart::Ear, Chirality::Right, "Fox");
        assert!(left.mirrors(&right));
        right.pattern = Some(Pattern::Spotted);
        right.pattern_colour = Some(Colour::new(Shade::Black, None));
        assert!(!left.mirrors(&right));
    }
}
