//! The engine facade.
//!
//! [`TransformationEngine`] owns the loaded catalog, narration tables and settings,
//! and runs one strategy per call against an appearance the caller already holds.
//! Nothing is persisted here; the caller saves the mutated appearance.

use anyhow::Result;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::bodypart::{Bodypart, Chirality};
use crate::catalog::Catalog;
use crate::character::Character;
use crate::colour::{Colour, Pattern};
use crate::config::EngineConfig;
use crate::description::DescriptionBuilder;
use crate::error::ShiftError;
use crate::script::ScriptEvaluator;
use crate::shifter::{
    ColourShifter, PartRemover, PatternColourShifter, PatternRemover, PatternShifter, ShiftBodypartResult,
    ShiftContext, SpeciesShifter, remove, shift,
};
use crate::text::TransformationText;

#[derive(Debug)]
pub struct TransformationEngine {
    config: EngineConfig,
    catalog: Catalog,
    text: TransformationText,
    descriptions: DescriptionBuilder,
}

impl TransformationEngine {
    pub fn new(config: EngineConfig, catalog: Catalog, text: TransformationText) -> TransformationEngine {
        let descriptions = DescriptionBuilder::new(&config);
        TransformationEngine {
            config,
            catalog,
            text,
            descriptions,
        }
    }

    /// Install the evaluator for script tokens.
    #[must_use]
    pub fn with_scripts(mut self, evaluator: Box<dyn ScriptEvaluator>) -> TransformationEngine {
        self.descriptions = self.descriptions.with_scripts(evaluator);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn text(&self) -> &TransformationText {
        &self.text
    }

    fn context<'a>(&'a self, character: &'a Character) -> ShiftContext<'a> {
        ShiftContext {
            catalog: &self.catalog,
            text: &self.text,
            descriptions: &self.descriptions,
            character,
        }
    }

    /// A new character using the configured default pronouns.
    pub fn new_character(&self, name: &str) -> Character {
        Character::new(name, &self.config.default_pronouns)
    }

    /// A fresh appearance built from the template species.
    ///
    /// # Errors
    /// - if the template species doesn't cover every default part
    pub fn default_appearance(&self) -> Result<Appearance> {
        Appearance::default_for(&self.catalog)
    }

    /// Shift parts into a species, growing any that are missing.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    /// - `SpeciesNotFound` / `TransformationNotFound` for lookup misses
    pub fn shift_species(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
        species: &str,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut shifter = SpeciesShifter::new(self.context(character), species)?;
        shift(&mut shifter, appearance, bodypart, side)
    }

    /// Change the base colour of existing parts.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    pub fn shift_colour(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
        colour: Colour,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut shifter = ColourShifter::new(self.context(character), colour);
        shift(&mut shifter, appearance, bodypart, side)
    }

    /// Give existing parts a pattern in the given colour.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    pub fn shift_pattern(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
        pattern: Pattern,
        colour: Colour,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut shifter = PatternShifter::new(self.context(character), pattern, colour);
        shift(&mut shifter, appearance, bodypart, side)
    }

    /// Recolour the pattern on existing patterned parts.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    pub fn shift_pattern_colour(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
        colour: Colour,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut shifter = PatternColourShifter::new(self.context(character), colour);
        shift(&mut shifter, appearance, bodypart, side)
    }

    /// Remove parts entirely.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    pub fn remove_part(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut remover = PartRemover::new(self.context(character));
        remove(&mut remover, appearance, bodypart, side)
    }

    /// Clear patterns from parts.
    ///
    /// # Errors
    /// - validation errors for a side that doesn't fit the part
    pub fn remove_pattern(
        &self,
        character: &Character,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let mut remover = PatternRemover::new(self.context(character));
        remove(&mut remover, appearance, bodypart, side)
    }

    /// Render a narration template.
    pub fn build_narration(
        &self,
        template: &str,
        character: &Character,
        appearance: &Appearance,
        component: Option<&AppearanceComponent>,
    ) -> String {
        self.descriptions.build(template, character, appearance, component)
    }

    /// Describe the character's whole appearance.
    pub fn describe(&self, character: &Character, appearance: &Appearance) -> String {
        self.descriptions
            .describe(&self.catalog, &self.text, character, appearance)
    }
}
