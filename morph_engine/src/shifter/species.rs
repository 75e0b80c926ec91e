//! Species shifting: switches parts to another species' transformation, adding any
//! part the character doesn't have yet.

use crate::appearance::{Appearance, AppearanceComponent};
use crate::bodypart::{Bodypart, Chirality};
use crate::catalog::Transformation;
use crate::error::ShiftError;
use crate::shifter::{AppearanceShifter, ShiftAction, ShiftBodypartResult, ShiftContext};

pub struct SpeciesShifter<'a> {
    ctx: ShiftContext<'a>,
    species: String,
}

impl<'a> SpeciesShifter<'a> {
    /// # Errors
    /// - `SpeciesNotFound` if the catalog has no such species
    pub fn new(ctx: ShiftContext<'a>, species: &str) -> Result<SpeciesShifter<'a>, ShiftError> {
        let species = ctx
            .catalog
            .species(species)
            .ok_or_else(|| ShiftError::SpeciesNotFound(species.to_string()))?;
        Ok(SpeciesShifter {
            ctx,
            species: species.name.clone(),
        })
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    fn transformation(&self, bodypart: Bodypart) -> Result<&'a Transformation, ShiftError> {
        self.ctx
            .catalog
            .lookup_transformation(bodypart, &self.species)
            .ok_or_else(|| ShiftError::TransformationNotFound {
                bodypart,
                species: self.species.clone(),
            })
    }
}

impl AppearanceShifter for SpeciesShifter<'_> {
    fn name(&self) -> &'static str {
        "species shifter"
    }

    fn paragraph_wrap(&self) -> usize {
        self.ctx.paragraph_wrap()
    }

    fn shift_bodypart(
        &mut self,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let transformation = self.transformation(bodypart)?;

        let action = match appearance.component_mut(bodypart, side) {
            None => {
                appearance.insert_component(AppearanceComponent::from_transformation(transformation, side));
                ShiftAction::Add
            },
            Some(component) if component.species.trim().eq_ignore_ascii_case(self.species.trim()) => {
                ShiftAction::Nothing
            },
            Some(component) => {
                let was_template = self.ctx.catalog.is_template(&component.species);
                component.set_transformation(transformation);
                if was_template {
                    component.inherit_defaults(transformation);
                }
                ShiftAction::Shift
            },
        };

        let message = match action {
            ShiftAction::Add => self.add_message(appearance, bodypart, side)?,
            ShiftAction::Shift => self.shift_message(appearance, bodypart, side)?,
            _ => self.ctx.render_part(
                self.ctx.text.no_species_change.pick(),
                appearance,
                bodypart,
                side,
            ),
        };
        Ok(ShiftBodypartResult::new(action, message))
    }

    fn uniform_shift_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        let transformation = self.transformation(bodypart)?;
        Ok(self
            .ctx
            .render_uniform(transformation.uniform_shift_message.as_deref(), appearance, bodypart))
    }

    fn uniform_add_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        let transformation = self.transformation(bodypart)?;
        Ok(self
            .ctx
            .render_uniform(transformation.uniform_grow_message.as_deref(), appearance, bodypart))
    }

    fn shift_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        let transformation = self.transformation(bodypart)?;
        Ok(self
            .ctx
            .render_part(&transformation.shift_message, appearance, bodypart, side))
    }

    fn add_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        let transformation = self.transformation(bodypart)?;
        Ok(self
            .ctx
            .render_part(&transformation.grow_message, appearance, bodypart, side))
    }

    fn no_change_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx
            .render(self.ctx.text.no_species_change.pick(), appearance, None)
    }
}
