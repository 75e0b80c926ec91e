use std::collections::HashMap;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::bodypart::{Bodypart, Chirality};
use crate::error::ShiftError;
use crate::shifter::{AppearanceRemover, ShiftAction, ShiftBodypartResult, ShiftContext};

/// Clears patterns (and their colour) from parts.
pub struct PatternRemover<'a> {
    ctx: ShiftContext<'a>,
    // components as they looked before their pattern was cleared
    cleared: HashMap<(Bodypart, Chirality), AppearanceComponent>,
}

impl<'a> PatternRemover<'a> {
    pub fn new(ctx: ShiftContext<'a>) -> PatternRemover<'a> {
        PatternRemover {
            ctx,
            cleared: HashMap::new(),
        }
    }
}

impl AppearanceRemover for PatternRemover<'_> {
    fn name(&self) -> &'static str {
        "pattern remover"
    }

    fn paragraph_wrap(&self) -> usize {
        self.ctx.paragraph_wrap()
    }

    fn remove_bodypart(
        &mut self,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError> {
        let Some(component) = appearance.component(bodypart, side) else {
            let message = self.ctx.render(self.ctx.text.missing_part.pick(), appearance, None);
            return Ok(ShiftBodypartResult::nothing(message));
        };
        if component.pattern.is_none() {
            let message = self
                .ctx
                .render_part(self.ctx.text.missing_pattern.pick(), appearance, bodypart, side);
            return Ok(ShiftBodypartResult::nothing(message));
        }

        self.cleared.insert((bodypart, side), component.clone());
        if let Some(component) = appearance.component_mut(bodypart, side) {
            component.pattern = None;
            component.pattern_colour = None;
        }
        let message = self.remove_message(appearance, bodypart, side)?;
        Ok(ShiftBodypartResult::new(ShiftAction::Remove, message))
    }

    fn uniform_remove_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        let left = self.cleared.get(&(bodypart, Chirality::Left));
        Ok(self
            .ctx
            .text
            .pattern_removal
            .uniform()
            .map(|t| self.ctx.render(t, appearance, left)))
    }

    fn remove_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        let before = self.cleared.get(&(bodypart, side));
        Ok(self
            .ctx
            .render(self.ctx.text.pattern_removal.single(), appearance, before))
    }

    fn nothing_to_remove_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx.render(self.ctx.text.missing_pattern.pick(), appearance, None)
    }
}
