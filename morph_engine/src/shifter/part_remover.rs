//! Part removal.
//!
//! Removed components are kept until the remover is dropped so that narration can
//! still describe what was lost (`{@colour}`, `{@species|part}`, …).

use std::collections::HashMap;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::bodypart::{Bodypart, Chirality};
use crate::error::ShiftError;
use crate::shifter::{AppearanceRemover, ShiftAction, ShiftBodypartResult, ShiftContext};

pub struct PartRemover<'a> {
    ctx: ShiftContext<'a>,
    removed: HashMap<(Bodypart, Chirality), AppearanceComponent>,
}

impl<'a> PartRemover<'a> {
    pub fn new(ctx: ShiftContext<'a>) -> PartRemover<'a> {
        PartRemover {
            ctx,
            removed: HashMap::new(),
        }
    }

    /// Components taken off by this remover so far.
    pub fn removed(&self) -> impl Iterator<Item = &AppearanceComponent> {
        self.removed.values()
    }
}

impl AppearanceRemover for PartRemover<'_> {
    fn name(&self) -> &'static str {
        "part remover"
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
        let Some(component) = appearance.remove_component(bodypart, side) else {
            let message = self
                .ctx
                .render(self.ctx.text.nothing_to_remove.pick(), appearance, None);
            return Ok(ShiftBodypartResult::nothing(message));
        };
        self.removed.insert((bodypart, side), component);
        let message = self.remove_message(appearance, bodypart, side)?;
        Ok(ShiftBodypartResult::new(ShiftAction::Remove, message))
    }

    fn uniform_remove_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        let left = self.removed.get(&(bodypart, Chirality::Left));
        Ok(self
            .ctx
            .text
            .part_removal
            .uniform()
            .map(|t| self.ctx.render(t, appearance, left)))
    }

    fn remove_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        let removed = self.removed.get(&(bodypart, side));
        Ok(self
            .ctx
            .render(self.ctx.text.part_removal.single(), appearance, removed))
    }

    fn nothing_to_remove_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx
            .render(self.ctx.text.nothing_to_remove.pick(), appearance, None)
    }
}
