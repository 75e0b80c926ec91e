//! Pattern shifting: sets a part's pattern together with its colour.
//!
//! A part without a pattern reports [`ShiftAction::Add`] when it gains one.

use crate::appearance::Appearance;
use crate::bodypart::{Bodypart, Chirality};
use crate::colour::{Colour, Pattern};
use crate::error::ShiftError;
use crate::shifter::{AppearanceShifter, ShiftAction, ShiftBodypartResult, ShiftContext};

pub struct PatternShifter<'a> {
    ctx: ShiftContext<'a>,
    pattern: Pattern,
    colour: Colour,
}

impl<'a> PatternShifter<'a> {
    pub fn new(ctx: ShiftContext<'a>, pattern: Pattern, colour: Colour) -> PatternShifter<'a> {
        PatternShifter { ctx, pattern, colour }
    }
}

impl AppearanceShifter for PatternShifter<'_> {
    fn name(&self) -> &'static str {
        "pattern shifter"
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
        let Some(component) = appearance.component(bodypart, side) else {
            let message = self.ctx.render(self.ctx.text.missing_part.pick(), appearance, None);
            return Ok(ShiftBodypartResult::nothing(message));
        };

        let action = match (component.pattern, component.pattern_colour) {
            (None, _) => ShiftAction::Add,
            (Some(pattern), Some(colour)) if pattern == self.pattern && colour.is_same_colour_as(&self.colour) => {
                ShiftAction::Nothing
            },
            _ => ShiftAction::Shift,
        };
        if action.is_nothing() {
            let message = self
                .ctx
                .render_part(self.ctx.text.no_pattern_change.pick(), appearance, bodypart, side);
            return Ok(ShiftBodypartResult::nothing(message));
        }

        if let Some(component) = appearance.component_mut(bodypart, side) {
            component.pattern = Some(self.pattern);
            component.pattern_colour = Some(self.colour);
        }
        let message = if action.is_add() {
            self.add_message(appearance, bodypart, side)?
        } else {
            self.shift_message(appearance, bodypart, side)?
        };
        Ok(ShiftBodypartResult::new(action, message))
    }

    fn uniform_shift_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Ok(self
            .ctx
            .render_uniform(self.ctx.text.pattern_shift.uniform(), appearance, bodypart))
    }

    fn uniform_add_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Ok(self
            .ctx
            .render_uniform(self.ctx.text.pattern_add.uniform(), appearance, bodypart))
    }

    fn shift_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        Ok(self
            .ctx
            .render_part(self.ctx.text.pattern_shift.single(), appearance, bodypart, side))
    }

    fn add_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        Ok(self
            .ctx
            .render_part(self.ctx.text.pattern_add.single(), appearance, bodypart, side))
    }

    fn no_change_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx.render(self.ctx.text.no_pattern_change.pick(), appearance, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Shade;
    use crate::shifter::shift;
    use crate::shifter::test_support::Fixture;

    #[test]
    fn new_pattern_is_an_add_then_a_shift() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let black = Colour::new(Shade::Black, None);

        let mut spots = PatternShifter::new(fixture.ctx(), Pattern::Spotted, black);
        let result = shift(&mut spots, &mut appearance, Bodypart::Body, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Add);
        assert_eq!(result.message, "Black spotted markings appear on Rina's body.");

        let result = shift(&mut spots, &mut appearance, Bodypart::Body, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Nothing);

        let mut stripes = PatternShifter::new(fixture.ctx(), Pattern::Striped, black);
        let result = shift(&mut stripes, &mut appearance, Bodypart::Body, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Shift);
        assert_eq!(result.message, "Rina's body is now striped.");
    }

    #[test]
    fn pair_gaining_a_pattern_is_narrated_once() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let mut shifter = PatternShifter::new(fixture.ctx(), Pattern::Speckled, Colour::new(Shade::Gold, None));
        let result = shift(&mut shifter, &mut appearance, Bodypart::Legs, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Shift);
        assert_eq!(result.message, "Gold speckled markings appear on both of Rina's legs.");
    }
}
