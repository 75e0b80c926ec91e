use crate::appearance::Appearance;
use crate::bodypart::{Bodypart, Chirality};
use crate::colour::Colour;
use crate::error::ShiftError;
use crate::shifter::{AppearanceShifter, ShiftAction, ShiftBodypartResult, ShiftContext};

/// Recolours an existing pattern. Parts without a pattern are left alone.
pub struct PatternColourShifter<'a> {
    ctx: ShiftContext<'a>,
    colour: Colour,
}

impl<'a> PatternColourShifter<'a> {
    pub fn new(ctx: ShiftContext<'a>, colour: Colour) -> PatternColourShifter<'a> {
        PatternColourShifter { ctx, colour }
    }

    fn unsupported(&self) -> ShiftError {
        ShiftError::Unsupported {
            shifter: self.name(),
            operation: "add body parts",
        }
    }
}

impl AppearanceShifter for PatternColourShifter<'_> {
    fn name(&self) -> &'static str {
        "pattern colour shifter"
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
        if component.pattern.is_none() {
            let message = self
                .ctx
                .render_part(self.ctx.text.missing_pattern.pick(), appearance, bodypart, side);
            return Ok(ShiftBodypartResult::nothing(message));
        }
        if component
            .pattern_colour
            .is_some_and(|current| current.is_same_colour_as(&self.colour))
        {
            let message = self.ctx.render_part(
                self.ctx.text.no_pattern_colour_change.pick(),
                appearance,
                bodypart,
                side,
            );
            return Ok(ShiftBodypartResult::nothing(message));
        }

        if let Some(component) = appearance.component_mut(bodypart, side) {
            component.pattern_colour = Some(self.colour);
        }
        let message = self.shift_message(appearance, bodypart, side)?;
        Ok(ShiftBodypartResult::new(ShiftAction::Shift, message))
    }

    fn uniform_shift_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Ok(self
            .ctx
            .render_uniform(self.ctx.text.pattern_colour_shift.uniform(), appearance, bodypart))
    }

    fn uniform_add_message(&self, _appearance: &Appearance, _bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Err(self.unsupported())
    }

    fn shift_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        Ok(self
            .ctx
            .render_part(self.ctx.text.pattern_colour_shift.single(), appearance, bodypart, side))
    }

    fn add_message(&self, _appearance: &Appearance, _bodypart: Bodypart, _side: Chirality) -> Result<String, ShiftError> {
        Err(self.unsupported())
    }

    fn no_change_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx
            .render(self.ctx.text.no_pattern_colour_change.pick(), appearance, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Pattern, Shade};
    use crate::shifter::shift;
    use crate::shifter::test_support::Fixture;

    #[test]
    fn only_patterned_parts_are_recoloured() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let left = appearance.component_mut(Bodypart::Ear, Chirality::Left).expect("left ear");
        left.pattern = Some(Pattern::Spotted);
        left.pattern_colour = Some(Colour::new(Shade::Black, None));

        let mut shifter = PatternColourShifter::new(fixture.ctx(), Colour::new(Shade::Pink, None));
        let result = shift(&mut shifter, &mut appearance, Bodypart::Head, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Shift);
        assert_eq!(result.message, "The markings on Rina's left ear turn pink.");
        assert_eq!(
            appearance.component(Bodypart::Ear, Chirality::Right).and_then(|c| c.pattern_colour),
            None
        );
    }

    #[test]
    fn no_pattern_means_nothing_to_recolour() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let mut shifter = PatternColourShifter::new(fixture.ctx(), Colour::new(Shade::Pink, None));
        let result = shift(&mut shifter, &mut appearance, Bodypart::Face, Chirality::Center).expect("shift");
        assert_eq!(result, ShiftBodypartResult::nothing("Rina doesn't have a pattern there."));

        let result = shift(&mut shifter, &mut appearance, Bodypart::Head, Chirality::Center).expect("shift");
        assert_eq!(result, ShiftBodypartResult::nothing("Rina's pattern is already that colour."));
    }
}
