//! Base colour shifting. Parts must already exist; this never adds or removes them.

use crate::appearance::Appearance;
use crate::bodypart::{Bodypart, Chirality};
use crate::colour::Colour;
use crate::error::ShiftError;
use crate::shifter::{AppearanceShifter, ShiftAction, ShiftBodypartResult, ShiftContext};

pub struct ColourShifter<'a> {
    ctx: ShiftContext<'a>,
    colour: Colour,
}

impl<'a> ColourShifter<'a> {
    pub fn new(ctx: ShiftContext<'a>, colour: Colour) -> ColourShifter<'a> {
        ColourShifter { ctx, colour }
    }
}

impl AppearanceShifter for ColourShifter<'_> {
    fn name(&self) -> &'static str {
        "colour shifter"
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
        let Some(current) = appearance.component(bodypart, side).map(|c| c.base_colour) else {
            let message = self.ctx.render(self.ctx.text.missing_part.pick(), appearance, None);
            return Ok(ShiftBodypartResult::nothing(message));
        };
        if current.is_same_colour_as(&self.colour) {
            let message = self
                .ctx
                .render_part(self.ctx.text.no_colour_change.pick(), appearance, bodypart, side);
            return Ok(ShiftBodypartResult::nothing(message));
        }
        if let Some(component) = appearance.component_mut(bodypart, side) {
            component.base_colour = self.colour;
        }
        let message = self.shift_message(appearance, bodypart, side)?;
        Ok(ShiftBodypartResult::new(ShiftAction::Shift, message))
    }

    fn uniform_shift_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Ok(self
            .ctx
            .render_uniform(self.ctx.text.colour_shift.uniform(), appearance, bodypart))
    }

    fn uniform_add_message(&self, _appearance: &Appearance, _bodypart: Bodypart) -> Result<Option<String>, ShiftError> {
        Err(ShiftError::Unsupported {
            shifter: self.name(),
            operation: "add body parts",
        })
    }

    fn shift_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError> {
        Ok(self
            .ctx
            .render_part(self.ctx.text.colour_shift.single(), appearance, bodypart, side))
    }

    fn add_message(&self, _appearance: &Appearance, _bodypart: Bodypart, _side: Chirality) -> Result<String, ShiftError> {
        Err(ShiftError::Unsupported {
            shifter: self.name(),
            operation: "add body parts",
        })
    }

    fn no_change_message(&self, appearance: &Appearance, _bodypart: Bodypart) -> String {
        self.ctx.render(self.ctx.text.no_colour_change.pick(), appearance, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::{Shade, ShadeModifier};
    use crate::shifter::shift;
    use crate::shifter::test_support::Fixture;

    #[test]
    fn recolours_both_arms_at_once() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let red = Colour::new(Shade::Red, Some(ShadeModifier::Dark));
        let mut shifter = ColourShifter::new(fixture.ctx(), red);

        let result = shift(&mut shifter, &mut appearance, Bodypart::Arms, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Shift);
        assert_eq!(result.message, "Both of Rina's arms turn dark red.");
        assert!(
            appearance
                .components()
                .filter(|c| c.bodypart == Bodypart::Arm)
                .all(|c| c.base_colour == red)
        );
    }

    #[test]
    fn modifier_counts_towards_colour_identity() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let mut same = ColourShifter::new(fixture.ctx(), Colour::new(Shade::Tan, None));
        let result = shift(&mut same, &mut appearance, Bodypart::Body, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Nothing);
        assert_eq!(result.message, "Rina is already that colour.");

        let mut lighter = ColourShifter::new(fixture.ctx(), Colour::new(Shade::Tan, Some(ShadeModifier::Light)));
        let result = shift(&mut lighter, &mut appearance, Bodypart::Body, Chirality::Center).expect("shift");
        assert_eq!(result.action, ShiftAction::Shift);
        assert_eq!(result.message, "Rina's body turns light tan.");
    }

    #[test]
    fn absent_parts_are_not_added() {
        let fixture = Fixture::new();
        let mut appearance = fixture.default_appearance();
        let mut shifter = ColourShifter::new(fixture.ctx(), Colour::new(Shade::Blue, None));
        let result = shift(&mut shifter, &mut appearance, Bodypart::Tail, Chirality::Center).expect("shift");
        assert_eq!(result, ShiftBodypartResult::nothing("Rina doesn't have that part."));
        assert!(!appearance.has_part(Bodypart::Tail));
        assert!(shifter.add_message(&appearance, Bodypart::Tail, Chirality::Center).is_err());
    }
}
