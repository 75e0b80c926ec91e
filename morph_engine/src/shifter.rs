//! Shift and remove algorithms.
//!
//! A request names a body part and a side. Leaf parts go straight to the strategy's
//! single-part primitive. Composite parts are decomposed in taxonomy order: nested
//! composites recurse, chiral parts are tried left then right, everything else is
//! tried at center. Changed parts are narrated into one paragraph-wrapped message,
//! with a matching left/right change collapsed into a single uniform sentence.
//!
//! The recursion lives in [`shift`] and [`remove`]; concrete strategies in the
//! submodules only implement [`AppearanceShifter`] or [`AppearanceRemover`].

pub mod colour;
pub mod part_remover;
pub mod pattern;
pub mod pattern_colour;
pub mod pattern_remover;
pub mod species;

pub use colour::ColourShifter;
pub use part_remover::PartRemover;
pub use pattern::PatternShifter;
pub use pattern_colour::PatternColourShifter;
pub use pattern_remover::PatternRemover;
pub use species::SpeciesShifter;

use log::{debug, info};
use variantly::Variantly;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::bodypart::{Bodypart, Chirality, get_composing_parts};
use crate::catalog::Catalog;
use crate::character::Character;
use crate::description::DescriptionBuilder;
use crate::error::ShiftError;
use crate::narration::ParagraphBuffer;
use crate::text::TransformationText;

/// What a shift or remove request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Variantly)]
pub enum ShiftAction {
    Nothing,
    Add,
    Shift,
    Remove,
}

/// Outcome of one shift or remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftBodypartResult {
    pub action: ShiftAction,
    pub message: String,
}

impl ShiftBodypartResult {
    pub fn new(action: ShiftAction, message: impl Into<String>) -> ShiftBodypartResult {
        ShiftBodypartResult {
            action,
            message: message.into(),
        }
    }

    pub fn nothing(message: impl Into<String>) -> ShiftBodypartResult {
        ShiftBodypartResult::new(ShiftAction::Nothing, message)
    }
}

/// Shared lookups and rendering for concrete strategies.
#[derive(Debug, Clone, Copy)]
pub struct ShiftContext<'a> {
    pub catalog: &'a Catalog,
    pub text: &'a TransformationText,
    pub descriptions: &'a DescriptionBuilder,
    pub character: &'a Character,
}

impl ShiftContext<'_> {
    /// Render a template about the character, optionally about one part.
    pub fn render(&self, template: &str, appearance: &Appearance, component: Option<&AppearanceComponent>) -> String {
        self.descriptions.build(template, self.character, appearance, component)
    }

    /// Render a template about the part at `(bodypart, side)`, if it's present.
    pub fn render_part(&self, template: &str, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> String {
        self.render(template, appearance, appearance.component(bodypart, side))
    }

    /// Render a both-sides template about a pair, using the left part as context.
    pub fn render_uniform(&self, template: Option<&str>, appearance: &Appearance, bodypart: Bodypart) -> Option<String> {
        template.map(|t| self.render_part(t, appearance, bodypart, Chirality::Left))
    }

    pub fn paragraph_wrap(&self) -> usize {
        self.descriptions.paragraph_wrap()
    }
}

/// A strategy that changes body parts.
pub trait AppearanceShifter {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn paragraph_wrap(&self) -> usize;

    /// Apply the change to one concrete part on one side.
    ///
    /// # Errors
    /// - if the change can't be looked up or isn't supported
    fn shift_bodypart(
        &mut self,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError>;

    /// One sentence for both sides of a pair changing together, if the strategy has one.
    ///
    /// # Errors
    /// - if the strategy can't narrate this change
    fn uniform_shift_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError>;

    /// # Errors
    /// - if the strategy can't narrate this change
    fn uniform_add_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError>;

    /// # Errors
    /// - if the strategy can't narrate this change
    fn shift_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError>;

    /// # Errors
    /// - if the strategy never adds parts
    fn add_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError>;

    /// Reported when a whole composite request changed nothing.
    fn no_change_message(&self, appearance: &Appearance, bodypart: Bodypart) -> String;
}

/// A strategy that takes things away from body parts.
pub trait AppearanceRemover {
    fn name(&self) -> &'static str;

    fn paragraph_wrap(&self) -> usize;

    /// Remove from one concrete part on one side.
    ///
    /// # Errors
    /// - if the removal isn't supported
    fn remove_bodypart(
        &mut self,
        appearance: &mut Appearance,
        bodypart: Bodypart,
        side: Chirality,
    ) -> Result<ShiftBodypartResult, ShiftError>;

    /// # Errors
    /// - if the strategy can't narrate this removal
    fn uniform_remove_message(&self, appearance: &Appearance, bodypart: Bodypart) -> Result<Option<String>, ShiftError>;

    /// # Errors
    /// - if the strategy can't narrate this removal
    fn remove_message(&self, appearance: &Appearance, bodypart: Bodypart, side: Chirality) -> Result<String, ShiftError>;

    fn nothing_to_remove_message(&self, appearance: &Appearance, bodypart: Bodypart) -> String;
}

/// Reject sides that don't make sense for the part.
///
/// # Errors
/// - `SideRequired` for a one-sided part addressed at center
/// - `SideNotApplicable` for any other part addressed left or right
pub fn check_side(bodypart: Bodypart, side: Chirality) -> Result<(), ShiftError> {
    match (bodypart.is_chiral(), side) {
        (true, Chirality::Center) => Err(ShiftError::SideRequired(bodypart)),
        (false, Chirality::Left | Chirality::Right) => Err(ShiftError::SideNotApplicable { bodypart, side }),
        _ => Ok(()),
    }
}

/// Run a shifter over a body part.
///
/// # Errors
/// - if the side doesn't fit the part
/// - the first error any leaf operation returns; earlier leaf changes are kept
pub fn shift<S: AppearanceShifter + ?Sized>(
    shifter: &mut S,
    appearance: &mut Appearance,
    bodypart: Bodypart,
    side: Chirality,
) -> Result<ShiftBodypartResult, ShiftError> {
    check_side(bodypart, side)?;
    info!("{}: shifting {bodypart} ({side:?})", shifter.name());
    let result = if bodypart.is_composite() {
        shift_composite(shifter, appearance, bodypart)?
    } else {
        shift_leaf(shifter, appearance, bodypart, side)?
    };
    info!("{}: {bodypart} -> {:?}", shifter.name(), result.action);
    Ok(result)
}

fn shift_leaf<S: AppearanceShifter + ?Sized>(
    shifter: &mut S,
    appearance: &mut Appearance,
    bodypart: Bodypart,
    side: Chirality,
) -> Result<ShiftBodypartResult, ShiftError> {
    let result = shifter.shift_bodypart(appearance, bodypart, side)?;
    debug!("{}: leaf {bodypart} ({side:?}) -> {:?}", shifter.name(), result.action);
    Ok(result)
}

fn shift_composite<S: AppearanceShifter + ?Sized>(
    shifter: &mut S,
    appearance: &mut Appearance,
    bodypart: Bodypart,
) -> Result<ShiftBodypartResult, ShiftError> {
    let mut buffer = ParagraphBuffer::new(shifter.paragraph_wrap());

    for &part in get_composing_parts(bodypart) {
        if part.is_composite() {
            let sub = shift_composite(shifter, appearance, part)?;
            if !sub.action.is_nothing() {
                buffer.push(&sub.message);
            }
        } else if part.is_chiral() {
            let left = shift_leaf(shifter, appearance, part, Chirality::Left)?.action;
            let right = shift_leaf(shifter, appearance, part, Chirality::Right)?.action;
            let uniform = match (left, right) {
                (ShiftAction::Shift, ShiftAction::Shift) => shifter.uniform_shift_message(appearance, part)?,
                (ShiftAction::Add, ShiftAction::Add) => shifter.uniform_add_message(appearance, part)?,
                _ => None,
            };
            if let Some(message) = uniform {
                buffer.push(&message);
            } else {
                for (side, action) in [(Chirality::Left, left), (Chirality::Right, right)] {
                    if let Some(message) = side_shift_message(shifter, appearance, part, side, action)? {
                        buffer.push(&message);
                    }
                }
            }
        } else {
            let action = shift_leaf(shifter, appearance, part, Chirality::Center)?.action;
            if let Some(message) = side_shift_message(shifter, appearance, part, Chirality::Center, action)? {
                buffer.push(&message);
            }
        }
    }

    if buffer.is_empty() {
        Ok(ShiftBodypartResult::nothing(shifter.no_change_message(appearance, bodypart)))
    } else {
        Ok(ShiftBodypartResult::new(ShiftAction::Shift, buffer.finish()))
    }
}

fn side_shift_message<S: AppearanceShifter + ?Sized>(
    shifter: &S,
    appearance: &Appearance,
    bodypart: Bodypart,
    side: Chirality,
    action: ShiftAction,
) -> Result<Option<String>, ShiftError> {
    match action {
        ShiftAction::Shift => shifter.shift_message(appearance, bodypart, side).map(Some),
        ShiftAction::Add => shifter.add_message(appearance, bodypart, side).map(Some),
        ShiftAction::Nothing | ShiftAction::Remove => Ok(None),
    }
}

/// Run a remover over a body part.
///
/// # Errors
/// - if the side doesn't fit the part
/// - the first error any leaf operation returns; earlier removals are kept
pub fn remove<R: AppearanceRemover + ?Sized>(
    remover: &mut R,
    appearance: &mut Appearance,
    bodypart: Bodypart,
    side: Chirality,
) -> Result<ShiftBodypartResult, ShiftError> {
    check_side(bodypart, side)?;
    info!("{}: removing {bodypart} ({side:?})", remover.name());
    let result = if bodypart.is_composite() {
        remove_composite(remover, appearance, bodypart)?
    } else {
        remove_leaf(remover, appearance, bodypart, side)?
    };
    info!("{}: {bodypart} -> {:?}", remover.name(), result.action);
    Ok(result)
}

fn remove_leaf<R: AppearanceRemover + ?Sized>(
    remover: &mut R,
    appearance: &mut Appearance,
    bodypart: Bodypart,
    side: Chirality,
) -> Result<ShiftBodypartResult, ShiftError> {
    let result = remover.remove_bodypart(appearance, bodypart, side)?;
    debug!("{}: leaf {bodypart} ({side:?}) -> {:?}", remover.name(), result.action);
    Ok(result)
}

fn remove_composite<R: AppearanceRemover + ?Sized>(
    remover: &mut R,
    appearance: &mut Appearance,
    bodypart: Bodypart,
) -> Result<ShiftBodypartResult, ShiftError> {
    let mut buffer = ParagraphBuffer::new(remover.paragraph_wrap());

    for &part in get_composing_parts(bodypart) {
        if part.is_composite() {
            let sub = remove_composite(remover, appearance, part)?;
            if !sub.action.is_nothing() {
                buffer.push(&sub.message);
            }
        } else if part.is_chiral() {
            let left = remove_leaf(remover, appearance, part, Chirality::Left)?.action;
            let right = remove_leaf(remover, appearance, part, Chirality::Right)?.action;
            let uniform = if left.is_remove() && right.is_remove() {
                remover.uniform_remove_message(appearance, part)?
            } else {
                None
            };
            if let Some(message) = uniform {
                buffer.push(&message);
            } else {
                for (side, action) in [(Chirality::Left, left), (Chirality::Right, right)] {
                    if action.is_remove() {
                        buffer.push(&remover.remove_message(appearance, part, side)?);
                    }
                }
            }
        } else if remove_leaf(remover, appearance, part, Chirality::Center)?
            .action
            .is_remove()
        {
            buffer.push(&remover.remove_message(appearance, part, Chirality::Center)?);
        }
    }

    if buffer.is_empty() {
        Ok(ShiftBodypartResult::nothing(remover.nothing_to_remove_message(appearance, bodypart)))
    } else {
        Ok(ShiftBodypartResult::new(ShiftAction::Shift, buffer.finish()))
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use morph_data::{CatalogDef, TextDef};

    use super::ShiftContext;
    use crate::appearance::Appearance;
    use crate::catalog::Catalog;
    use crate::character::Character;
    use crate::description::DescriptionBuilder;
    use crate::text::TransformationText;

    const CATALOG: &str = r#"#![enable(implicit_some)]
    (
        species: [
            (name: "template"),
            (name: "shark", description: "A sleek ocean predator."),
        ],
        transformations: [
            (species: "template", part: "hair", default_base_colour: "brown",
             shift_message: "{@target}'s hair softens.", grow_message: "{@target} grows hair.",
             single_description: "{@target} has {@colour} hair."),
            (species: "template", part: "face", default_base_colour: "tan",
             shift_message: "{@target}'s face softens.", grow_message: "{@target} grows a face.",
             single_description: "{@target} has a plain face."),
            (species: "template", part: "ear", default_base_colour: "tan",
             shift_message: "{@target}'s {@side} ear rounds off.", grow_message: "{@target} grows a {@side} ear.",
             uniform_shift_message: "Both of {@target}'s ears round off.",
             uniform_grow_message: "{@target} grows a pair of ears.",
             single_description: "{@target} has a plain {@side} ear.",
             uniform_description: "{@target} has plain ears."),
            (species: "template", part: "eye", default_base_colour: "brown",
             shift_message: "{@target}'s {@side} eye shifts.", grow_message: "{@target} grows a {@side} eye.",
             uniform_shift_message: "{@target}'s eyes shift.", uniform_grow_message: "{@target} grows eyes.",
             single_description: "{@target} has a {@colour} {@side} eye.",
             uniform_description: "{@target} has {@colour} eyes."),
            (species: "template", part: "teeth", default_base_colour: "white",
             shift_message: "{@target}'s teeth dull.", grow_message: "{@target} grows teeth.",
             single_description: "{@target} has flat teeth."),
            (species: "template", part: "body", default_base_colour: "tan",
             shift_message: "{@target}'s body softens.", grow_message: "{@target} grows a body.",
             single_description: "{@target} has a plain {@colour} body."),
            (species: "template", part: "arm", default_base_colour: "tan",
             shift_message: "{@target}'s {@side} arm shifts.", grow_message: "{@target} grows a {@side} arm.",
             uniform_shift_message: "{@target}'s arms shift.", uniform_grow_message: "{@target} grows arms.",
             single_description: "{@target} has a plain {@side} arm.",
             uniform_description: "{@target} has plain arms."),
            (species: "template", part: "leg", default_base_colour: "tan",
             shift_message: "{@target}'s {@side} leg shifts.", grow_message: "{@target} grows a {@side} leg.",
             uniform_shift_message: "{@target}'s legs shift.", uniform_grow_message: "{@target} grows legs.",
             single_description: "{@target} has a plain {@side} leg.",
             uniform_description: "{@target} has plain legs."),
            (species: "shark", part: "tail", default_base_colour: "grey",
             shift_message: "{@target}'s tail becomes a {@colour} shark tail.",
             grow_message: "{@target} grows a long {@colour} shark tail.",
             single_description: "A {@colour} shark tail trails behind {@pronoun|object}."),
            (species: "shark", part: "body", default_base_colour: "grey",
             default_pattern: "striped", default_pattern_colour: "white",
             shift_message: "{@target}'s skin toughens into {@colour} shark hide.",
             grow_message: "{@target} grows a shark body.",
             single_description: "{@target} has a {@colour} shark body."),
            (species: "shark", part: "ear", default_base_colour: "grey",
             shift_message: "{@target}'s {@side} ear shrinks to a shark's earhole.",
             grow_message: "A shark earhole opens on {@target}'s {@side} side.",
             uniform_shift_message: "Both of {@target}'s ears shrink to shark earholes.",
             uniform_grow_message: "Shark earholes open on both sides of {@target}'s head.",
             single_description: "{@target} has a shark earhole on the {@side}.",
             uniform_description: "{@target} has shark earholes."),
            (species: "shark", part: "arm", default_base_colour: "grey",
             shift_message: "{@target}'s {@side} arm grows a fin.",
             grow_message: "{@target} sprouts a finned {@side} arm.",
             uniform_shift_message: "Fins rise along both of {@target}'s arms.",
             uniform_grow_message: "{@target} sprouts a pair of finned {@colour} arms.",
             single_description: "{@target}'s {@side} arm is finned.",
             uniform_description: "{@target} has finned arms."),
        ],
    )"#;

    const TEXT: &str = r#"(
        colour_shift: (
            single: ["{@target}'s {@side} {@part} turns {@colour}."],
            uniform: ["Both of {@target}'s {@part|plural} turn {@colour}."],
        ),
        pattern_shift: (
            single: ["{@target}'s {@side} {@part} is now {@pattern}."],
            uniform: ["Both of {@target}'s {@part|plural} are now {@pattern}."],
        ),
        pattern_add: (
            single: ["{@colour|pattern} {@pattern} markings appear on {@target}'s {@side} {@part}."],
            uniform: ["{@colour|pattern} {@pattern} markings appear on both of {@target}'s {@part|plural}."],
        ),
        pattern_colour_shift: (
            single: ["The markings on {@target}'s {@side} {@part} turn {@colour|pattern}."],
        ),
        part_removal: (
            single: ["{@target}'s {@side} {@part} disappears."],
            uniform: ["Both of {@target}'s {@part|plural} disappear."],
        ),
        pattern_removal: (
            single: ["The {@pattern} markings fade from {@target}'s {@side} {@part}."],
        ),
    )"#;

    pub(crate) struct Fixture {
        pub catalog: Catalog,
        pub text: TransformationText,
        pub descriptions: DescriptionBuilder,
        pub character: Character,
    }

    impl Fixture {
        pub fn new() -> Fixture {
            let def: CatalogDef = ron::from_str(CATALOG).expect("fixture catalog parses");
            let text: TextDef = ron::from_str(TEXT).expect("fixture text parses");
            let mut character = Character::new("Marina Reyes", "feminine");
            character.nickname = Some("Rina".into());
            Fixture {
                catalog: Catalog::from_def(&def, "template").expect("fixture catalog builds"),
                text: TransformationText::from(&text),
                descriptions: DescriptionBuilder::default(),
                character,
            }
        }

        pub fn ctx(&self) -> ShiftContext<'_> {
            ShiftContext {
                catalog: &self.catalog,
                text: &self.text,
                descriptions: &self.descriptions,
                character: &self.character,
            }
        }

        pub fn default_appearance(&self) -> Appearance {
            Appearance::default_for(&self.catalog).expect("template covers the default parts")
        }
    }
}
