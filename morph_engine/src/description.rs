//! Template rendering and appearance descriptions.
//!
//! Rendering works in passes over a template. [`tokenize`] locates placeholders and
//! substitution splices their text in, in ascending start order. A placeholder that
//! renders as nothing takes one neighbouring space with it. Finally each
//! period-terminated sentence is trimmed and sentence-cased.

use std::collections::HashSet;

use log::{debug, warn};

use crate::appearance::{Appearance, AppearanceComponent};
use crate::catalog::Catalog;
use crate::character::Character;
use crate::config::EngineConfig;
use crate::narration::ParagraphBuffer;
use crate::script::ScriptEvaluator;
use crate::text::TransformationText;
use crate::token::{Token, TokenContext, tokenize};

/// Renders narration templates for a character.
pub struct DescriptionBuilder {
    morph_threshold: f64,
    paragraph_wrap: usize,
    scripts: Option<Box<dyn ScriptEvaluator>>,
}

impl std::fmt::Debug for DescriptionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptionBuilder")
            .field("morph_threshold", &self.morph_threshold)
            .field("paragraph_wrap", &self.paragraph_wrap)
            .field("scripts", &self.scripts.is_some())
            .finish()
    }
}

impl Default for DescriptionBuilder {
    fn default() -> Self {
        DescriptionBuilder::new(&EngineConfig::default())
    }
}

impl DescriptionBuilder {
    pub fn new(config: &EngineConfig) -> DescriptionBuilder {
        DescriptionBuilder {
            morph_threshold: config.morph_threshold,
            paragraph_wrap: config.paragraph_wrap,
            scripts: None,
        }
    }

    /// Install the evaluator used for `{@script}` and `{@inline}` tokens.
    #[must_use]
    pub fn with_scripts(mut self, evaluator: Box<dyn ScriptEvaluator>) -> DescriptionBuilder {
        self.scripts = Some(evaluator);
        self
    }

    pub fn paragraph_wrap(&self) -> usize {
        self.paragraph_wrap
    }

    /// Render a template for a character, optionally about one of their parts.
    pub fn build(
        &self,
        template: &str,
        character: &Character,
        appearance: &Appearance,
        component: Option<&AppearanceComponent>,
    ) -> String {
        let ctx = TokenContext {
            character,
            appearance,
            component,
            morph_threshold: self.morph_threshold,
            scripts: self.scripts.as_deref(),
        };
        let tokens = tokenize(template);
        let substituted = substitute(template, &tokens, &ctx);
        sentence_case(&substituted)
    }

    /// Describe a whole appearance: the intro line, then every part in taxonomy order.
    ///
    /// A left/right pair that mirror each other is described once with the uniform
    /// description when the transformation has one. An empty appearance has no
    /// description.
    pub fn describe(
        &self,
        catalog: &Catalog,
        text: &TransformationText,
        character: &Character,
        appearance: &Appearance,
    ) -> String {
        if appearance.is_empty() {
            return String::new();
        }
        let mut buffer = ParagraphBuffer::new(self.paragraph_wrap);
        buffer.push(&self.build(text.description_intro.pick(), character, appearance, None));

        let mut described = HashSet::new();
        for component in appearance.sorted_components() {
            let key = (component.bodypart, component.chirality);
            if !described.insert(key) {
                continue;
            }
            let Some(transformation) = catalog.lookup_transformation(component.bodypart, &component.species) else {
                warn!(
                    "no {} transformation for species '{}'; leaving it out of the description",
                    component.bodypart, component.species
                );
                continue;
            };

            let mirror = component
                .bodypart
                .is_chiral()
                .then(|| appearance.component(component.bodypart, component.chirality.opposite()))
                .flatten()
                .filter(|other| component.mirrors(other));
            let template = match (mirror, &transformation.uniform_description) {
                (Some(other), Some(uniform)) => {
                    described.insert((other.bodypart, other.chirality));
                    uniform
                },
                _ => &transformation.single_description,
            };
            buffer.push(&self.build(template, character, appearance, Some(component)));
        }

        buffer.finish()
    }
}

/// Splice token text into the template.
fn substitute(template: &str, tokens: &[Token], ctx: &TokenContext<'_>) -> String {
    let mut ordered: Vec<&Token> = tokens.iter().collect();
    ordered.sort_by_key(|t| t.start);

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;
    let mut after_empty = false;
    for token in ordered {
        if token.start < cursor {
            debug!("skipping overlapping token '{}' at {}", token.identifier, token.start);
            continue;
        }
        after_empty = push_literal(&mut out, &template[cursor..token.start], after_empty);
        let text = token.kind.text(ctx);
        if text.is_empty() {
            after_empty = true;
        } else {
            out.push_str(&text);
            after_empty = false;
        }
        cursor = token.end();
    }
    push_literal(&mut out, &template[cursor..], after_empty);
    out
}

/// Append literal template text. Right after an empty replacement, one of the two
/// spaces around it is dropped, as is a space left in front of punctuation.
///
/// Returns whether the gap is still open (nothing was appended).
fn push_literal(out: &mut String, literal: &str, after_empty: bool) -> bool {
    if literal.is_empty() {
        return after_empty;
    }
    let mut literal = literal;
    if after_empty && (out.is_empty() || out.ends_with([' ', '\t'])) {
        if let Some(rest) = literal.strip_prefix([' ', '\t']) {
            literal = rest;
        } else if literal.starts_with(['.', ',', ';', ':', '!', '?']) {
            out.truncate(out.trim_end_matches([' ', '\t']).len());
        }
    }
    out.push_str(literal);
    false
}

/// Split on periods, trim and capitalize each sentence, and rejoin with ". ".
pub fn sentence_case(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = trimmed
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(". ");
    if trimmed.ends_with('.') && !out.is_empty() {
        out.push('.');
    }
    out
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodypart::{Bodypart, Chirality};
    use crate::colour::{Colour, Pattern, Shade, ShadeModifier};
    use crate::script::{SCRIPT_ERROR_MARKER, ScriptBindings, ScriptError, ScriptRef};

    fn character() -> Character {
        let mut character = Character::new("Marina Reyes", "feminine");
        character.nickname = Some("Rina".into());
        character
    }

    fn left_ear() -> AppearanceComponent {
        AppearanceComponent {
            bodypart: Bodypart::Ear,
            chirality: Chirality::Left,
            species: "shark".into(),
            base_colour: Colour::new(Shade::Grey, Some(ShadeModifier::Dark)),
            pattern: Some(Pattern::Striped),
            pattern_colour: Some(Colour::new(Shade::White, None)),
        }
    }

    struct Echo;

    impl ScriptEvaluator for Echo {
        fn evaluate(&self, script: &ScriptRef, bindings: &ScriptBindings<'_>) -> Result<String, ScriptError> {
            match script {
                ScriptRef::Named(name) if name == "fins" => Ok(format!("{} fins", bindings.component.species)),
                ScriptRef::Named(name) => Err(ScriptError::UnknownScript(name.clone())),
                ScriptRef::Inline(code) => Ok(code.to_uppercase()),
            }
        }
    }

    #[test]
    fn literal_text_is_only_sentence_cased() {
        let builder = DescriptionBuilder::default();
        let out = builder.build("the sea is calm.  waves roll in.", &character(), &Appearance::new(), None);
        assert_eq!(out, "The sea is calm. Waves roll in.");
        assert_eq!(
            builder.build("the sea  is calm.", &character(), &Appearance::new(), None),
            "The sea  is calm."
        );
        assert_eq!(
            builder.build("Already fine. Nothing to do.", &character(), &Appearance::new(), None),
            "Already fine. Nothing to do."
        );
    }

    #[test]
    fn tokens_use_character_and_component() {
        let builder = DescriptionBuilder::default();
        let ear = left_ear();
        let out = builder.build(
            "{@target}'s {@side} ear turns {@colour} with {@colour|pattern} {@pattern} marks. {@pronoun|subject+verb} pleased.",
            &character(),
            &Appearance::new(),
            Some(&ear),
        );
        assert_eq!(
            out,
            "Rina's left ear turns dark grey with white striped marks. She is pleased."
        );
    }

    #[test]
    fn empty_tokens_leave_no_double_spaces() {
        let builder = DescriptionBuilder::default();
        let out = builder.build("{@target|name}'s {@side} tail sways.", &character(), &Appearance::new(), None);
        assert_eq!(out, "Marina Reyes's tail sways.");
        assert_eq!(
            builder.build("A {@side} {@pattern} tail.", &character(), &Appearance::new(), None),
            "A tail."
        );
        assert_eq!(
            builder.build("It is {@side}.", &character(), &Appearance::new(), None),
            "It is."
        );
    }

    #[test]
    fn unknown_tokens_are_dropped() {
        let builder = DescriptionBuilder::default();
        assert_eq!(
            builder.build("{@mystery} happens.", &character(), &Appearance::new(), None),
            "Happens."
        );
        assert_eq!(
            builder.build("{@target} flexes {@mystery} proudly.", &character(), &Appearance::new(), None),
            "Rina flexes proudly."
        );
        assert_eq!(
            builder.build("{curly} stays.", &character(), &Appearance::new(), None),
            "{curly} stays."
        );
    }

    #[test]
    fn empty_appearance_has_no_description() {
        let builder = DescriptionBuilder::default();
        let text = TransformationText::default();
        assert_eq!(
            builder.describe(&Catalog::default(), &text, &character(), &Appearance::new()),
            ""
        );
    }

    #[test]
    fn scripts_need_evaluator_and_component() {
        let ear = left_ear();
        let plain = DescriptionBuilder::default();
        assert_eq!(
            plain.build("{@script|fins}", &character(), &Appearance::new(), Some(&ear)),
            SCRIPT_ERROR_MARKER
        );

        let scripted = DescriptionBuilder::default().with_scripts(Box::new(Echo));
        assert_eq!(
            scripted.build("{@script|fins}", &character(), &Appearance::new(), Some(&ear)),
            "Shark fins"
        );
        assert_eq!(
            scripted.build("{@lua|splash}", &character(), &Appearance::new(), Some(&ear)),
            "SPLASH"
        );
        assert_eq!(
            scripted.build("{@script|fins}", &character(), &Appearance::new(), None),
            SCRIPT_ERROR_MARKER
        );
        assert_eq!(
            scripted.build("{@script|gills}", &character(), &Appearance::new(), Some(&ear)),
            SCRIPT_ERROR_MARKER
        );
    }

    #[test]
    fn sentence_case_handles_edges() {
        assert_eq!(sentence_case(""), "");
        assert_eq!(sentence_case("..."), "");
        assert_eq!(sentence_case("no period"), "No period");
        assert_eq!(sentence_case(" a. b "), "A. B");
    }
}
