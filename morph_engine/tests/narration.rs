use std::path::Path;

use morph_engine as me;
use me::{
    Appearance, AppearanceComponent, Bodypart, Chirality, Colour, ScriptBindings, ScriptError, ScriptEvaluator,
    ScriptRef, Shade, TransformationEngine,
};

fn engine() -> TransformationEngine {
    me::load_engine_from(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).expect("shipped data loads")
}

fn part(bodypart: Bodypart, species: &str) -> AppearanceComponent {
    AppearanceComponent {
        bodypart,
        chirality: Chirality::Center,
        species: species.into(),
        base_colour: Colour::new(Shade::Tan, None),
        pattern: None,
        pattern_colour: None,
    }
}

#[test]
fn literal_templates_come_back_unchanged() {
    let engine = engine();
    let character = engine.new_character("Ash");
    let text = "The tide comes in. The tide goes out.";
    assert_eq!(engine.build_narration(text, &character, &Appearance::new(), None), text);
}

#[test]
fn sex_follows_gendered_parts() {
    let engine = engine();
    let character = engine.new_character("Ash");
    let mut appearance = Appearance::new();
    appearance.insert_component(part(Bodypart::Body, "human"));
    assert_eq!(
        engine.build_narration("{@target} is {@sex}.", &character, &appearance, None),
        "Ash is sexless."
    );

    appearance.insert_component(part(Bodypart::Penis, "human"));
    appearance.insert_component(part(Bodypart::Vagina, "human"));
    assert_eq!(
        engine.build_narration("{@target} is {@sex}.", &character, &appearance, None),
        "Ash is herm."
    );
}

#[test]
fn pronouns_agree_with_their_verbs() {
    let engine = engine();
    let they = engine.new_character("Ash");
    let mut she = engine.new_character("Marina Reyes");
    she.pronoun_family = "feminine".into();
    let template = "{@pronoun|subject+verb} sure the tail is {@its}. {@target|name} looks at {@pronoun|reflexive}.";

    assert_eq!(
        engine.build_narration(template, &they, &Appearance::new(), None),
        "They are sure the tail is theirs. Ash looks at themself."
    );
    assert_eq!(
        engine.build_narration(template, &she, &Appearance::new(), None),
        "She is sure the tail is hers. Marina Reyes looks at herself."
    );
}

#[test]
fn dominant_species_marks_blends() {
    let engine = engine();
    let character = engine.new_character("Ash");
    let mut appearance = engine.default_appearance().expect("default appearance");
    assert_eq!(
        engine.build_narration("{@species}", &character, &appearance, None),
        "Human"
    );

    engine
        .shift_species(&character, &mut appearance, Bodypart::Head, Chirality::Center, "shark")
        .expect("shift head");
    engine
        .shift_species(&character, &mut appearance, Bodypart::Tail, Chirality::Center, "shark")
        .expect("grow tail");
    // 7 of 13 parts
    assert_eq!(
        engine.build_narration("a {@species}.", &character, &appearance, None),
        "A shark-morph."
    );
}

#[test]
fn description_collapses_matching_pairs() {
    let engine = engine();
    let mut character = engine.new_character("Marina Reyes");
    character.nickname = Some("Rina".into());
    let mut appearance = engine.default_appearance().expect("default appearance");

    let description = engine.describe(&character, &appearance);
    assert!(description.starts_with("Rina is a sexless human."), "{description}");
    assert!(description.contains("Their ears are human."), "{description}");
    assert!(!description.contains("left ear"), "{description}");

    engine
        .shift_species(&character, &mut appearance, Bodypart::Ear, Chirality::Left, "fox")
        .expect("shift ear");
    let description = engine.describe(&character, &appearance);
    assert!(description.contains("Rina has a tall orange fox ear on the left."), "{description}");
    assert!(description.contains("Rina has a human right ear."), "{description}");
}

struct Tally;

impl ScriptEvaluator for Tally {
    fn evaluate(&self, script: &ScriptRef, bindings: &ScriptBindings<'_>) -> Result<String, ScriptError> {
        match script {
            ScriptRef::Named(name) if name == "count" => Ok(format!("{} parts", bindings.appearance.len())),
            other => Err(ScriptError::Failed(format!("{other:?}"))),
        }
    }
}

#[test]
fn script_tokens_use_the_installed_evaluator() {
    let engine = engine().with_scripts(Box::new(Tally));
    let character = engine.new_character("Ash");
    let appearance = engine.default_appearance().expect("default appearance");
    let body = appearance
        .component(Bodypart::Body, Chirality::Center)
        .expect("body")
        .clone();

    assert_eq!(
        engine.build_narration("{@script|count}.", &character, &appearance, Some(&body)),
        "12 parts."
    );
    assert_eq!(
        engine.build_narration("{@inline|1+1}", &character, &appearance, Some(&body)),
        "[SCRIPT ERROR]"
    );
}

#[test]
fn empty_appearance_is_not_described() {
    let engine = engine();
    let character = engine.new_character("Ash");
    assert_eq!(engine.describe(&character, &Appearance::new()), "");
}

#[test]
fn unknown_tokens_drop_out_of_narration() {
    let engine = engine();
    let character = engine.new_character("Ash");
    assert_eq!(
        engine.build_narration("{@target} flexes {@flourish} proudly.", &character, &Appearance::new(), None),
        "Ash flexes proudly."
    );
}
