use serde::{Deserialize, Serialize};

/// Stable identifier used across catalog references (species names).
pub type Id = String;

/// Top-level authored catalog loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogDef {
    #[serde(default)]
    pub species: Vec<SpeciesDef>,
    #[serde(default)]
    pub transformations: Vec<TransformationDef>,
}

/// A species that body parts can be shifted into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesDef {
    pub name: Id,
    #[serde(default)]
    pub parent: Option<Id>,
    #[serde(default)]
    pub description: String,
}

/// How a single body part looks (and changes) when it belongs to a given species.
///
/// `part` and the colour/pattern fields are kept as authored strings here; the engine
/// parses them into typed values when it builds its catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformationDef {
    pub species: Id,
    pub part: String,
    #[serde(default)]
    pub description: String,
    pub default_base_colour: String,
    #[serde(default)]
    pub default_pattern: Option<String>,
    #[serde(default)]
    pub default_pattern_colour: Option<String>,
    #[serde(default)]
    pub is_nsfw: bool,
    pub shift_message: String,
    pub grow_message: String,
    #[serde(default)]
    pub uniform_shift_message: Option<String>,
    #[serde(default)]
    pub uniform_grow_message: Option<String>,
    pub single_description: String,
    #[serde(default)]
    pub uniform_description: Option<String>,
}

/// A set of narration variants for one kind of change.
///
/// One variant is picked at random each time a message is built.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageSetDef {
    #[serde(default)]
    pub single: Vec<String>,
    #[serde(default)]
    pub uniform: Vec<String>,
}

/// Messages reported when a request leaves the appearance untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoChangeDef {
    #[serde(default = "default_no_species_change")]
    pub species: Vec<String>,
    #[serde(default = "default_no_colour_change")]
    pub colour: Vec<String>,
    #[serde(default = "default_no_pattern_change")]
    pub pattern: Vec<String>,
    #[serde(default = "default_no_pattern_colour_change")]
    pub pattern_colour: Vec<String>,
    #[serde(default = "default_missing_part")]
    pub missing_part: Vec<String>,
    #[serde(default = "default_missing_pattern")]
    pub missing_pattern: Vec<String>,
    #[serde(default = "default_nothing_to_remove")]
    pub nothing_to_remove: Vec<String>,
}

impl Default for NoChangeDef {
    fn default() -> Self {
        Self {
            species: default_no_species_change(),
            colour: default_no_colour_change(),
            pattern: default_no_pattern_change(),
            pattern_colour: default_no_pattern_colour_change(),
            missing_part: default_missing_part(),
            missing_pattern: default_missing_pattern(),
            nothing_to_remove: default_nothing_to_remove(),
        }
    }
}

/// All narration text that isn't tied to a specific transformation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextDef {
    #[serde(default)]
    pub colour_shift: MessageSetDef,
    #[serde(default)]
    pub pattern_shift: MessageSetDef,
    #[serde(default)]
    pub pattern_add: MessageSetDef,
    #[serde(default)]
    pub pattern_colour_shift: MessageSetDef,
    #[serde(default)]
    pub part_removal: MessageSetDef,
    #[serde(default)]
    pub pattern_removal: MessageSetDef,
    #[serde(default)]
    pub no_change: NoChangeDef,
    #[serde(default = "default_description_intro")]
    pub description_intro: Vec<String>,
}

impl Default for TextDef {
    fn default() -> Self {
        Self {
            colour_shift: MessageSetDef::default(),
            pattern_shift: MessageSetDef::default(),
            pattern_add: MessageSetDef::default(),
            pattern_colour_shift: MessageSetDef::default(),
            part_removal: MessageSetDef::default(),
            pattern_removal: MessageSetDef::default(),
            no_change: NoChangeDef::default(),
            description_intro: default_description_intro(),
        }
    }
}

fn default_no_species_change() -> Vec<String> {
    vec!["{@target} already looks like that.".to_string()]
}

fn default_no_colour_change() -> Vec<String> {
    vec!["{@target} is already that colour.".to_string()]
}

fn default_no_pattern_change() -> Vec<String> {
    vec!["{@target} already has that pattern.".to_string()]
}

fn default_no_pattern_colour_change() -> Vec<String> {
    vec!["{@target}'s pattern is already that colour.".to_string()]
}

fn default_missing_part() -> Vec<String> {
    vec!["{@target} doesn't have that part.".to_string()]
}

fn default_missing_pattern() -> Vec<String> {
    vec!["{@target} doesn't have a pattern there.".to_string()]
}

fn default_nothing_to_remove() -> Vec<String> {
    vec!["{@target} has nothing there to remove.".to_string()]
}

fn default_description_intro() -> Vec<String> {
    vec!["{@target} is a {@sex} {@species}.".to_string()]
}
