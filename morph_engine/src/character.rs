//! Characters and their pronouns.
//!
//! The engine only needs a thin view of a character: who to name in narration and
//! which pronouns to use. Ownership and persistence belong to the caller.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The character being transformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub pronoun_family: String,
}

impl Character {
    pub fn new(name: &str, pronoun_family: &str) -> Character {
        Character {
            id: Uuid::new_v4(),
            name: name.to_string(),
            nickname: None,
            pronoun_family: pronoun_family.to_string(),
        }
    }

    /// Nickname if one is set, otherwise the full name.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|nick| !nick.trim().is_empty())
            .unwrap_or(&self.name)
    }

    /// The character's pronoun set, falling back to singular "they".
    pub fn pronouns(&self) -> &'static PronounSet {
        pronouns_for(&self.pronoun_family).unwrap_or_else(|| {
            warn!(
                "character '{}' ({}) has unknown pronoun family '{}'; using neutral",
                self.name, self.id, self.pronoun_family
            );
            &NEUTRAL
        })
    }
}

/// Grammatical forms a pronoun can be requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PronounForm {
    Subject,
    Object,
    PossessiveAdjective,
    Possessive,
    Reflexive,
}

/// One family of English pronouns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounSet {
    pub family: &'static str,
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive_adjective: &'static str,
    pub possessive: &'static str,
    pub reflexive: &'static str,
    /// "they" takes plural verb agreement ("they are").
    pub plural: bool,
}

impl PronounSet {
    /// Render the pronoun in the requested form, optionally followed by "is"/"are".
    pub fn form(&self, form: PronounForm, with_verb: bool) -> String {
        let word = match form {
            PronounForm::Subject => self.subject,
            PronounForm::Object => self.object,
            PronounForm::PossessiveAdjective => self.possessive_adjective,
            PronounForm::Possessive => self.possessive,
            PronounForm::Reflexive => self.reflexive,
        };
        if with_verb {
            format!("{word} {}", self.verb())
        } else {
            word.to_string()
        }
    }

    pub fn verb(&self) -> &'static str {
        if self.plural { "are" } else { "is" }
    }
}

pub static FEMININE: PronounSet = PronounSet {
    family: "feminine",
    subject: "she",
    object: "her",
    possessive_adjective: "her",
    possessive: "hers",
    reflexive: "herself",
    plural: false,
};

pub static MASCULINE: PronounSet = PronounSet {
    family: "masculine",
    subject: "he",
    object: "him",
    possessive_adjective: "his",
    possessive: "his",
    reflexive: "himself",
    plural: false,
};

pub static NEUTRAL: PronounSet = PronounSet {
    family: "neutral",
    subject: "they",
    object: "them",
    possessive_adjective: "their",
    possessive: "theirs",
    reflexive: "themself",
    plural: true,
};

pub static INANIMATE: PronounSet = PronounSet {
    family: "inanimate",
    subject: "it",
    object: "it",
    possessive_adjective: "its",
    possessive: "its",
    reflexive: "itself",
    plural: false,
};

lazy_static! {
    static ref PRONOUN_FAMILIES: HashMap<&'static str, &'static PronounSet> = {
        let mut map = HashMap::new();
        for (alias, set) in [
            ("feminine", &FEMININE),
            ("she", &FEMININE),
            ("masculine", &MASCULINE),
            ("he", &MASCULINE),
            ("neutral", &NEUTRAL),
            ("they", &NEUTRAL),
            ("inanimate", &INANIMATE),
            ("it", &INANIMATE),
        ] {
            map.insert(alias, set);
        }
        map
    };
}

/// Look up a pronoun family by name or by its subject pronoun.
pub fn pronouns_for(family: &str) -> Option<&'static PronounSet> {
    PRONOUN_FAMILIES.get(family.trim().to_lowercase().as_str()).copied()
}
