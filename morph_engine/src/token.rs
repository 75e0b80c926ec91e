//! Narration tokens.
//!
//! Templates embed placeholders of the form `{@identifier}` or `{@identifier|data}`.
//! [`tokenize`] scans a template once, left to right, and returns every `{@...}`
//! placeholder along with its byte span in the template.
//!
//! Registered identifiers (case-insensitive):
//! - `target`, `name` : the character's nickname (`|name` forces the full name)
//! - `pronoun`, `pro` : a pronoun; data selects the form (`subject`, `object`,
//!   `adjective`, `possessive`, `reflexive`) with an optional `+verb` suffix
//! - `its`, `possessive` : possessive pronoun: plain, `|adjective` or `|verb`
//! - `side` : "left"/"right" for the part being narrated
//! - `part` : the narrated part's name (`|plural` for "ears", "arms", …)
//! - `species`, `race` : the dominant species (`|part` for the narrated part's species)
//! - `colour`, `color` : base colour (`|pattern` for the pattern colour)
//! - `pattern` : pattern name
//! - `sex`, `gender` : herm, male, female or sexless
//! - `script` / `inline`, `lua` : named / inline script text
//!
//! Braces that don't start with `@` are literal text. A `{@...}` placeholder whose
//! identifier isn't registered comes back as [`TokenKind::Unrecognized`] and renders
//! as nothing, so it drops out of the narration.

pub mod part;
pub mod pronoun;
pub mod script;
pub mod species;
pub mod target;

pub use part::{ColourToken, PartToken, PatternToken, SideToken};
pub use pronoun::{PossessiveToken, PronounToken};
pub use script::ScriptToken;
pub use species::{SexToken, SpeciesToken};
pub use target::TargetToken;

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use crate::appearance::{Appearance, AppearanceComponent};
use crate::character::Character;
use crate::script::ScriptEvaluator;

/// Everything a token may draw on when producing its text.
#[derive(Clone, Copy)]
pub struct TokenContext<'a> {
    pub character: &'a Character,
    pub appearance: &'a Appearance,
    /// The part being narrated; `None` for character-level text or removed parts.
    pub component: Option<&'a AppearanceComponent>,
    pub morph_threshold: f64,
    pub scripts: Option<&'a dyn ScriptEvaluator>,
}

/// The resolver behind a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Target(TargetToken),
    Pronoun(PronounToken),
    Possessive(PossessiveToken),
    Side(SideToken),
    Part(PartToken),
    Species(SpeciesToken),
    Colour(ColourToken),
    Pattern(PatternToken),
    Sex(SexToken),
    Script(ScriptToken),
    /// An identifier missing from the registry.
    Unrecognized,
}

impl TokenKind {
    /// Produce the replacement text for this token.
    pub fn text(&self, ctx: &TokenContext<'_>) -> String {
        match self {
            TokenKind::Target(t) => t.text(ctx),
            TokenKind::Pronoun(t) => t.text(ctx),
            TokenKind::Possessive(t) => t.text(ctx),
            TokenKind::Side(t) => t.text(ctx),
            TokenKind::Part(t) => t.text(ctx),
            TokenKind::Species(t) => t.text(ctx),
            TokenKind::Colour(t) => t.text(ctx),
            TokenKind::Pattern(t) => t.text(ctx),
            TokenKind::Sex(t) => t.text(ctx),
            TokenKind::Script(t) => t.text(ctx),
            TokenKind::Unrecognized => String::new(),
        }
    }
}

/// A located placeholder inside a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Byte offset of the opening `{`.
    pub start: usize,
    /// Byte length of the whole placeholder, braces included.
    pub length: usize,
    pub identifier: String,
    pub data: Option<String>,
    pub kind: TokenKind,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Builds a token resolver from the placeholder's optional data string.
pub type TokenConstructor = fn(Option<&str>) -> TokenKind;

lazy_static! {
    static ref TOKEN_REGISTRY: HashMap<&'static str, TokenConstructor> = {
        let mut map: HashMap<&'static str, TokenConstructor> = HashMap::new();
        let entries: [(&[&'static str], TokenConstructor); 11] = [
            (&["target", "name"], |data| TokenKind::Target(TargetToken::from_data(data))),
            (&["pronoun", "pro"], |data| TokenKind::Pronoun(PronounToken::from_data(data))),
            (&["its", "possessive"], |data| TokenKind::Possessive(PossessiveToken::from_data(data))),
            (&["side"], |_| TokenKind::Side(SideToken)),
            (&["part", "bodypart"], |data| TokenKind::Part(PartToken::from_data(data))),
            (&["species", "race"], |data| TokenKind::Species(SpeciesToken::from_data(data))),
            (&["colour", "color"], |data| TokenKind::Colour(ColourToken::from_data(data))),
            (&["pattern"], |_| TokenKind::Pattern(PatternToken)),
            (&["sex", "gender"], |_| TokenKind::Sex(SexToken)),
            (&["script"], |data| TokenKind::Script(ScriptToken::named(data))),
            (&["inline", "lua"], |data| TokenKind::Script(ScriptToken::inline(data))),
        ];
        for (aliases, constructor) in entries {
            for alias in aliases {
                map.insert(*alias, constructor);
            }
        }
        map
    };
}

/// Find the constructor registered for an identifier.
pub fn lookup_token(identifier: &str) -> Option<TokenConstructor> {
    TOKEN_REGISTRY.get(identifier.trim().to_lowercase().as_str()).copied()
}

/// Scan a template for `{@...}` placeholders, in order of appearance.
pub fn tokenize(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut idx = 0;

    while let Some(open_rel) = template[idx..].find('{') {
        let start = idx + open_rel;
        let Some(close_rel) = template[start..].find('}') else {
            // unterminated placeholder; the rest is literal text
            break;
        };
        let close = start + close_rel;
        let raw = &template[start + 1..close];

        // "{a {@b}}" -- resume at the innermost opening brace
        if let Some(inner) = raw.rfind('{') {
            idx = start + 1 + inner;
            continue;
        }
        idx = close + 1;

        let Some(body) = raw.strip_prefix('@') else {
            continue;
        };
        let (identifier, data) = match body.rsplit_once('|') {
            Some((identifier, data)) => (identifier.trim(), Some(data)),
            None => (body.trim(), None),
        };
        let kind = match lookup_token(identifier) {
            Some(constructor) => constructor(data),
            None => {
                debug!("dropping unrecognized token '{{{raw}}}' at {start}");
                TokenKind::Unrecognized
            },
        };

        tokens.push(Token {
            start,
            length: close + 1 - start,
            identifier: identifier.to_lowercase(),
            data: data.map(str::to_string),
            kind,
        });
    }

    tokens
}
