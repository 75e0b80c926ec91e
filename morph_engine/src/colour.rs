//! Colour and pattern value objects.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a colour or pattern string can't be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseColourError {
    #[error("'{0}' is not a known shade")]
    UnknownShade(String),
    #[error("'{0}' is not a known shade modifier")]
    UnknownModifier(String),
    #[error("'{0}' is not a known pattern")]
    UnknownPattern(String),
    #[error("empty colour")]
    Empty,
}

macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident, $err:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl FromStr for $name {
            type Err = ParseColourError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name() == key)
                    .ok_or_else(|| ParseColourError::$err(s.to_string()))
            }
        }
    };
}

named_enum!(
    /// The base hue of a colour.
    Shade, UnknownShade {
        White => "white",
        Black => "black",
        Grey => "grey",
        Brown => "brown",
        Red => "red",
        Orange => "orange",
        Yellow => "yellow",
        Green => "green",
        Blue => "blue",
        Purple => "purple",
        Pink => "pink",
        Cyan => "cyan",
        Gold => "gold",
        Silver => "silver",
        Tan => "tan",
        Cream => "cream",
    }
);

named_enum!(
    /// An optional qualifier in front of a shade ("dark red").
    ShadeModifier, UnknownModifier {
        Light => "light",
        Dark => "dark",
        Pale => "pale",
        Deep => "deep",
        Bright => "bright",
        Dull => "dull",
        Fluorescent => "fluorescent",
        Iridescent => "iridescent",
        Rich => "rich",
    }
);

named_enum!(
    /// Markings layered over a part's base colour.
    Pattern, UnknownPattern {
        Striped => "striped",
        Spotted => "spotted",
        Swirly => "swirly",
        Banded => "banded",
        Marbled => "marbled",
        Speckled => "speckled",
        Mottled => "mottled",
        Freckled => "freckled",
        Rosetted => "rosetted",
        TigerStriped => "tiger-striped",
        Scaled => "scaled",
    }
);

/// A shade with an optional modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour {
    pub shade: Shade,
    pub modifier: Option<ShadeModifier>,
}

impl Colour {
    pub fn new(shade: Shade, modifier: Option<ShadeModifier>) -> Self {
        Self { shade, modifier }
    }

    /// Exact identity: same shade and same modifier (or both unmodified).
    pub fn is_same_colour_as(&self, other: &Colour) -> bool {
        self.shade == other.shade && self.modifier == other.modifier
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modifier {
            Some(modifier) => write!(f, "{modifier} {}", self.shade),
            None => write!(f, "{}", self.shade),
        }
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    /// Parses `"<shade>"` or `"<modifier> <shade>"`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [] => Err(ParseColourError::Empty),
            [shade] => Ok(Colour::new(shade.parse()?, None)),
            [modifier, rest @ ..] => {
                let modifier: ShadeModifier = modifier.parse()?;
                Ok(Colour::new(rest.join(" ").parse()?, Some(modifier)))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modified_and_plain_colours() {
        let dark_red: Colour = "Dark  red".parse().expect("valid colour");
        assert_eq!(dark_red, Colour::new(Shade::Red, Some(ShadeModifier::Dark)));
        assert_eq!(dark_red.to_string(), "dark red");

        let grey: Colour = "grey".parse().expect("valid colour");
        assert_eq!(grey.modifier, None);
    }

    #[test]
    fn rejects_unknown_words() {
        assert_eq!("".parse::<Colour>(), Err(ParseColourError::Empty));
        assert!(matches!("sparkly red".parse::<Colour>(), Err(ParseColourError::UnknownModifier(_))));
        assert!(matches!("dark mauve".parse::<Colour>(), Err(ParseColourError::UnknownShade(_))));
    }

    #[test]
    fn same_colour_requires_matching_modifier() {
        let red = Colour::new(Shade::Red, None);
        let light_red = Colour::new(Shade::Red, Some(ShadeModifier::Light));
        assert!(red.is_same_colour_as(&red));
        assert!(!red.is_same_colour_as(&light_red));
    }

    #[test]
    fn pattern_names_accept_spaces() {
        assert_eq!("Tiger Striped".parse::<Pattern>(), Ok(Pattern::TigerStriped));
        assert_eq!(Pattern::TigerStriped.to_string(), "tiger-striped");
    }
}
