//! Tokens describing the part being narrated.
//!
//! All of these render an empty string when there's no part in context.

use super::TokenContext;

/// `{@side}`: "left" or "right"; empty for centered parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideToken;

impl SideToken {
    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        ctx.component
            .map(|c| c.chirality.side_name().to_string())
            .unwrap_or_default()
    }
}

/// `{@colour}` / `{@colour|pattern}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourToken {
    Base,
    Pattern,
}

impl ColourToken {
    pub fn from_data(data: Option<&str>) -> ColourToken {
        if data.is_some_and(|d| d.trim().eq_ignore_ascii_case("pattern")) {
            ColourToken::Pattern
        } else {
            ColourToken::Base
        }
    }

    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        let Some(component) = ctx.component else {
            return String::new();
        };
        match self {
            ColourToken::Base => component.base_colour.to_string(),
            ColourToken::Pattern => component
                .pattern_colour
                .map(|c| c.to_string())
                .unwrap_or_default(),
        }
    }
}

/// `{@pattern}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternToken;

impl PatternToken {
    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        ctx.component
            .and_then(|c| c.pattern)
            .map(|p| p.to_string())
            .unwrap_or_default()
    }
}

/// `{@part}` / `{@part|plural}`: the body part's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartToken {
    pub plural: bool,
}

impl PartToken {
    pub fn from_data(data: Option<&str>) -> PartToken {
        PartToken {
            plural: data.is_some_and(|d| d.trim().eq_ignore_ascii_case("plural")),
        }
    }

    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        let Some(component) = ctx.component else {
            return String::new();
        };
        let name = component.bodypart.name();
        // only paired parts are ever narrated in the plural
        if self.plural && component.bodypart.is_chiral() {
            format!("{name}s")
        } else {
            name.to_string()
        }
    }
}
