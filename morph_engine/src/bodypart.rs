//! Body-part taxonomy.
//!
//! Every [`Bodypart`] carries three fixed classifications:
//! - *chiral*: the part exists as a left/right pair (ears, eyes, arms, legs, wings)
//! - *composite*: the part is an alias for an ordered list of other parts (head, arms, …)
//! - *gendered*: the part is sex-specific (penis, vagina)
//!
//! The tables below are the single source for all three. Composite lists only ever
//! point "down" the taxonomy (`Full` contains `Head`, `Head` contains leaves), so
//! recursive decomposition always terminates.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use variantly::Variantly;

/// A transformable region of a character's appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bodypart {
    Hair,
    Face,
    Ear,
    Eye,
    Teeth,
    Body,
    Arm,
    Leg,
    Tail,
    Wing,
    Penis,
    Vagina,
    Head,
    Eyes,
    Arms,
    Legs,
    Wings,
    Full,
}

impl Bodypart {
    /// Every body part, leaves first, in declaration order.
    pub const ALL: [Bodypart; 18] = [
        Bodypart::Hair,
        Bodypart::Face,
        Bodypart::Ear,
        Bodypart::Eye,
        Bodypart::Teeth,
        Bodypart::Body,
        Bodypart::Arm,
        Bodypart::Leg,
        Bodypart::Tail,
        Bodypart::Wing,
        Bodypart::Penis,
        Bodypart::Vagina,
        Bodypart::Head,
        Bodypart::Eyes,
        Bodypart::Arms,
        Bodypart::Legs,
        Bodypart::Wings,
        Bodypart::Full,
    ];

    /// Returns true for parts that exist as a left/right pair.
    pub fn is_chiral(self) -> bool {
        matches!(
            self,
            Bodypart::Ear | Bodypart::Eye | Bodypart::Arm | Bodypart::Leg | Bodypart::Wing
        )
    }

    /// Returns true for sex-specific parts.
    pub fn is_gendered(self) -> bool {
        matches!(self, Bodypart::Penis | Bodypart::Vagina)
    }

    /// Returns true for aggregate regions that decompose into other parts.
    pub fn is_composite(self) -> bool {
        !self.registered_parts().is_empty()
    }

    /// Returns true if this part appears in some composite's composing list.
    pub fn is_composing_part(self) -> bool {
        Bodypart::ALL
            .iter()
            .any(|composite| composite.registered_parts().contains(&self))
    }

    /// The registered composing parts of a composite, in narration order. Empty for leaves.
    fn registered_parts(self) -> &'static [Bodypart] {
        match self {
            Bodypart::Head => &[Bodypart::Face, Bodypart::Ear, Bodypart::Eye, Bodypart::Teeth],
            Bodypart::Eyes => &[Bodypart::Eye],
            Bodypart::Arms => &[Bodypart::Arm],
            Bodypart::Legs => &[Bodypart::Leg],
            Bodypart::Wings => &[Bodypart::Wing],
            Bodypart::Full => &[
                Bodypart::Hair,
                Bodypart::Head,
                Bodypart::Body,
                Bodypart::Arms,
                Bodypart::Legs,
                Bodypart::Tail,
            ],
            _ => &[],
        }
    }

    /// Human-readable name used in narration and logs.
    pub fn name(self) -> &'static str {
        match self {
            Bodypart::Hair => "hair",
            Bodypart::Face => "face",
            Bodypart::Ear => "ear",
            Bodypart::Eye => "eye",
            Bodypart::Teeth => "teeth",
            Bodypart::Body => "body",
            Bodypart::Arm => "arm",
            Bodypart::Leg => "leg",
            Bodypart::Tail => "tail",
            Bodypart::Wing => "wing",
            Bodypart::Penis => "penis",
            Bodypart::Vagina => "vagina",
            Bodypart::Head => "head",
            Bodypart::Eyes => "eyes",
            Bodypart::Arms => "arms",
            Bodypart::Legs => "legs",
            Bodypart::Wings => "wings",
            Bodypart::Full => "full body",
        }
    }
}

impl Display for Bodypart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when a string doesn't name a known body part or side.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseTaxonomyError {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Bodypart {
    type Err = ParseTaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Ok(match key.as_str() {
            "hair" => Bodypart::Hair,
            "face" => Bodypart::Face,
            "ear" => Bodypart::Ear,
            "eye" => Bodypart::Eye,
            "teeth" | "tooth" => Bodypart::Teeth,
            "body" | "torso" => Bodypart::Body,
            "arm" => Bodypart::Arm,
            "leg" => Bodypart::Leg,
            "tail" => Bodypart::Tail,
            "wing" => Bodypart::Wing,
            "penis" => Bodypart::Penis,
            "vagina" => Bodypart::Vagina,
            "head" => Bodypart::Head,
            "eyes" => Bodypart::Eyes,
            "arms" => Bodypart::Arms,
            "legs" => Bodypart::Legs,
            "wings" => Bodypart::Wings,
            "full" | "fullbody" => Bodypart::Full,
            _ => {
                return Err(ParseTaxonomyError {
                    kind: "bodypart",
                    value: s.to_string(),
                });
            },
        })
    }
}

/// The side of a body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Variantly)]
#[serde(rename_all = "camelCase")]
pub enum Chirality {
    Left,
    Right,
    Center,
}

impl Chirality {
    /// The mirrored side. `Center` is its own opposite.
    pub fn opposite(self) -> Chirality {
        match self {
            Chirality::Left => Chirality::Right,
            Chirality::Right => Chirality::Left,
            Chirality::Center => Chirality::Center,
        }
    }

    /// Side name as used in narration; empty for `Center`.
    pub fn side_name(self) -> &'static str {
        match self {
            Chirality::Left => "left",
            Chirality::Right => "right",
            Chirality::Center => "",
        }
    }
}

impl Display for Chirality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Chirality::Left => write!(f, "left"),
            Chirality::Right => write!(f, "right"),
            Chirality::Center => write!(f, "center"),
        }
    }
}

impl FromStr for Chirality {
    type Err = ParseTaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Chirality::Left),
            "right" | "r" => Ok(Chirality::Right),
            "center" | "centre" | "" => Ok(Chirality::Center),
            _ => Err(ParseTaxonomyError {
                kind: "side",
                value: s.to_string(),
            }),
        }
    }
}

/// Returns the parts a body part decomposes into.
///
/// Leaf parts yield themselves, so callers can treat leaf and composite parts the same
/// way. Composite parts yield their registered parts in a fixed order; narration
/// depends on that order.
pub fn get_composing_parts(bodypart: Bodypart) -> &'static [Bodypart] {
    if bodypart.is_composite() {
        return bodypart.registered_parts();
    }
    match bodypart {
        Bodypart::Hair => &[Bodypart::Hair],
        Bodypart::Face => &[Bodypart::Face],
        Bodypart::Ear => &[Bodypart::Ear],
        Bodypart::Eye => &[Bodypart::Eye],
        Bodypart::Teeth => &[Bodypart::Teeth],
        Bodypart::Body => &[Bodypart::Body],
        Bodypart::Arm => &[Bodypart::Arm],
        Bodypart::Leg => &[Bodypart::Leg],
        Bodypart::Tail => &[Bodypart::Tail],
        Bodypart::Wing => &[Bodypart::Wing],
        Bodypart::Penis => &[Bodypart::Penis],
        Bodypart::Vagina => &[Bodypart::Vagina],
        // composites are handled above
        Bodypart::Head | Bodypart::Eyes | Bodypart::Arms | Bodypart::Legs | Bodypart::Wings | Bodypart::Full => &[],
    }
}

/// Flattens a body part into its concrete, chirality-resolved leaves, in narration order.
pub fn leaf_parts(bodypart: Bodypart) -> Vec<(Bodypart, Chirality)> {
    let mut leaves = Vec::new();
    collect_leaves(bodypart, &mut leaves);
    leaves
}

fn collect_leaves(bodypart: Bodypart, leaves: &mut Vec<(Bodypart, Chirality)>) {
    for &part in get_composing_parts(bodypart) {
        if part.is_composite() {
            collect_leaves(part, leaves);
        } else if part.is_chiral() {
            leaves.push((part, Chirality::Left));
            leaves.push((part, Chirality::Right));
        } else {
            leaves.push((part, Chirality::Center));
        }
    }
}
