//! Tokens derived from the appearance as a whole.

use std::collections::BTreeMap;

use super::TokenContext;
use crate::appearance::Appearance;
use crate::bodypart::Bodypart;

/// `{@species}` / `{@species|part}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesToken {
    /// The species most of the appearance belongs to.
    Dominant,
    /// The species of the part in context.
    Part,
}

impl SpeciesToken {
    pub fn from_data(data: Option<&str>) -> SpeciesToken {
        if data.is_some_and(|d| d.trim().eq_ignore_ascii_case("part")) {
            SpeciesToken::Part
        } else {
            SpeciesToken::Dominant
        }
    }

    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        match self {
            SpeciesToken::Dominant => dominant_species(ctx.appearance, ctx.morph_threshold).unwrap_or_default(),
            SpeciesToken::Part => ctx.component.map(|c| c.species.clone()).unwrap_or_default(),
        }
    }
}

/// The species holding the largest share of components.
///
/// Ties go to the alphabetically first species. If the winner's share is at or
/// below `threshold` the name gets a "-morph" suffix. `None` for an empty appearance.
#[allow(clippy::cast_precision_loss)]
pub fn dominant_species(appearance: &Appearance, threshold: f64) -> Option<String> {
    // lowercased name -> (first spelling seen, count)
    let mut counts: BTreeMap<String, (&str, usize)> = BTreeMap::new();
    for component in appearance.components() {
        let entry = counts
            .entry(component.species.trim().to_lowercase())
            .or_insert((component.species.trim(), 0));
        entry.1 += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts.values().copied() {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }

    let (name, count) = best?;
    let share = count as f64 / appearance.len() as f64;
    if share <= threshold {
        Some(format!("{name}-morph"))
    } else {
        Some(name.to_string())
    }
}

/// `{@sex}`: herm, male, female or sexless, from the gendered parts present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexToken;

impl SexToken {
    pub fn text(self, ctx: &TokenContext<'_>) -> String {
        sex_of(ctx.appearance).to_string()
    }
}

pub fn sex_of(appearance: &Appearance) -> &'static str {
    match (
        appearance.has_part(Bodypart::Penis),
        appearance.has_part(Bodypart::Vagina),
    ) {
        (true, true) => "herm",
        (true, false) => "male",
        (false, true) => "female",
        (false, false) => "sexless",
    }
}
