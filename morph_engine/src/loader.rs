//! Loading engine content from disk.
//!
//! Species and transformations come from `catalog.ron`, shared narration from
//! `text.ron`, and tunables from `engine.toml`. Content problems are collected and
//! reported together rather than one at a time.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use morph_data::{CatalogDef, TextDef, validate_catalog, validate_text};

use crate::catalog::Catalog;
use crate::config::{EngineConfig, load_config};
use crate::data_paths::data_path;
use crate::engine::TransformationEngine;
use crate::text::TransformationText;

/// Load the engine from the default data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_engine() -> Result<TransformationEngine> {
    let config = load_config(&data_path("engine.toml"));
    load_engine_with(config, &data_path("catalog.ron"), &data_path("text.ron"))
}

/// Load the engine from an explicit data directory.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or content validation.
pub fn load_engine_from(dir: &Path) -> Result<TransformationEngine> {
    let config = load_config(&dir.join("engine.toml"));
    load_engine_with(config, &dir.join("catalog.ron"), &dir.join("text.ron"))
}

fn load_engine_with(config: EngineConfig, catalog_path: &Path, text_path: &Path) -> Result<TransformationEngine> {
    let catalog_def = load_catalog_def(catalog_path).context("while loading catalog from file")?;
    let text_def = load_text_def(text_path).context("while loading narration text from file")?;
    validate_content(&catalog_def, &text_def, &config)?;

    let catalog = Catalog::from_def(&catalog_def, &config.template_species).context("while building catalog")?;
    info!(
        "{} species and {} transformations loaded",
        catalog_def.species.len(),
        catalog_def.transformations.len()
    );
    let text = TransformationText::from(&text_def);
    Ok(TransformationEngine::new(config, catalog, text))
}

/// Load a `CatalogDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't a valid catalog
pub fn load_catalog_def(path: &Path) -> Result<CatalogDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading catalog from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing catalog RON from '{}'", path.display()))
}

/// Load a `TextDef` from a RON file.
///
/// # Errors
/// - if the file can't be read or isn't valid narration text
pub fn load_text_def(path: &Path) -> Result<TextDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading narration text from '{}'", path.display()))?;
    ron::from_str(&text).with_context(|| format!("parsing narration RON from '{}'", path.display()))
}

/// Validate catalog and text together and return a single aggregated error.
fn validate_content(catalog: &CatalogDef, text: &TextDef, config: &EngineConfig) -> Result<()> {
    let mut errors: Vec<String> = validate_catalog(catalog)
        .into_iter()
        .chain(validate_text(text))
        .map(|err| err.to_string())
        .collect();
    if !catalog
        .species
        .iter()
        .any(|s| s.name.trim().eq_ignore_ascii_case(config.template_species.trim()))
    {
        errors.push(format!(
            "template species '{}' is not in the catalog",
            config.template_species
        ));
    }
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("content validation failed:\n{details}");
}
