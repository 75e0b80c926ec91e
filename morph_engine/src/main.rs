#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Morph **
//! Walks a character through a short sequence of transformations.

use morph_engine::{Bodypart, Chirality, Colour, Pattern, ShiftBodypartResult, ShiftError, load_engine};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use textwrap::{fill, termwidth};

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading transformation engine...");
    let engine = load_engine().context("while loading transformation engine")?;
    info!("Transformation engine loaded.");

    let mut character = engine.new_character("Marina Reyes");
    character.nickname = Some("Rina".to_string());
    let mut appearance = engine.default_appearance().context("while building default appearance")?;

    let width = termwidth();
    println!(
        "{:^width$}",
        "MORPH: A TRANSFORMATION SAMPLER".bright_yellow().underline()
    );
    let before = fill(&engine.describe(&character, &appearance), width);
    println!("\n{}\n", before.as_str().italic());

    let steps: Vec<(&str, Result<ShiftBodypartResult, ShiftError>)> = vec![
        (
            "shark tail",
            engine.shift_species(&character, &mut appearance, Bodypart::Tail, Chirality::Center, "shark"),
        ),
        (
            "shark head",
            engine.shift_species(&character, &mut appearance, Bodypart::Head, Chirality::Center, "shark"),
        ),
        (
            "blue left arm",
            engine.shift_colour(
                &character,
                &mut appearance,
                Bodypart::Arm,
                Chirality::Left,
                "light blue".parse::<Colour>()?,
            ),
        ),
        (
            "striped arms",
            engine.shift_pattern(
                &character,
                &mut appearance,
                Bodypart::Arms,
                Chirality::Center,
                Pattern::Striped,
                "dark grey".parse::<Colour>()?,
            ),
        ),
        (
            "shark body",
            engine.shift_species(&character, &mut appearance, Bodypart::Full, Chirality::Center, "shark"),
        ),
        (
            "lose the tail",
            engine.remove_part(&character, &mut appearance, Bodypart::Tail, Chirality::Center),
        ),
        (
            "lose it again",
            engine.remove_part(&character, &mut appearance, Bodypart::Tail, Chirality::Center),
        ),
    ];

    for (label, outcome) in steps {
        println!("{} {}", "»".bright_blue(), label.bold());
        match outcome {
            Ok(result) => println!("{}\n", fill(&result.message, width)),
            Err(e) => println!("{}\n", e.to_string().as_str().red()),
        }
    }

    println!("{}", "Afterwards".bright_yellow().underline());
    let after = fill(&engine.describe(&character, &appearance), width);
    println!("\n{}", after.as_str().italic());
    Ok(())
}
