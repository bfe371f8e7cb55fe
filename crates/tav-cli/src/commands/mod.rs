pub mod cost;
pub mod create;
pub mod delete;
pub mod export;
pub mod list;
mod prompt;
pub mod random;
pub mod reskill;
pub mod rules;
pub mod show;
pub mod wizard;

use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tav_core::Character;
use tav_store::CharacterStore;

/// Open the store at `dir`, or at the default location.
fn open_store(dir: Option<&Path>) -> Result<CharacterStore, String> {
    let dir = dir.map_or_else(tav_store::default_dir, Path::to_path_buf);
    CharacterStore::open(dir).map_err(|e| e.to_string())
}

/// A seeded RNG if a seed was given, otherwise one seeded from the OS.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print a character sheet with a short header.
fn print_sheet(character: &Character) {
    println!(
        "  {} [{}]",
        character.name.bold(),
        character.id.to_string().dimmed()
    );
    println!();
    for line in tav_core::export::to_text(character).lines() {
        println!("  {line}");
    }
}

/// Save a character and report where it went.
fn save(store: &CharacterStore, character: &Character) -> Result<(), String> {
    store.save(character).map_err(|e| e.to_string())?;
    println!();
    println!("  {} as {}", "Saved".green(), character.id.full());
    Ok(())
}
