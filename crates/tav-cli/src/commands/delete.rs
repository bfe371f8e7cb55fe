use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tav_core::Character;

use super::prompt::Prompter;

pub fn run(store: Option<&Path>, id: &str, yes: bool) -> Result<(), String> {
    let store = super::open_store(store)?;
    let character = store.find(id).map_err(|e| e.to_string())?;

    if !yes {
        let stdin = io::stdin();
        let mut prompt = Prompter::new(stdin.lock(), io::stdout());
        if !confirm(&mut prompt, &character)? {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    if !store.delete(character.id).map_err(|e| e.to_string())? {
        return Err(format!("character {} vanished before it could be deleted", character.id));
    }

    println!("  {} '{}' ({})", "Deleted".red(), character.name, character.id);
    Ok(())
}

/// Ask before deleting. Anything but an explicit yes keeps the record.
fn confirm<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    character: &Character,
) -> Result<bool, String> {
    prompt.yes_no(&format!("Really delete '{}'?", character.name), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tav_core::AbilityScores;

    fn character() -> Character {
        Character::new(
            "Minthara",
            "Custom",
            "Drow",
            "Paladin",
            "Oathbreaker",
            "Noble",
            AbilityScores::uniform(12),
        )
    }

    fn answer(input: &str) -> (bool, String) {
        let mut p = Prompter::new(input.as_bytes(), Vec::new());
        let confirmed = confirm(&mut p, &character()).unwrap();
        (confirmed, String::from_utf8(p.output).unwrap())
    }

    #[test]
    fn defaults_to_no() {
        let (confirmed, out) = answer("\n");
        assert!(!confirmed);
        assert!(out.contains("Really delete 'Minthara'? [y/N]"));
    }

    #[test]
    fn explicit_yes_confirms() {
        assert!(answer("y\n").0);
        assert!(!answer("no\n").0);
    }
}
