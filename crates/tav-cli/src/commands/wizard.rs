use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tav_core::{Ability, AbilityScores, Character, rules};
use tav_mechanics::point_buy::{COST_TABLE, MAX_SCORE, MIN_SCORE};
use tav_mechanics::{CharacterChoices, GenerationConfig};

use super::prompt::Prompter;

pub fn run(store: Option<&Path>) -> Result<(), String> {
    let config = GenerationConfig::default();
    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());

    let Some(character) = build(&mut prompt, &config)? else {
        println!("  Cancelled.");
        return Ok(());
    };

    println!();
    super::print_sheet(&character);
    println!();

    if prompt.yes_no("Save this character?", true)? {
        let store = super::open_store(store)?;
        super::save(&store, &character)?;
    }
    Ok(())
}

/// Walk the player through every choice. `Ok(None)` if they gave up on
/// the ability scores.
fn build<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    config: &GenerationConfig,
) -> Result<Option<Character>, String> {
    prompt.say(&"Manual character creation".bold().to_string())?;
    let name = prompt.line("Character name [Tav]: ")?;

    let origin = prompt.choice("Choose origin:", rules::ORIGINS)?;
    let race = prompt.choice("Choose race:", rules::RACES)?;
    let class = prompt.choice("Choose class:", rules::CLASSES)?;
    let subclass = prompt.choice(
        &format!("Choose subclass for {class}:"),
        rules::subclasses_of(class),
    )?;
    let background = prompt.choice("Choose background:", rules::BACKGROUNDS)?;

    let Some(base_scores) = ask_scores(prompt, config)? else {
        return Ok(None);
    };

    let plus_two = prompt.choice("Ability for +2:", &Ability::ALL)?;
    let remaining: Vec<Ability> = Ability::ALL
        .into_iter()
        .filter(|a| *a != plus_two)
        .collect();
    let plus_one = prompt.choice("Ability for +1:", &remaining)?;

    let skills = ask_skills(prompt, config.skill_count)?;
    let feat = prompt.choice("Choose a feat:", rules::FEATS)?;

    let choices = CharacterChoices {
        name,
        origin: origin.to_string(),
        race: race.to_string(),
        character_class: class.to_string(),
        subclass: subclass.to_string(),
        background: background.to_string(),
        base_scores,
        plus_two,
        plus_one,
        skills,
        feats: vec![feat.to_string()],
    };

    tav_mechanics::build_character(&choices, config)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Ask for six base scores until they spend exactly the budget, reporting
/// the computed cost after each failed try.
fn ask_scores<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    config: &GenerationConfig,
) -> Result<Option<AbilityScores>, String> {
    let point_buy = config.point_buy;
    let costs: Vec<String> = (MIN_SCORE..=MAX_SCORE)
        .zip(COST_TABLE)
        .map(|(score, cost)| format!("{score}={cost}"))
        .collect();

    prompt.say("")?;
    prompt.say(&format!(
        "Enter base ability scores ({MIN_SCORE}-{MAX_SCORE}). Total cost must equal {}.",
        point_buy.budget
    ))?;
    prompt.say(&format!("Costs: {}", costs.join(", ")))?;

    loop {
        let mut scores = AbilityScores::uniform(MIN_SCORE);
        for ability in Ability::ALL {
            scores.set(ability, prompt.number(&format!("{ability}: "))?);
        }

        if point_buy.is_valid(&scores) {
            prompt.say(&format!("Point-buy cost: {} (OK)", point_buy.budget))?;
            return Ok(Some(scores));
        }

        match point_buy.total_cost(&scores) {
            Ok(total) => prompt.say(&format!(
                "Point-buy cost is {total}, not {}. This is invalid.",
                point_buy.budget
            ))?,
            Err(e) => prompt.say(&format!("{e}. This is invalid."))?,
        }
        if !prompt.yes_no("Try again?", true)? {
            return Ok(None);
        }
    }
}

fn ask_skills<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    count: usize,
) -> Result<Vec<String>, String> {
    let names = rules::skill_names();
    prompt.say("")?;
    prompt.say(&format!("Select {count} skills by number, separated by commas:"))?;
    prompt.list(&names)?;

    loop {
        let raw = prompt.line("Your choices: ")?;
        let numbers: Result<Vec<usize>, _> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<usize>)
            .collect();
        let Ok(numbers) = numbers else {
            prompt.say("Please enter comma-separated numbers")?;
            continue;
        };
        if numbers.len() != count {
            prompt.say(&format!("You must select {count} skills"))?;
            continue;
        }
        let picked: Option<Vec<String>> = numbers
            .iter()
            .map(|n| n.checked_sub(1).and_then(|i| names.get(i)).map(|s| s.to_string()))
            .collect();
        let Some(skills) = picked else {
            prompt.say("One of those numbers is out of range")?;
            continue;
        };
        let mut seen = HashSet::new();
        if !skills.iter().all(|skill| seen.insert(skill.as_str())) {
            prompt.say("Each skill can only be chosen once")?;
            continue;
        }
        return Ok(skills);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn scores_retry_reports_cost() {
        let input = "10\n10\n10\n10\n10\n10\ny\n15\n15\n15\n8\n8\n8\n";
        let mut p = prompter(input);
        let scores = ask_scores(&mut p, &GenerationConfig::default()).unwrap().unwrap();
        assert_eq!(scores.values(), [15, 15, 15, 8, 8, 8]);
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("Point-buy cost is 12, not 27"));
        assert!(out.contains("Point-buy cost: 27 (OK)"));
    }

    #[test]
    fn scores_out_of_range_then_give_up() {
        let mut p = prompter("20\n8\n8\n8\n8\n8\nn\n");
        assert_eq!(ask_scores(&mut p, &GenerationConfig::default()).unwrap(), None);
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("score must be between 8 and 15, got 20"));
    }

    #[test]
    fn skills_validate_count_and_range() {
        let mut p = prompter("1,2\n1,2,3,99\n1, 1, 2, 3\n1, 5, 11, 15\n");
        let skills = ask_skills(&mut p, 4).unwrap();
        assert_eq!(skills, vec!["Athletics", "Arcana", "Insight", "Deception"]);
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("You must select 4 skills"));
        assert!(out.contains("out of range"));
        assert!(out.contains("Each skill can only be chosen once"));
    }

    #[test]
    fn full_walkthrough() {
        let input = [
            "Shadowheart", // name
            "6",           // origin: Shadowheart
            "3",           // race: Drow
            "3",           // class: Cleric
            "3",           // subclass: Trickery Domain
            "1",           // background: Acolyte
            "8", "13", "14", "10", "15", "12", // scores
            "5",           // +2 WIS
            "3",           // +1 CON (from the remaining five)
            "11, 12, 9, 15", // skills
            "40",          // feat: Weapon Master
        ]
        .join("\n")
            + "\n";
        let mut p = prompter(&input);
        let c = build(&mut p, &GenerationConfig::default()).unwrap().unwrap();
        assert_eq!(c.name, "Shadowheart");
        assert_eq!(c.origin, "Shadowheart");
        assert_eq!(c.race, "Drow");
        assert_eq!(c.character_class, "Cleric");
        assert_eq!(c.subclass, "Trickery Domain");
        assert_eq!(c.background, "Acolyte");
        assert_eq!(c.ability_scores.get(Ability::Wis), 17);
        assert_eq!(c.ability_scores.get(Ability::Con), 15);
        assert_eq!(c.skills, vec!["Insight", "Medicine", "Religion", "Deception"]);
        assert_eq!(c.feats, vec!["Weapon Master"]);
    }
}
