use std::path::Path;

use clap::Args;
use tav_core::{Ability, AbilityScores};
use tav_mechanics::point_buy::DEFAULT_BUDGET;
use tav_mechanics::{CharacterChoices, GenerationConfig};

#[derive(Args)]
pub struct CreateArgs {
    /// Character name
    #[arg(short, long, default_value = "Tav")]
    name: String,

    /// Origin (e.g. Custom, Gale, Karlach)
    #[arg(long, default_value = "Custom")]
    origin: String,

    /// Race
    #[arg(long)]
    race: String,

    /// Class
    #[arg(long = "class")]
    class: String,

    /// Subclass of the chosen class
    #[arg(long)]
    subclass: String,

    /// Background
    #[arg(long)]
    background: String,

    /// Base scores before bonuses, e.g. STR=15,DEX=14,CON=13,INT=12,WIS=10,CHA=8
    #[arg(long)]
    scores: AbilityScores,

    /// Ability receiving +2
    #[arg(long)]
    plus_two: Ability,

    /// Ability receiving +1
    #[arg(long)]
    plus_one: Ability,

    /// Skill proficiencies, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    skills: Vec<String>,

    /// Feat (repeatable)
    #[arg(long = "feat")]
    feats: Vec<String>,

    /// Point-buy budget
    #[arg(long, default_value_t = DEFAULT_BUDGET, allow_negative_numbers = true)]
    budget: i64,

    /// Print the sheet without saving it
    #[arg(long)]
    dry_run: bool,
}

pub fn run(store: Option<&Path>, args: CreateArgs) -> Result<(), String> {
    let config = GenerationConfig::default().with_budget(args.budget);
    let choices = CharacterChoices {
        name: args.name,
        origin: args.origin,
        race: args.race,
        character_class: args.class,
        subclass: args.subclass,
        background: args.background,
        base_scores: args.scores,
        plus_two: args.plus_two,
        plus_one: args.plus_one,
        skills: args.skills,
        feats: args.feats,
    };

    let character =
        tav_mechanics::build_character(&choices, &config).map_err(|e| e.to_string())?;

    super::print_sheet(&character);

    if !args.dry_run {
        let store = super::open_store(store)?;
        super::save(&store, &character)?;
    }

    Ok(())
}
