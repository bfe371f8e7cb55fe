//! Character assembly from random draws or explicit player choices.
//!
//! Both paths end in the same place: a point-buy base that spends the
//! full budget, a +2 and a +1 bonus on two different abilities, a fixed
//! number of distinct skills, and names that exist in the rule tables.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use rand::seq::{IndexedRandom, index};
use tav_core::{Ability, AbilityScores, Character, rules};

use crate::config::GenerationConfig;
use crate::error::{MechError, MechResult};
use crate::point_buy::total_cost;

/// Name used when the player leaves the name blank.
pub const DEFAULT_NAME: &str = "Tav";

/// Everything a player picks when building a character by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterChoices {
    /// Character name. Blank means [`DEFAULT_NAME`].
    pub name: String,
    /// Origin.
    pub origin: String,
    /// Race.
    pub race: String,
    /// Class.
    pub character_class: String,
    /// Subclass; must belong to the class.
    pub subclass: String,
    /// Background.
    pub background: String,
    /// Point-buy scores before bonuses.
    pub base_scores: AbilityScores,
    /// Ability receiving +2.
    pub plus_two: Ability,
    /// Ability receiving +1.
    pub plus_one: Ability,
    /// Skill proficiencies.
    pub skills: Vec<String>,
    /// Feats.
    pub feats: Vec<String>,
}

/// Add +2 to one ability and +1 to another.
///
/// Returns the boosted scores and the bonus map; `base` is left alone.
pub fn apply_ability_bonuses(
    base: &AbilityScores,
    plus_two: Ability,
    plus_one: Ability,
) -> MechResult<(AbilityScores, BTreeMap<Ability, i32>)> {
    if plus_two == plus_one {
        return Err(MechError::SameBonusAbility(plus_two));
    }

    let mut scores = *base;
    scores.set(plus_two, scores.get(plus_two) + 2);
    scores.set(plus_one, scores.get(plus_one) + 1);

    let bonuses = BTreeMap::from([(plus_two, 2), (plus_one, 1)]);
    Ok((scores, bonuses))
}

fn pick<R: Rng + ?Sized>(table: &[&'static str], rng: &mut R) -> &'static str {
    table.choose(rng).copied().unwrap_or_default()
}

/// Roll a complete random character.
pub fn random_character<R>(
    name: &str,
    config: &GenerationConfig,
    rng: &mut R,
) -> MechResult<Character>
where
    R: Rng + ?Sized,
{
    let origin = pick(rules::ORIGINS, rng);
    let race = pick(rules::RACES, rng);
    let class = pick(rules::CLASSES, rng);
    let subclass = rules::subclasses_of(class)
        .choose(rng)
        .copied()
        .unwrap_or("Base");
    let background = pick(rules::BACKGROUNDS, rng);
    let feats: Vec<&str> = rules::FEATS
        .choose_multiple(rng, config.feat_count)
        .copied()
        .collect();

    let base = config.point_buy.generate(rng)?;

    let picks = index::sample(rng, Ability::ALL.len(), 2);
    let (plus_two, plus_one) = (Ability::ALL[picks.index(0)], Ability::ALL[picks.index(1)]);
    let (scores, bonuses) = apply_ability_bonuses(&base, plus_two, plus_one)?;

    let skills: Vec<&str> = rules::SKILLS
        .choose_multiple(rng, config.skill_count)
        .map(|(skill, _)| *skill)
        .collect();

    let character = Character::new(
        display_name(name),
        origin,
        race,
        class,
        subclass,
        background,
        scores,
    )
    .with_bonuses(bonuses)
    .with_skills(skills)
    .with_feats(feats);

    tracing::info!(id = %character.id, name = %character.name, class, race, "random character rolled");
    Ok(character)
}

/// Validate a player's choices and assemble the character.
///
/// Names are matched case-insensitively and stored in their canonical
/// spelling. The base scores must pass the point-buy check before any
/// bonus is applied.
pub fn build_character(
    choices: &CharacterChoices,
    config: &GenerationConfig,
) -> MechResult<Character> {
    let origin = rules::canonical_origin(&choices.origin)
        .ok_or_else(|| invalid("origin", &choices.origin))?;
    let race =
        rules::canonical_race(&choices.race).ok_or_else(|| invalid("race", &choices.race))?;
    let class = rules::canonical_class(&choices.character_class)
        .ok_or_else(|| invalid("class", &choices.character_class))?;
    let subclass = rules::canonical_subclass(class, &choices.subclass).ok_or_else(|| {
        MechError::InvalidSubclass {
            subclass: choices.subclass.clone(),
            class: class.to_string(),
        }
    })?;
    let background = rules::canonical_background(&choices.background)
        .ok_or_else(|| invalid("background", &choices.background))?;

    if !config.point_buy.is_valid(&choices.base_scores) {
        return Err(MechError::PointBuyMismatch {
            total: total_cost(&choices.base_scores).ok(),
            budget: config.point_buy.budget,
        });
    }

    let (scores, bonuses) =
        apply_ability_bonuses(&choices.base_scores, choices.plus_two, choices.plus_one)?;
    let skills = validate_skills(&choices.skills, config.skill_count)?;
    let feats = validate_feats(&choices.feats)?;

    let character = Character::new(
        display_name(&choices.name),
        origin,
        race,
        class,
        subclass,
        background,
        scores,
    )
    .with_bonuses(bonuses)
    .with_skills(skills)
    .with_feats(feats);

    tracing::info!(id = %character.id, name = %character.name, "character built from choices");
    Ok(character)
}

/// A copy of `character` with a new, validated skill list.
pub fn with_new_skills<S: AsRef<str>>(
    character: &Character,
    skills: &[S],
    config: &GenerationConfig,
) -> MechResult<Character> {
    let skills = validate_skills(skills, config.skill_count)?;
    Ok(character.clone().with_skills(skills))
}

fn display_name(name: &str) -> &str {
    match name.trim() {
        "" => DEFAULT_NAME,
        trimmed => trimmed,
    }
}

fn invalid(field: &'static str, value: &str) -> MechError {
    MechError::InvalidChoice {
        field,
        value: value.to_string(),
    }
}

fn validate_skills<S: AsRef<str>>(skills: &[S], expected: usize) -> MechResult<Vec<&'static str>> {
    if skills.len() != expected {
        return Err(MechError::SkillCount {
            expected,
            got: skills.len(),
        });
    }
    canonical_unique("skill", skills, rules::canonical_skill)
}

fn validate_feats<S: AsRef<str>>(feats: &[S]) -> MechResult<Vec<&'static str>> {
    canonical_unique("feat", feats, rules::canonical_feat)
}

fn canonical_unique<S: AsRef<str>>(
    field: &'static str,
    names: &[S],
    lookup: fn(&str) -> Option<&'static str>,
) -> MechResult<Vec<&'static str>> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|name| -> MechResult<&'static str> {
            let name = name.as_ref();
            let canonical = lookup(name).ok_or_else(|| invalid(field, name))?;
            if !seen.insert(canonical) {
                return Err(MechError::DuplicateChoice {
                    field,
                    value: canonical.to_string(),
                });
            }
            Ok(canonical)
        })
        .collect()
}
