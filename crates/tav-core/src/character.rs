use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ability::{Ability, AbilityScores};

/// Unique identifier for a stored character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The full hyphenated UUID.
    pub fn full(&self) -> String {
        self.0.to_string()
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

/// Shows only the first eight hex digits; use [`CharacterId::full`] for the rest.
impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

impl FromStr for CharacterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A finished character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Origin (a preset companion or `Custom`).
    pub origin: String,
    /// Race.
    pub race: String,
    /// Class.
    pub character_class: String,
    /// Subclass of `character_class`.
    pub subclass: String,
    /// Background.
    pub background: String,
    /// Final ability scores, bonuses included.
    pub ability_scores: AbilityScores,
    /// Bonuses that were added on top of the point-buy base.
    #[serde(default)]
    pub ability_bonuses: BTreeMap<Ability, i32>,
    /// Proficient skills.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Chosen feats.
    #[serde(default)]
    pub feats: Vec<String>,
    /// When the record was first created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Start a new record with a fresh ID and no bonuses, skills or feats.
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        race: impl Into<String>,
        character_class: impl Into<String>,
        subclass: impl Into<String>,
        background: impl Into<String>,
        ability_scores: AbilityScores,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            origin: origin.into(),
            race: race.into(),
            character_class: character_class.into(),
            subclass: subclass.into(),
            background: background.into(),
            ability_scores,
            ability_bonuses: BTreeMap::new(),
            skills: Vec::new(),
            feats: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach the bonuses that were applied to the scores.
    pub fn with_bonuses(mut self, bonuses: BTreeMap<Ability, i32>) -> Self {
        self.ability_bonuses = bonuses;
        self
    }

    /// Set the skill list.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the feat list.
    pub fn with_feats<I, S>(mut self, feats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feats = feats.into_iter().map(Into::into).collect();
        self
    }

    /// The bonus applied to an ability, or 0.
    pub fn ability_bonus(&self, ability: Ability) -> i32 {
        self.ability_bonuses.get(&ability).copied().unwrap_or(0)
    }

    /// The point-buy base score, i.e. the final score minus its bonus.
    pub fn base_score(&self, ability: Ability) -> i32 {
        self.ability_scores.get(ability) - self.ability_bonus(ability)
    }
}
