use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the six core attributes of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Strength.
    #[serde(rename = "STR")]
    Str,
    /// Dexterity.
    #[serde(rename = "DEX")]
    Dex,
    /// Constitution.
    #[serde(rename = "CON")]
    Con,
    /// Intelligence.
    #[serde(rename = "INT")]
    Int,
    /// Wisdom.
    #[serde(rename = "WIS")]
    Wis,
    /// Charisma.
    #[serde(rename = "CHA")]
    Cha,
}

impl Ability {
    /// All abilities in sheet order.
    pub const ALL: [Ability; 6] = [
        Self::Str,
        Self::Dex,
        Self::Con,
        Self::Int,
        Self::Wis,
        Self::Cha,
    ];

    /// The three-letter upper-case code, e.g. `"STR"`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// The full English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Ability {
    type Err = CoreError;

    /// Accepts the three-letter code or the full name, case-insensitively.
    fn from_str(s: &str) -> CoreResult<Self> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| {
                a.code().eq_ignore_ascii_case(needle) || a.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CoreError::UnknownAbility(needle.to_string()))
    }
}

/// A complete set of ability scores: exactly one value per ability.
///
/// Values are stored as given. Whether they fall inside the point-buy
/// range is the engine's business, so arbitrary user input can be held
/// here and judged later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Strength score.
    #[serde(rename = "STR")]
    pub strength: i32,
    /// Dexterity score.
    #[serde(rename = "DEX")]
    pub dexterity: i32,
    /// Constitution score.
    #[serde(rename = "CON")]
    pub constitution: i32,
    /// Intelligence score.
    #[serde(rename = "INT")]
    pub intelligence: i32,
    /// Wisdom score.
    #[serde(rename = "WIS")]
    pub wisdom: i32,
    /// Charisma score.
    #[serde(rename = "CHA")]
    pub charisma: i32,
}

impl AbilityScores {
    /// Every ability set to the same value.
    pub fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            constitution: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
        }
    }

    /// Build a score set from `(ability, score)` pairs in any order.
    ///
    /// Every ability must appear exactly once.
    pub fn from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Ability, i32)>,
    {
        let mut seen = [false; 6];
        let mut scores = Self::uniform(0);
        for (ability, value) in pairs {
            if std::mem::replace(&mut seen[ability.index()], true) {
                return Err(CoreError::DuplicateAbility(ability));
            }
            scores.set(ability, value);
        }
        if let Some(missing) = Ability::ALL.into_iter().find(|a| !seen[a.index()]) {
            return Err(CoreError::MissingAbility(missing));
        }
        Ok(scores)
    }

    /// The score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    /// Replace the score for one ability.
    pub fn set(&mut self, ability: Ability, value: i32) {
        let slot = match ability {
            Ability::Str => &mut self.strength,
            Ability::Dex => &mut self.dexterity,
            Ability::Con => &mut self.constitution,
            Ability::Int => &mut self.intelligence,
            Ability::Wis => &mut self.wisdom,
            Ability::Cha => &mut self.charisma,
        };
        *slot = value;
    }

    /// `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Scores in sheet order.
    pub fn values(&self) -> [i32; 6] {
        Ability::ALL.map(|a| self.get(a))
    }
}

impl fmt::Display for AbilityScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(a, v)| format!("{a}={v}")).collect();
        f.write_str(&parts.join(","))
    }
}

impl FromStr for AbilityScores {
    type Err = CoreError;

    /// Parse `"STR=15,DEX=14,CON=13,INT=12,WIS=10,CHA=8"`.
    ///
    /// `:` is accepted in place of `=`, and whitespace around entries is
    /// ignored.
    fn from_str(s: &str) -> CoreResult<Self> {
        let pairs = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| -> CoreResult<(Ability, i32)> {
                let (key, value) = part.split_once(['=', ':']).ok_or_else(|| {
                    CoreError::InvalidScores(format!("expected ABILITY=SCORE, got \"{part}\""))
                })?;
                let ability: Ability = key.parse()?;
                let value = value.trim();
                let score = value.parse::<i32>().map_err(|_| {
                    CoreError::InvalidScores(format!("{ability} is not a number: \"{value}\""))
                })?;
                Ok((ability, score))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        Self::from_pairs(pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ability_codes_and_parse() {
        assert_eq!(Ability::Str.to_string(), "STR");
        assert_eq!("dex".parse::<Ability>().unwrap(), Ability::Dex);
        assert_eq!("Wisdom".parse::<Ability>().unwrap(), Ability::Wis);
        assert!(matches!(
            "LUCK".parse::<Ability>(),
            Err(CoreError::UnknownAbility(s)) if s == "LUCK"
        ));
    }

    #[test]
    fn get_and_set() {
        let mut scores = AbilityScores::uniform(8);
        scores.set(Ability::Int, 15);
        assert_eq!(scores.get(Ability::Int), 15);
        assert_eq!(scores.intelligence, 15);
        assert_eq!(scores.values(), [8, 8, 8, 15, 8, 8]);
    }

    #[test]
    fn from_pairs_requires_every_ability() {
        let pairs = Ability::ALL.into_iter().take(5).map(|a| (a, 10));
        assert!(matches!(
            AbilityScores::from_pairs(pairs),
            Err(CoreError::MissingAbility(Ability::Cha))
        ));
    }

    #[test]
    fn from_pairs_rejects_duplicates() {
        let pairs = [
            (Ability::Str, 10),
            (Ability::Str, 12),
            (Ability::Dex, 10),
            (Ability::Con, 10),
            (Ability::Int, 10),
            (Ability::Wis, 10),
            (Ability::Cha, 10),
        ];
        assert!(matches!(
            AbilityScores::from_pairs(pairs),
            Err(CoreError::DuplicateAbility(Ability::Str))
        ));
    }

    #[test]
    fn parse_score_string() {
        let scores: AbilityScores = "str=15, DEX:14, CON=13, INT=12, WIS=10, CHA=8".parse().unwrap();
        assert_eq!(scores.values(), [15, 14, 13, 12, 10, 8]);
        assert_eq!(scores.to_string(), "STR=15,DEX=14,CON=13,INT=12,WIS=10,CHA=8");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "STR=15,DEX".parse::<AbilityScores>(),
            Err(CoreError::InvalidScores(_))
        ));
        assert!(matches!(
            "STR=high,DEX=1,CON=1,INT=1,WIS=1,CHA=1".parse::<AbilityScores>(),
            Err(CoreError::InvalidScores(_))
        ));
        assert!(matches!(
            "STR=15".parse::<AbilityScores>(),
            Err(CoreError::MissingAbility(Ability::Dex))
        ));
    }

    #[test]
    fn serializes_with_ability_codes() {
        let scores = AbilityScores::uniform(10);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["STR"], 10);
        assert_eq!(json["CHA"], 10);
    }

    proptest! {
        #[test]
        fn pair_order_does_not_matter(
            values in proptest::array::uniform6(-20i32..40),
            order in Just(Ability::ALL.to_vec()).prop_shuffle(),
        ) {
            let pairs: Vec<_> = order
                .iter()
                .map(|a| (*a, values[*a as usize]))
                .collect();
            let scores = AbilityScores::from_pairs(pairs).unwrap();
            prop_assert_eq!(scores.values(), values);
        }
    }
}
