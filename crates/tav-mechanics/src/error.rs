//! Error types for the mechanics engine.

use tav_core::{Ability, CoreError};

/// Errors that can occur during point-buy and character assembly.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A score lies outside the point-buy range.
    #[error("score must be between 8 and 15, got {0}")]
    InvalidScore(i32),

    /// The rejection sampler ran out of attempts.
    #[error("no valid point-buy found for budget {budget} after {attempts} attempts")]
    GenerationExhausted {
        /// Attempts spent.
        attempts: u32,
        /// The budget that was never hit.
        budget: i64,
    },

    /// Base scores do not spend exactly the budget.
    #[error("{}", point_buy_mismatch(.total, .budget))]
    PointBuyMismatch {
        /// The computed cost, or `None` if a score was out of range.
        total: Option<u32>,
        /// The required cost.
        budget: i64,
    },

    /// A choice is not in the rule tables.
    #[error("invalid {field}: \"{value}\"")]
    InvalidChoice {
        /// Which choice was rejected (e.g. "race", "skill").
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A subclass does not belong to the chosen class.
    #[error("invalid subclass \"{subclass}\" for class \"{class}\"")]
    InvalidSubclass {
        /// The rejected subclass.
        subclass: String,
        /// The chosen class.
        class: String,
    },

    /// The +2 and +1 bonuses named the same ability.
    #[error("+2 and +1 bonuses must go to different abilities, both were {0}")]
    SameBonusAbility(Ability),

    /// The wrong number of skills was chosen.
    #[error("you must select {expected} skills, got {got}")]
    SkillCount {
        /// Required number of skills.
        expected: usize,
        /// Number supplied.
        got: usize,
    },

    /// The same skill or feat was chosen twice.
    #[error("duplicate {field}: \"{value}\"")]
    DuplicateChoice {
        /// Which list contained the duplicate.
        field: &'static str,
        /// The repeated value.
        value: String,
    },

    /// A core type could not be built.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn point_buy_mismatch(total: &Option<u32>, budget: &i64) -> String {
    match total {
        Some(total) => format!("point-buy cost is {total}, must be exactly {budget}"),
        None => format!("scores must be between 8 and 15 and cost exactly {budget}"),
    }
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
