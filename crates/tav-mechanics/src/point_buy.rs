//! Point-buy ability score costs, validation, and random generation.
//!
//! Every base score lies in `8..=15` and has a fixed cost; a score set is
//! valid when its costs sum to exactly the budget (27 in the standard
//! rules). Scores above 13 cost extra, so the table is not linear.

use rand::Rng;
use tav_core::{Ability, AbilityScores};

use crate::error::{MechError, MechResult};

/// Lowest purchasable score.
pub const MIN_SCORE: i32 = 8;

/// Highest purchasable score.
pub const MAX_SCORE: i32 = 15;

/// Cost of each score from [`MIN_SCORE`] to [`MAX_SCORE`].
pub const COST_TABLE: [u32; 8] = [0, 1, 2, 3, 4, 5, 7, 9];

/// Points to spend in the standard rules.
pub const DEFAULT_BUDGET: i64 = 27;

/// Draws the generator makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

/// The point-buy cost of a single score.
///
/// Scores outside `8..=15` fail with [`MechError::InvalidScore`].
pub fn score_cost(score: i32) -> MechResult<u32> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(MechError::InvalidScore(score));
    }
    Ok(COST_TABLE[(score - MIN_SCORE) as usize])
}

/// Total point-buy cost of a score set.
///
/// The first out-of-range score aborts with [`MechError::InvalidScore`].
pub fn total_cost(scores: &AbilityScores) -> MechResult<u32> {
    scores.values().into_iter().map(score_cost).sum()
}

/// Whether `scores` spend exactly `budget` points.
///
/// Never fails: a score outside `8..=15` simply makes the set invalid.
pub fn is_valid_point_buy(scores: &AbilityScores, budget: i64) -> bool {
    total_cost(scores).is_ok_and(|cost| i64::from(cost) == budget)
}

/// Draw random score sets until one spends exactly `budget` points.
///
/// Each listed ability is drawn independently and uniformly from
/// `8..=15`. `abilities` must name every ability exactly once; this is
/// checked before the first draw. Gives up with
/// [`MechError::GenerationExhausted`] after `max_attempts` misses, so an
/// unreachable budget terminates instead of spinning forever.
pub fn random_point_buy<R>(
    abilities: &[Ability],
    budget: i64,
    max_attempts: u32,
    rng: &mut R,
) -> MechResult<AbilityScores>
where
    R: Rng + ?Sized,
{
    let mut scores = AbilityScores::from_pairs(abilities.iter().map(|a| (*a, MIN_SCORE)))?;

    for attempt in 1..=max_attempts {
        for ability in abilities {
            scores.set(*ability, rng.random_range(MIN_SCORE..=MAX_SCORE));
        }
        if is_valid_point_buy(&scores, budget) {
            tracing::debug!(attempt, budget, %scores, "point-buy generated");
            return Ok(scores);
        }
    }

    tracing::warn!(max_attempts, budget, "point-buy generation exhausted");
    Err(MechError::GenerationExhausted {
        attempts: max_attempts,
        budget,
    })
}

/// Point-buy parameters: the budget and the generator's attempt bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBuy {
    /// Points a valid score set must spend exactly.
    pub budget: i64,
    /// Draws [`PointBuy::generate`] makes before giving up.
    pub max_attempts: u32,
}

impl Default for PointBuy {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PointBuy {
    /// Standard rules with a different budget.
    pub fn with_budget(mut self, budget: i64) -> Self {
        self.budget = budget;
        self
    }

    /// Change the generator's attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// See [`total_cost`].
    pub fn total_cost(&self, scores: &AbilityScores) -> MechResult<u32> {
        total_cost(scores)
    }

    /// See [`is_valid_point_buy`].
    pub fn is_valid(&self, scores: &AbilityScores) -> bool {
        is_valid_point_buy(scores, self.budget)
    }

    /// Points left to spend, negative when over budget. `None` if a score
    /// is out of range.
    pub fn remaining(&self, scores: &AbilityScores) -> Option<i64> {
        total_cost(scores)
            .ok()
            .map(|cost| self.budget - i64::from(cost))
    }

    /// Generate a valid score set for all six abilities.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MechResult<AbilityScores> {
        random_point_buy(&Ability::ALL, self.budget, self.max_attempts, rng)
    }
}
