//! Configuration for character assembly.

use crate::point_buy::PointBuy;

/// Rules applied when generating or validating a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Point-buy budget and attempt bound.
    pub point_buy: PointBuy,
    /// Number of skill proficiencies a character must have.
    pub skill_count: usize,
    /// Number of feats a random character receives.
    pub feat_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            point_buy: PointBuy::default(),
            skill_count: 4,
            feat_count: 1,
        }
    }
}

impl GenerationConfig {
    /// Set the point-buy budget.
    pub fn with_budget(mut self, budget: i64) -> Self {
        self.point_buy = self.point_buy.with_budget(budget);
        self
    }

    /// Set the generator's attempt bound.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.point_buy = self.point_buy.with_max_attempts(max_attempts);
        self
    }

    /// Set the required number of skills (clamped to the size of the skill table).
    pub fn with_skill_count(mut self, count: usize) -> Self {
        self.skill_count = count.min(tav_core::rules::SKILLS.len());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.point_buy.budget, 27);
        assert_eq!(cfg.point_buy.max_attempts, 100_000);
        assert_eq!(cfg.skill_count, 4);
        assert_eq!(cfg.feat_count, 1);
    }

    #[test]
    fn builder_methods() {
        let cfg = GenerationConfig::default()
            .with_budget(30)
            .with_max_attempts(50)
            .with_skill_count(2);
        assert_eq!(cfg.point_buy.budget, 30);
        assert_eq!(cfg.point_buy.max_attempts, 50);
        assert_eq!(cfg.skill_count, 2);
    }

    #[test]
    fn skill_count_clamped() {
        let cfg = GenerationConfig::default().with_skill_count(99);
        assert_eq!(cfg.skill_count, 18);
    }
}
