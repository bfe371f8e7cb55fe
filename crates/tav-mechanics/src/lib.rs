//! Character mechanics for Tav.
//!
//! Provides the point-buy engine (cost table, validity check, and a
//! rejection-sampling generator) and the routines that assemble a full
//! character from random draws or from explicit player choices. Every
//! function that needs randomness takes the caller's RNG; nothing here
//! touches global random state.

pub mod builder;
pub mod config;
pub mod error;
pub mod point_buy;

pub use builder::{
    CharacterChoices, apply_ability_bonuses, build_character, random_character, with_new_skills,
};
pub use config::GenerationConfig;
pub use error::{MechError, MechResult};
pub use point_buy::{PointBuy, is_valid_point_buy, random_point_buy, score_cost, total_cost};
