//! Core types for Tav: abilities, characters, rule tables, and exports.
//!
//! This crate holds the data model shared by the point-buy engine, the
//! record store, and the CLI. It knows nothing about randomness or
//! persistence; you can build a [`Character`] by hand or deserialize one
//! from JSON.

/// The six abilities and complete score sets.
pub mod ability;
/// Character records and identifiers.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Text, JSON, and HTML renderings of a character.
pub mod export;
/// Static rule tables: origins, races, classes, skills, feats.
pub mod rules;

/// Re-export ability types.
pub use ability::{Ability, AbilityScores};
/// Re-export character types.
pub use character::{Character, CharacterId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the export format selector.
pub use export::ExportFormat;
