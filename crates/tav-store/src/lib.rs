//! On-disk record store for Tav characters.
//!
//! Each character lives in its own pretty-printed JSON file named after
//! its UUID. Writes go through a temporary file and an atomic rename, so
//! a crash never leaves a half-written record behind.

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{CharacterStore, STORE_ENV, default_dir};
