//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win conditions
//!
//! Sessions and front ends drive games through this trait and never
//! reach into turn resolution directly.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
