//! # hitman
//!
//! A small turn-based elimination card game.
//!
//! Players take turns choosing to **draw** or **play**. Drawing can turn up
//! the Hitman, which eliminates the drawer unless an Angel saves them on a
//! coin flip. Playing is safe: a Skip passes the turn, an Angel grants
//! another action. The last player standing wins.
//!
//! ## Design Principles
//!
//! 1. **Caller-owned state**: a game is a plain `GameState` value passed
//!    into the rules. There is no global game.
//!
//! 2. **Injected randomness**: every random sample comes from a `Dealer`.
//!    Seed a `GameRng` for reproducible games, or script a
//!    `ScriptedDealer` to pin exact outcomes in tests.
//!
//! 3. **Explicit phases**: `AwaitingAction` until one player remains, then
//!    `GameOver` until the game is reset.
//!
//! ## Modules
//!
//! - `core`: Players, cards, actions, state, RNG, configuration, errors
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Hitman state machine, session, board and console

pub mod core;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Roster,
    Card, DRAW_POOL, PLAY_POOL,
    Dealer, GameRng, ScriptedDealer,
    GameConfig, GameError,
    Action, ActionRecord, Outcome,
    GameState, Phase,
};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::games::hitman::{Board, HitmanGame, Table, TurnReport};
