//! Core game types: players, cards, actions, state, RNG, configuration.
//!
//! This module holds the building blocks the rules operate on. Nothing here
//! decides what a turn does; that lives in `games::hitman`.

pub mod player;
pub mod card;
pub mod error;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, Roster, MAX_PLAYERS};
pub use card::{Card, DRAW_POOL, PLAY_POOL};
pub use error::GameError;
pub use rng::{Dealer, GameRng, ScriptedDealer, ANGEL_SAVE_CHANCE};
pub use config::{GameConfig, DEFAULT_DECK_SIZE, DEFAULT_PLAYERS};
pub use action::{Action, ActionRecord, Outcome};
pub use state::{GameState, Phase};
