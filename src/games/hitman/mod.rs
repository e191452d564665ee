//! Hitman: a turn-based elimination card game.
//!
//! - Players sit in a fixed order; the first seat acts first
//! - On your turn: **draw** (the deck counter drops by one, and a Hitman
//!   kills you unless an Angel saves you on a coin flip) or **play** (a Skip
//!   passes the turn, an Angel lets you act again)
//! - Last player standing wins
//!
//! `HitmanGame` is the state machine, `Table` a seeded session around it,
//! `Board` the text status view and `console` a line-based front end.

pub mod console;

mod board;
mod game;
mod table;

pub use board::{Board, TITLE};
pub use game::{HitmanGame, TurnReport};
pub use table::Table;
