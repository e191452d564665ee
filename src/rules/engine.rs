//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - Win conditions

use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::error::GameError;
use crate::core::player::PlayerId;
use crate::core::rng::Dealer;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    /// Last player standing.
    pub winner: PlayerId,
    /// Turn on which the game ended.
    pub turn: u32,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty once the game is over
/// - `apply_action`: Must be deterministic given the dealer's samples
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Fresh opening state for this game.
    fn initial_state(&self) -> GameState;

    /// Actions the current actor may take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Resolve an action for the current actor.
    ///
    /// Errors leave `state` untouched.
    fn apply_action(
        &self,
        state: &mut GameState,
        action: Action,
        dealer: &mut dyn Dealer,
    ) -> Result<ActionRecord, GameError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check whether an action is currently legal.
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}
