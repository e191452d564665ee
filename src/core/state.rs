//! Game state: roster, survivors, turn order and the turn log.
//!
//! ## GameState
//!
//! Everything a presentation layer needs to draw the table:
//! - Roster (fixed) and the alive sequence (shrinks on elimination)
//! - Whose turn it is, the turn counter and the deck counter
//! - Phase and winner
//! - The log of resolved actions for the current game
//!
//! The state is a plain caller-owned value. Cloning is cheap: the alive
//! list lives inline and the log is a persistent `im` vector.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::ActionRecord;
use super::config::GameConfig;
use super::error::GameError;
use super::player::{PlayerId, Roster};

/// Coarse game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The actor may draw or play.
    #[default]
    AwaitingAction,
    /// One player is left standing. Terminal until reset.
    GameOver,
}

/// Complete game state.
///
/// ## Invariants
///
/// - `alive` is a non-empty subsequence of the roster, in seating order
/// - `alive.len() == 1` exactly when `phase == GameOver`
/// - `current_index < alive.len()` while awaiting an action
/// - `winner` is set exactly when `phase == GameOver`, to the survivor
///
/// Deserialization checks all of the above and rejects a snapshot that
/// breaks any of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateSnapshot")]
pub struct GameState {
    roster: Roster,

    /// Players still in the game, in seating order.
    alive: SmallVec<[PlayerId; 4]>,

    /// Index into `alive` naming the actor.
    current_index: usize,

    /// Turn number (starts at 1).
    turn: u32,

    /// Remaining-deck counter. Not floored at zero.
    deck_size: i32,

    phase: Phase,

    winner: Option<PlayerId>,

    /// Resolved actions of this game, oldest first.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create the opening state: everyone alive, first seat to act, turn 1.
    #[must_use]
    pub fn new(roster: Roster, deck_size: i32) -> Self {
        let alive = roster.player_ids().collect();

        Self {
            roster,
            alive,
            current_index: 0,
            turn: 1,
            deck_size,
            phase: Phase::AwaitingAction,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Create the opening state described by a configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        Ok(Self::new(config.roster()?, config.deck_size))
    }

    // === Queries ===

    /// The full roster in seating order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Players still in the game, in seating order.
    #[must_use]
    pub fn alive(&self) -> &[PlayerId] {
        &self.alive
    }

    /// Check if a player is still in the game.
    #[must_use]
    pub fn is_alive(&self, player: PlayerId) -> bool {
        self.alive.contains(&player)
    }

    /// Index into [`GameState::alive`] of the actor.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The player whose turn it is, or `None` once the game is over.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::AwaitingAction => self.alive.get(self.current_index).copied(),
            Phase::GameOver => None,
        }
    }

    /// Name of the actor, or `None` once the game is over.
    #[must_use]
    pub fn actor_name(&self) -> Option<&str> {
        self.actor().and_then(|p| self.roster.name(p))
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Remaining-deck counter. May be negative.
    #[must_use]
    pub fn deck_size(&self) -> i32 {
        self.deck_size
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The last player standing, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Name of the winner, once the game is over.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.and_then(|p| self.roster.name(p))
    }

    /// Resolved actions of this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Transitions ===
    //
    // Crate-private: only the rules move the game forward.

    /// Take one card off the deck counter. Sticks at `i32::MIN`.
    pub(crate) fn burn_card(&mut self) {
        self.deck_size = self.deck_size.saturating_sub(1);
    }

    /// Remove the actor from the alive sequence.
    ///
    /// The seat that slides into `current_index` is the next in order; when
    /// the removed actor sat last, the index wraps back to the first seat.
    pub(crate) fn eliminate_actor(&mut self) -> PlayerId {
        let player = self.alive.remove(self.current_index);
        if self.current_index >= self.alive.len() {
            self.current_index = 0;
        }
        player
    }

    /// End the game if a single player is left. Returns whether it ended.
    pub(crate) fn settle(&mut self) -> bool {
        if let [survivor] = self.alive.as_slice() {
            self.phase = Phase::GameOver;
            self.winner = Some(*survivor);
            true
        } else {
            false
        }
    }

    /// Pass the turn to the next seat in the alive sequence.
    pub(crate) fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.alive.len();
        self.turn += 1;
    }

    /// Append a resolved action to the log.
    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct StateSnapshot {
    roster: Roster,
    alive: SmallVec<[PlayerId; 4]>,
    current_index: usize,
    turn: u32,
    deck_size: i32,
    phase: Phase,
    winner: Option<PlayerId>,
    history: Vector<ActionRecord>,
}

impl TryFrom<StateSnapshot> for GameState {
    type Error = GameError;

    fn try_from(snapshot: StateSnapshot) -> Result<Self, Self::Error> {
        let seats = snapshot.roster.len();
        let alive = &snapshot.alive;

        if alive.is_empty() {
            return Err(GameError::InvalidState("nobody is alive"));
        }
        if alive.iter().any(|p| p.index() >= seats) {
            return Err(GameError::InvalidState("alive player outside the roster"));
        }
        if !alive.windows(2).all(|w| w[0] < w[1]) {
            return Err(GameError::InvalidState("alive players out of seating order"));
        }
        if snapshot.current_index >= alive.len() {
            return Err(GameError::InvalidState("current index past the alive players"));
        }
        if snapshot.turn == 0 {
            return Err(GameError::InvalidState("turns start at 1"));
        }
        if snapshot.history.iter().any(|r| r.player.index() >= seats) {
            return Err(GameError::InvalidState("history names a player outside the roster"));
        }

        match (snapshot.phase, alive.as_slice(), snapshot.winner) {
            (Phase::AwaitingAction, [_], _) => {
                return Err(GameError::InvalidState("a lone survivor must end the game"));
            }
            (Phase::AwaitingAction, _, Some(_)) => {
                return Err(GameError::InvalidState("winner set while the game is running"));
            }
            (Phase::GameOver, [survivor], Some(winner)) if *survivor == winner => {}
            (Phase::GameOver, [_], _) => {
                return Err(GameError::InvalidState("winner is not the survivor"));
            }
            (Phase::GameOver, _, _) => {
                return Err(GameError::InvalidState("game over with more than one survivor"));
            }
            (Phase::AwaitingAction, _, None) => {}
        }

        Ok(Self {
            roster: snapshot.roster,
            alive: snapshot.alive,
            current_index: snapshot.current_index,
            turn: snapshot.turn,
            deck_size: snapshot.deck_size,
            phase: snapshot.phase,
            winner: snapshot.winner,
            history: snapshot.history,
        })
    }
}
