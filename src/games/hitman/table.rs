//! A seated game session: rules, live state and the RNG in one place.
//!
//! `Table` is what a presentation layer holds. It exposes the three
//! zero-argument commands (`draw`, `play`, `reset`) and read access to the
//! current snapshot.

use tracing::{info, warn};

use crate::core::{Action, GameConfig, GameError, GameRng, GameState};
use crate::rules::RulesEngine;

use super::board::Board;
use super::game::{HitmanGame, TurnReport};

/// A running game session.
///
/// ```
/// use hitman::core::GameConfig;
/// use hitman::games::hitman::Table;
///
/// let mut table = Table::new(GameConfig::new().with_seed(7)).unwrap();
/// while !table.state().is_over() {
///     let report = table.draw().unwrap();
///     println!("{}", report.log);
/// }
/// assert!(table.state().winner().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    rules: HitmanGame,
    state: GameState,
    rng: GameRng,
}

impl Table {
    /// Seat a new game.
    ///
    /// Uses `config.seed` when set, otherwise a seed from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let rules = HitmanGame::new(config)?;
        let state = rules.initial_state();

        info!(
            players = ?rules.roster().names(),
            deck = state.deck_size(),
            seed = rng.seed(),
            "table seated"
        );

        Ok(Self { rules, state, rng })
    }

    /// Draw for the current actor.
    pub fn draw(&mut self) -> Result<TurnReport, GameError> {
        self.act(Action::Draw)
    }

    /// Play for the current actor.
    pub fn play(&mut self) -> Result<TurnReport, GameError> {
        self.act(Action::Play)
    }

    /// Resolve either command.
    pub fn act(&mut self, action: Action) -> Result<TurnReport, GameError> {
        match self.rules.act(&mut self.state, action, &mut self.rng) {
            Ok(report) => {
                info!(turn = report.record.turn, "{}", report.log);
                Ok(report)
            }
            Err(e) => {
                warn!(%action, error = %e, "action rejected");
                Err(e)
            }
        }
    }

    /// Throw the current game away and seat a fresh one.
    ///
    /// The RNG keeps running, so the next game differs from the last.
    pub fn reset(&mut self) {
        self.state = self.rules.reset();
        info!("table reset");
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Status board for the current snapshot.
    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(&self.state)
    }

    /// Seed the session's RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether the named player is still in the current game.
    pub fn is_alive(&self, name: &str) -> Result<bool, GameError> {
        let player = self
            .state
            .roster()
            .find(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
        Ok(self.state.is_alive(player))
    }
}
