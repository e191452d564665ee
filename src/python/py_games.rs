//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, DEFAULT_DECK_SIZE};
use crate::games::hitman::Table;

use super::py_core::PyActionRecord;

/// Python wrapper for a Hitman table.
#[pyclass(name = "HitmanGame")]
pub struct PyHitmanGame {
    table: Table,
}

#[pymethods]
impl PyHitmanGame {
    /// Seat a new game.
    ///
    /// # Arguments
    /// - players: Names in seating order (default: Alice, Bob)
    /// - deck_size: Initial deck counter
    /// - seed: RNG seed; random when omitted
    #[new]
    #[pyo3(signature = (players = None, deck_size = DEFAULT_DECK_SIZE, seed = None))]
    fn new(players: Option<Vec<String>>, deck_size: i32, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::new().with_deck_size(deck_size);
        if let Some(players) = players {
            config = config.with_players(players);
        }
        config.seed = seed;

        Ok(Self {
            table: Table::new(config)?,
        })
    }

    /// Draw for the current player. Returns the log line.
    fn draw(&mut self) -> PyResult<String> {
        Ok(self.table.draw()?.log)
    }

    /// Play for the current player. Returns the log line.
    fn play(&mut self) -> PyResult<String> {
        Ok(self.table.play()?.log)
    }

    /// Start a fresh game with the same players.
    fn reset(&mut self) {
        self.table.reset();
    }

    /// Status board text.
    fn board(&self) -> String {
        self.table.board().to_string()
    }

    /// Resolved actions of the current game, oldest first.
    fn history(&self) -> Vec<PyActionRecord> {
        let state = self.table.state();
        state
            .history()
            .iter()
            .map(|record| PyActionRecord::from_record(record, state.roster()))
            .collect()
    }

    /// Whether the named player is still in the game.
    ///
    /// Raises ValueError for a name that is not at the table.
    fn is_alive(&self, name: &str) -> PyResult<bool> {
        Ok(self.table.is_alive(name)?)
    }

    /// Name of the player whose turn it is, or None once the game is over.
    #[getter]
    fn current_player(&self) -> Option<String> {
        self.table.state().actor_name().map(str::to_string)
    }

    /// Names of players still in the game, in seating order.
    #[getter]
    fn alive(&self) -> Vec<String> {
        let state = self.table.state();
        state
            .alive()
            .iter()
            .filter_map(|&p| state.roster().name(p))
            .map(str::to_string)
            .collect()
    }

    /// All player names in seating order.
    #[getter]
    fn players(&self) -> Vec<String> {
        self.table.state().roster().names().to_vec()
    }

    /// Current turn number.
    #[getter]
    fn turn(&self) -> u32 {
        self.table.state().turn()
    }

    /// Remaining-deck counter.
    #[getter]
    fn deck_size(&self) -> i32 {
        self.table.state().deck_size()
    }

    /// Whether the game has ended.
    #[getter]
    fn is_over(&self) -> bool {
        self.table.state().is_over()
    }

    /// Winner's name once the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.table.state().winner_name().map(str::to_string)
    }

    /// Seed of the session's RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.table.seed()
    }

    fn __repr__(&self) -> String {
        let state = self.table.state();
        let status = match (state.actor_name(), state.winner_name()) {
            (_, Some(winner)) => format!("winner={winner}"),
            (Some(actor), None) => format!("actor={actor}"),
            (None, None) => "idle".to_string(),
        };
        format!(
            "HitmanGame(turn={}, deck={}, alive={}, {})",
            state.turn(),
            state.deck_size(),
            state.alive().len(),
            status
        )
    }
}
