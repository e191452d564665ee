//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{ActionRecord, GameError, Roster};

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        match err {
            GameError::GameOver => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Python view of one resolved action.
#[pyclass(name = "ActionRecord", frozen)]
#[derive(Clone, Debug)]
pub struct PyActionRecord {
    /// Acting player's name.
    #[pyo3(get)]
    pub player: String,
    /// `"draw"` or `"play"`.
    #[pyo3(get)]
    pub action: String,
    /// Card label: `"Skip"`, `"Angel"` or `"HITMAN"`.
    #[pyo3(get)]
    pub card: String,
    /// Outcome name, e.g. `"Eliminated"`.
    #[pyo3(get)]
    pub outcome: String,
    /// Turn the action was taken on.
    #[pyo3(get)]
    pub turn: u32,
    /// Log line.
    #[pyo3(get)]
    pub log: String,
}

impl PyActionRecord {
    pub(crate) fn from_record(record: &ActionRecord, roster: &Roster) -> Self {
        Self {
            player: roster.name(record.player).unwrap_or("?").to_string(),
            action: record.action.to_string(),
            card: record.card.to_string(),
            outcome: format!("{:?}", record.outcome),
            turn: record.turn,
            log: record.describe(roster),
        }
    }
}

#[pymethods]
impl PyActionRecord {
    fn __repr__(&self) -> String {
        format!(
            "ActionRecord(turn={}, player={:?}, action={}, card={}, outcome={})",
            self.turn, self.player, self.action, self.card, self.outcome
        )
    }

    fn __str__(&self) -> String {
        self.log.clone()
    }
}
