//! Python bindings for the Hitman card game.
//!
//! # Quick Start
//!
//! ```python
//! import hitman
//!
//! game = hitman.HitmanGame(players=["Alice", "Bob"], seed=42)
//!
//! while not game.is_over:
//!     print(game.draw())
//!
//! print(game.board())
//! game.reset()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// hitman: draw, play, survive the Hitman.
#[pymodule]
fn hitman(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyActionRecord>()?;
    m.add_class::<PyHitmanGame>()?;

    m.add("DEFAULT_DECK_SIZE", crate::core::DEFAULT_DECK_SIZE)?;

    Ok(())
}
