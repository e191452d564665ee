//! Error types for game setup and turn handling.

use thiserror::Error;

/// Everything that can go wrong setting up or driving a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// An action was attempted after the last elimination.
    #[error("The game is over; reset it before taking another action")]
    GameOver,
    /// The roster has fewer than two seats.
    #[error("At least 2 players are required, got {count}")]
    TooFewPlayers { count: usize },
    /// The roster has more seats than a `PlayerId` can address.
    #[error("At most 255 players are supported, got {count}")]
    TooManyPlayers { count: usize },
    /// Two seats share a name.
    #[error("Player name {0:?} appears more than once")]
    DuplicatePlayer(String),
    /// A name is empty or whitespace only.
    #[error("Player names must not be blank")]
    EmptyPlayerName,
    /// A name lookup found no such player at the table.
    #[error("No player named {0:?} at this table")]
    UnknownPlayer(String),
    /// A loaded snapshot breaks a state invariant.
    #[error("Invalid game state: {0}")]
    InvalidState(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GameError::TooFewPlayers { count: 1 }.to_string(),
            "At least 2 players are required, got 1"
        );
        assert_eq!(
            GameError::DuplicatePlayer("Bob".into()).to_string(),
            "Player name \"Bob\" appears more than once"
        );
        assert_eq!(
            GameError::UnknownPlayer("Eve".into()).to_string(),
            "No player named \"Eve\" at this table"
        );
    }
}
