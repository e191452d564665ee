//! Game configuration.
//!
//! A `GameConfig` fixes everything a fresh game starts from:
//! - the seating roster (player names, in turn order)
//! - the initial deck counter
//! - an optional RNG seed for reproducible sessions
//!
//! The card pools themselves are not configurable.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Roster;

/// Players seated when nothing else is configured.
pub const DEFAULT_PLAYERS: [&str; 2] = ["Alice", "Bob"];

/// Deck counter at the start of every game.
pub const DEFAULT_DECK_SIZE: i32 = 11;

/// Complete game configuration.
///
/// ```
/// use hitman::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_players(["Ann", "Ben", "Cat"])
///     .with_deck_size(20)
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.players.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names in seating order.
    pub players: Vec<String>,

    /// Initial deck counter.
    pub deck_size: i32,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS.iter().map(|name| name.to_string()).collect(),
            deck_size: DEFAULT_DECK_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (Alice and Bob, 11 cards, unseeded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster.
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Set the initial deck counter.
    #[must_use]
    pub fn with_deck_size(mut self, deck_size: i32) -> Self {
        self.deck_size = deck_size;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the validated roster this configuration describes.
    pub fn roster(&self) -> Result<Roster, GameError> {
        Roster::new(self.players.iter().cloned())
    }

    /// Check the configuration without building anything else.
    pub fn validate(&self) -> Result<(), GameError> {
        self.roster().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.players, vec!["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(config.deck_size, 11);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new()
            .with_players(vec!["X".to_string(), "Y".to_string()])
            .with_deck_size(3)
            .with_seed(99);

        assert_eq!(config.players.len(), 2);
        assert_eq!(config.deck_size, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            GameConfig::new().with_players(["Alone"]).validate(),
            Err(GameError::TooFewPlayers { count: 1 })
        );
        assert_eq!(
            GameConfig::new().with_players(["A", "B", "A"]).validate(),
            Err(GameError::DuplicatePlayer("A".to_string()))
        );
    }

    #[test]
    fn test_config_roster_order() {
        let roster = GameConfig::new().with_players(["B", "A"]).roster().unwrap();
        assert_eq!(roster.names(), &["B".to_string(), "A".to_string()]);
    }
}
