//! Player identification and the seating roster.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players.
//!
//! ## Roster
//!
//! The ordered list of player names fixed at game start. Insertion order is
//! seating order, and names are unique within a roster.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::GameError;

/// Maximum number of seats a roster can hold.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Seat identifier. Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` seats.
    ///
    /// ```
    /// use hitman::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Ordered, duplicate-free list of player names.
///
/// ```
/// use hitman::core::{PlayerId, Roster};
///
/// let roster = Roster::new(["Alice", "Bob"]).unwrap();
/// assert_eq!(&roster[PlayerId::new(1)], "Bob");
/// assert_eq!(roster.find("Alice"), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
    seats: FxHashMap<String, PlayerId>,
}

impl Roster {
    /// Build a roster, rejecting blank or repeated names.
    ///
    /// A roster needs at least two seats: with fewer there is nobody to
    /// eliminate and the game would start already decided.
    pub fn new<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.len() < 2 {
            return Err(GameError::TooFewPlayers { count: names.len() });
        }
        if names.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers { count: names.len() });
        }

        let mut seats = FxHashMap::default();
        for (seat, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::EmptyPlayerName);
            }
            if seats.insert(name.clone(), PlayerId(seat as u8)).is_some() {
                return Err(GameError::DuplicatePlayer(name.clone()));
            }
        }

        Ok(Self { names, seats })
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated roster; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at a seat, if the seat exists.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> Option<&str> {
        self.names.get(player.index()).map(String::as_str)
    }

    /// Seat of a player by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlayerId> {
        self.seats.get(name).copied()
    }

    /// Iterate over all player IDs in seating order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.names.len())
    }

    /// Iterate over (PlayerId, name) pairs in seating order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (PlayerId(i as u8), name.as_str()))
    }

    /// All names in seating order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Index<PlayerId> for Roster {
    type Output = str;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.names[player.index()]
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = GameError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "Seat 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(["Alice", "Bob", "Carol"]).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.name(PlayerId::new(2)), Some("Carol"));
        assert_eq!(roster.name(PlayerId::new(3)), None);
        assert_eq!(roster.find("Bob"), Some(PlayerId::new(1)));
        assert_eq!(roster.find("Mallory"), None);
        assert_eq!(&roster[PlayerId::new(0)], "Alice");
    }

    #[test]
    fn test_roster_preserves_seating_order() {
        let roster = Roster::new(vec!["Zed".to_string(), "Amy".to_string()]).unwrap();
        let seated: Vec<_> = roster.iter().map(|(_, name)| name).collect();
        assert_eq!(seated, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let err = Roster::new(["Alice", "Bob", "Alice"]).unwrap_err();
        assert_eq!(err, GameError::DuplicatePlayer("Alice".to_string()));
    }

    #[test]
    fn test_roster_rejects_blank_name() {
        assert_eq!(Roster::new(["Alice", "  "]).unwrap_err(), GameError::EmptyPlayerName);
    }

    #[test]
    fn test_roster_size_limits() {
        assert_eq!(
            Roster::new(["Solo"]).unwrap_err(),
            GameError::TooFewPlayers { count: 1 }
        );

        let crowd: Vec<String> = (0..256).map(|i| format!("P{i}")).collect();
        assert_eq!(
            Roster::new(crowd).unwrap_err(),
            GameError::TooManyPlayers { count: 256 }
        );
    }

    #[test]
    fn test_roster_serialization() {
        let roster = Roster::new(["Alice", "Bob"]).unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        assert_eq!(json, r#"["Alice","Bob"]"#);

        let deserialized: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, roster);
        assert_eq!(deserialized.find("Bob"), Some(PlayerId::new(1)));

        assert!(serde_json::from_str::<Roster>(r#"["Alice","Alice"]"#).is_err());
    }
}
