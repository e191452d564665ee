//! Actions and the records they leave behind.
//!
//! A player has exactly two verbs: `Draw` (take a card from the deck,
//! risking the Hitman) and `Play` (use a card from hand, Skip or Angel).
//! Each resolved action becomes an `ActionRecord` holding the card that
//! came up and what it did to the actor.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::{PlayerId, Roster};

/// A player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw from the deck.
    Draw,
    /// Play a card from hand.
    Play,
}

impl Action {
    /// Both actions, in menu order.
    pub const ALL: [Action; 2] = [Action::Draw, Action::Play];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Draw => f.write_str("draw"),
            Action::Play => f.write_str("play"),
        }
    }
}

/// What an action did to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Drew a Skip or an Angel; turn passes.
    Safe,
    /// Drew the Hitman and an Angel saved them; turn passes.
    Saved,
    /// Drew the Hitman and died.
    Eliminated,
    /// Played a Skip; turn passes.
    Skipped,
    /// Played an Angel; same actor goes again.
    ExtraTurn,
}

impl Outcome {
    /// Whether the turn moved on to another player (or the game ended).
    #[must_use]
    pub const fn ends_turn(self) -> bool {
        !matches!(self, Outcome::ExtraTurn)
    }
}

/// A resolved action with metadata for the turn log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// The card that came up.
    pub card: Card,

    /// What happened to the actor.
    pub outcome: Outcome,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, card: Card, outcome: Outcome, turn: u32) -> Self {
        Self {
            player,
            action,
            card,
            outcome,
            turn,
        }
    }

    /// Human-readable log line, using names from the roster.
    ///
    /// ```
    /// use hitman::core::{Action, ActionRecord, Card, Outcome, PlayerId, Roster};
    ///
    /// let roster = Roster::new(["Alice", "Bob"]).unwrap();
    /// let record = ActionRecord::new(PlayerId::new(0), Action::Draw, Card::Hitman, Outcome::Saved, 1);
    /// assert_eq!(record.describe(&roster), "Alice drew: HITMAN. Alice used Angel! Survived!");
    /// ```
    #[must_use]
    pub fn describe(&self, roster: &Roster) -> String {
        let name = roster.name(self.player).unwrap_or("?");

        match (self.action, self.outcome) {
            (Action::Draw, Outcome::Saved) => {
                format!("{name} drew: {}. {name} used Angel! Survived!", self.card)
            }
            (Action::Draw, Outcome::Eliminated) => {
                format!("{name} drew: {}. {name} died!", self.card)
            }
            (Action::Draw, _) => format!("{name} drew: {}", self.card),
            (Action::Play, _) => format!("{name} played: {}", self.card),
        }
    }
}
