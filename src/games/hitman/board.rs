//! Plain-text status board.

use crate::core::GameState;

/// Heading shown on top of every board.
pub const TITLE: &str = "HITMAN CARD GAME";

/// What a player sees on the table at a glance.
///
/// ```
/// use hitman::games::hitman::{Board, HitmanGame};
///
/// let state = HitmanGame::default().reset();
/// assert_eq!(
///     Board::new(&state).to_string(),
///     "HITMAN CARD GAME\nTurn 1: Alice\nAlice: ALIVE\nBob: ALIVE\nDeck: 11 cards"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    lines: Vec<String>,
}

impl Board {
    /// Lay out the board for a state.
    #[must_use]
    pub fn new(state: &GameState) -> Self {
        let mut lines = vec![TITLE.to_string()];

        if let Some(actor) = state.actor_name() {
            lines.push(format!("Turn {}: {}", state.turn(), actor));
        }

        for (player, name) in state.roster().iter() {
            let status = if state.is_alive(player) { "ALIVE" } else { "DEAD" };
            lines.push(format!("{name}: {status}"));
        }

        lines.push(format!("Deck: {} cards", state.deck_size()));

        if let Some(winner) = state.winner_name() {
            lines.push(format!("{winner} WINS!"));
        }

        Self { lines }
    }

    /// The board, one entry per line.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, ScriptedDealer};
    use crate::games::hitman::HitmanGame;

    #[test]
    fn test_board_after_elimination() {
        let game = HitmanGame::default();
        let mut state = game.reset();
        let mut dealer = ScriptedDealer::new().then_card(Card::Hitman).then_save(false);
        game.draw(&mut state, &mut dealer).unwrap();

        let board = Board::new(&state);

        assert_eq!(
            board.lines(),
            &[
                "HITMAN CARD GAME".to_string(),
                "Alice: DEAD".to_string(),
                "Bob: ALIVE".to_string(),
                "Deck: 10 cards".to_string(),
                "Bob WINS!".to_string(),
            ]
        );
    }

    #[test]
    fn test_board_shows_negative_deck() {
        let game = HitmanGame::new(crate::core::GameConfig::new().with_deck_size(0)).unwrap();
        let mut state = game.reset();
        let mut dealer = ScriptedDealer::new().then_card(Card::Skip);
        game.draw(&mut state, &mut dealer).unwrap();

        let board = Board::new(&state).to_string();
        assert!(board.contains("Turn 2: Bob"));
        assert!(board.contains("Deck: -1 cards"));
    }
}
