//! Hitman game implementation.

use tracing::{debug, info};

use crate::core::{
    Action, ActionRecord, Card, Dealer, GameConfig, GameError, GameState, Outcome, Roster,
    DRAW_POOL, PLAY_POOL,
};
use crate::rules::{GameResult, RulesEngine};

/// A resolved action plus its log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// What happened.
    pub record: ActionRecord,
    /// Human-readable description, e.g. `Alice drew: Skip`.
    pub log: String,
}

impl TurnReport {
    fn new(record: ActionRecord, roster: &Roster) -> Self {
        let log = record.describe(roster);
        Self { record, log }
    }
}

/// The Hitman rules: a turn/elimination state machine.
///
/// Holds only the validated configuration; every game in progress lives in
/// a caller-owned [`GameState`].
#[derive(Clone, Debug)]
pub struct HitmanGame {
    config: GameConfig,
    roster: Roster,
}

impl Default for HitmanGame {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            roster: Roster::new(crate::core::DEFAULT_PLAYERS).expect("default roster is valid"),
        }
    }
}

impl HitmanGame {
    /// Create the rules for a configuration, validating it up front.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let roster = config.roster()?;
        Ok(Self { config, roster })
    }

    /// A fresh game: full roster alive, first seat to act, turn 1, full deck.
    #[must_use]
    pub fn reset(&self) -> GameState {
        GameState::new(self.roster.clone(), self.config.deck_size)
    }

    /// Draw from the deck.
    ///
    /// Burns one card off the deck counter, then deals from
    /// {Skip, Angel, Hitman}. A Hitman kills the actor unless an Angel
    /// saves them (a coin flip). The turn then passes, unless only one
    /// player is left, in which case the game is over.
    pub fn draw(&self, state: &mut GameState, dealer: &mut dyn Dealer) -> Result<TurnReport, GameError> {
        let actor = state.actor().ok_or(GameError::GameOver)?;
        let turn = state.turn();

        state.burn_card();
        let card = dealer.deal(&DRAW_POOL);
        debug!(turn, card = %card, deck = state.deck_size(), "card drawn");

        let outcome = match card {
            Card::Skip | Card::Angel => Outcome::Safe,
            Card::Hitman if dealer.angel_save() => Outcome::Saved,
            Card::Hitman => {
                state.eliminate_actor();
                info!(player = &state.roster()[actor], turn, "player eliminated");
                Outcome::Eliminated
            }
        };

        let record = ActionRecord::new(actor, Action::Draw, card, outcome, turn);
        state.record(record.clone());

        if state.settle() {
            info!(winner = state.winner_name().unwrap_or("?"), turn, "game over");
        } else {
            state.advance();
        }

        Ok(TurnReport::new(record, state.roster()))
    }

    /// Play a card from hand.
    ///
    /// Deals from {Skip, Angel}. A Skip passes the turn; an Angel lets the
    /// same actor go again without advancing the turn counter. The deck
    /// counter is never touched and nobody can be eliminated.
    pub fn play(&self, state: &mut GameState, dealer: &mut dyn Dealer) -> Result<TurnReport, GameError> {
        let actor = state.actor().ok_or(GameError::GameOver)?;
        let turn = state.turn();

        let card = dealer.deal(&PLAY_POOL);
        debug!(turn, card = %card, "card played");

        let outcome = match card {
            Card::Angel => Outcome::ExtraTurn,
            // The play pool holds no Hitman
            Card::Skip | Card::Hitman => {
                state.advance();
                Outcome::Skipped
            }
        };

        let record = ActionRecord::new(actor, Action::Play, card, outcome, turn);
        state.record(record.clone());

        Ok(TurnReport::new(record, state.roster()))
    }

    /// Resolve either action.
    pub fn act(
        &self,
        state: &mut GameState,
        action: Action,
        dealer: &mut dyn Dealer,
    ) -> Result<TurnReport, GameError> {
        match action {
            Action::Draw => self.draw(state, dealer),
            Action::Play => self.play(state, dealer),
        }
    }

    /// The validated roster every reset starts from.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}

impl RulesEngine for HitmanGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn initial_state(&self) -> GameState {
        self.reset()
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_over() {
            vec![]
        } else {
            Action::ALL.to_vec()
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        action: Action,
        dealer: &mut dyn Dealer,
    ) -> Result<ActionRecord, GameError> {
        self.act(state, action, dealer).map(|report| report.record)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner,
            turn: state.turn(),
        })
    }
}
