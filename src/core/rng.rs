//! Randomness for the game, behind the `Dealer` trait.
//!
//! ## Key Features
//!
//! - **Injected**: the rules never touch an RNG directly, only a `Dealer`
//! - **Deterministic**: same seed produces the identical game
//! - **Scriptable**: `ScriptedDealer` replays fixed samples for tests
//!
//! ```
//! use hitman::core::{Dealer, GameRng, DRAW_POOL};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! assert_eq!(rng1.deal(&DRAW_POOL), rng2.deal(&DRAW_POOL));
//! assert_eq!(rng1.angel_save(), rng2.angel_save());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::Card;

/// Probability that an Angel saves a player from the Hitman.
pub const ANGEL_SAVE_CHANCE: f64 = 0.5;

/// Source of the game's random samples.
///
/// Implementations must pick uniformly from the offered pool and return
/// `true` from `angel_save` with probability [`ANGEL_SAVE_CHANCE`].
pub trait Dealer {
    /// Pick one card from a non-empty pool.
    fn deal(&mut self, pool: &[Card]) -> Card;

    /// Whether an Angel saves the actor from the Hitman.
    fn angel_save(&mut self) -> bool;
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from OS entropy.
    ///
    /// The seed stays readable through [`GameRng::seed`] so the session can
    /// be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

impl Dealer for GameRng {
    fn deal(&mut self, pool: &[Card]) -> Card {
        assert!(!pool.is_empty(), "Cannot deal from an empty pool");
        pool[self.gen_range_usize(0..pool.len())]
    }

    fn angel_save(&mut self) -> bool {
        self.gen_bool(ANGEL_SAVE_CHANCE)
    }
}

/// Dealer that replays a fixed script of samples.
///
/// Cards and save flags are consumed in order from separate queues, so a
/// test states exactly what each draw or play turns up.
///
/// ```
/// use hitman::core::{Card, Dealer, ScriptedDealer, DRAW_POOL};
///
/// let mut dealer = ScriptedDealer::new()
///     .then_card(Card::Hitman)
///     .then_save(false);
///
/// assert_eq!(dealer.deal(&DRAW_POOL), Card::Hitman);
/// assert!(!dealer.angel_save());
/// assert!(dealer.is_exhausted());
/// ```
///
/// # Panics
///
/// Panics when the script runs dry or scripts a card outside the pool being
/// dealt from. Both mean the test asked for more than it scripted.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDealer {
    cards: VecDeque<Card>,
    saves: VecDeque<bool>,
}

impl ScriptedDealer {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from card and save sequences.
    pub fn from_samples(
        cards: impl IntoIterator<Item = Card>,
        saves: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            saves: saves.into_iter().collect(),
        }
    }

    /// Queue the next card.
    #[must_use]
    pub fn then_card(mut self, card: Card) -> Self {
        self.cards.push_back(card);
        self
    }

    /// Queue the next Angel save flag.
    #[must_use]
    pub fn then_save(mut self, saved: bool) -> Self {
        self.saves.push_back(saved);
        self
    }

    /// Whether every scripted sample has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cards.is_empty() && self.saves.is_empty()
    }
}

impl Dealer for ScriptedDealer {
    fn deal(&mut self, pool: &[Card]) -> Card {
        let Some(card) = self.cards.pop_front() else {
            panic!("Scripted dealer ran out of cards");
        };
        assert!(
            pool.contains(&card),
            "Scripted card {card} is not in the pool {pool:?}"
        );
        card
    }

    fn angel_save(&mut self) -> bool {
        let Some(saved) = self.saves.pop_front() else {
            panic!("Scripted dealer ran out of save flags");
        };
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{DRAW_POOL, PLAY_POOL};

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.deal(&DRAW_POOL), rng2.deal(&DRAW_POOL));
            assert_eq!(rng1.angel_save(), rng2.angel_save());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.deal(&DRAW_POOL)).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.deal(&DRAW_POOL)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(7).seed(), 7);

        let rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        let mut original = rng.clone();
        assert_eq!(original.deal(&DRAW_POOL), replay.deal(&DRAW_POOL));
    }

    #[test]
    fn test_deal_covers_pool() {
        let mut rng = GameRng::new(42);
        let mut seen = [0usize; 3];

        for _ in 0..3000 {
            match rng.deal(&DRAW_POOL) {
                Card::Skip => seen[0] += 1,
                Card::Angel => seen[1] += 1,
                Card::Hitman => seen[2] += 1,
            }
        }

        // Roughly uniform: each kind well within [800, 1200] of 3000
        for count in seen {
            assert!((800..=1200).contains(&count), "skewed deal counts: {seen:?}");
        }
    }

    #[test]
    fn test_play_pool_never_deals_hitman() {
        let mut rng = GameRng::new(9);
        for _ in 0..500 {
            assert_ne!(rng.deal(&PLAY_POOL), Card::Hitman);
        }
    }

    #[test]
    fn test_angel_save_is_fair() {
        let mut rng = GameRng::new(3);
        let saves = (0..2000).filter(|_| rng.angel_save()).count();
        assert!((850..=1150).contains(&saves), "saves = {saves}");
    }

    #[test]
    fn test_scripted_dealer_order() {
        let mut dealer = ScriptedDealer::from_samples([Card::Skip, Card::Angel], [true]);

        assert_eq!(dealer.deal(&DRAW_POOL), Card::Skip);
        assert_eq!(dealer.deal(&PLAY_POOL), Card::Angel);
        assert!(dealer.angel_save());
        assert!(dealer.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "ran out of cards")]
    fn test_scripted_dealer_exhausted() {
        ScriptedDealer::new().deal(&DRAW_POOL);
    }

    #[test]
    #[should_panic(expected = "not in the pool")]
    fn test_scripted_dealer_rejects_foreign_card() {
        ScriptedDealer::new().then_card(Card::Hitman).deal(&PLAY_POOL);
    }
}
