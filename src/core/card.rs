//! Card kinds and the fixed pools they are dealt from.
//!
//! Drawing deals from all three kinds; playing only ever produces a Skip
//! or an Angel, so a play can never eliminate anyone.

use serde::{Deserialize, Serialize};

/// A card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Ends the turn without effect.
    Skip,
    /// Grants another action when played; harmless when drawn.
    Angel,
    /// Triggers a 50/50 elimination check when drawn.
    Hitman,
}

/// Cards a draw can produce, each equally likely.
pub const DRAW_POOL: [Card; 3] = [Card::Skip, Card::Angel, Card::Hitman];

/// Cards a play can produce, each equally likely.
pub const PLAY_POOL: [Card; 2] = [Card::Skip, Card::Angel];

impl Card {
    /// Display label used in log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Card::Skip => "Skip",
            Card::Angel => "Angel",
            Card::Hitman => "HITMAN",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
