//! Game configuration.
//!
//! `GameConfig` fixes the table before a game starts: which barons sit
//! down and in what order, how many pieces each gets, how large the
//! opening hand is, and how bonuses and the standard deck are sized.
//!
//! The defaults are the standard rules.

use serde::{Deserialize, Serialize};

use super::baron::Baron;
use super::error::BaronsError;

/// Default number of train pieces per player.
pub const DEFAULT_STARTING_PIECES: u32 = 45;

/// Default number of cards dealt to each player when a game starts.
pub const DEFAULT_OPENING_HAND: usize = 4;

/// Default bonus points per map row/column for a spanning connection.
pub const DEFAULT_BONUS_PER_CELL: u32 = 5;

/// Default number of cards of each kind in the standard deck.
pub const DEFAULT_CARDS_PER_KIND: u32 = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Barons in seating order. The first baron takes the first turn.
    pub barons: Vec<Baron>,

    /// Train pieces each player starts with.
    pub starting_pieces: u32,

    /// Cards dealt to each player at game start.
    pub opening_hand_size: usize,

    /// Spanning bonus per column (west–east) or row (north–south).
    pub bonus_per_cell: u32,

    /// Cards of each kind in a `StandardDeck`.
    pub cards_per_kind: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            barons: Baron::ALL.to_vec(),
            starting_pieces: DEFAULT_STARTING_PIECES,
            opening_hand_size: DEFAULT_OPENING_HAND,
            bonus_per_cell: DEFAULT_BONUS_PER_CELL,
            cards_per_kind: DEFAULT_CARDS_PER_KIND,
        }
    }
}

impl GameConfig {
    /// Standard four-baron configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seating order.
    #[must_use]
    pub fn with_barons(mut self, barons: impl Into<Vec<Baron>>) -> Self {
        self.barons = barons.into();
        self
    }

    /// Set the starting piece pool.
    #[must_use]
    pub fn with_starting_pieces(mut self, pieces: u32) -> Self {
        self.starting_pieces = pieces;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Set the spanning bonus per row/column.
    #[must_use]
    pub fn with_bonus_per_cell(mut self, points: u32) -> Self {
        self.bonus_per_cell = points;
        self
    }

    /// Set the standard deck size per card kind.
    #[must_use]
    pub fn with_cards_per_kind(mut self, count: u32) -> Self {
        self.cards_per_kind = count;
        self
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.barons.len()
    }

    /// Reject configurations no game can be played with.
    pub fn validate(&self) -> Result<(), BaronsError> {
        if self.barons.is_empty() {
            return Err(BaronsError::Config {
                reason: "at least one baron is required".into(),
            });
        }
        for (i, baron) in self.barons.iter().enumerate() {
            if self.barons[..i].contains(baron) {
                return Err(BaronsError::Config {
                    reason: format!("{baron} is seated twice"),
                });
            }
        }
        Ok(())
    }
}
