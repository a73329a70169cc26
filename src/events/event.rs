//! Event payloads for the three notification channels.
//!
//! - `PlayerEvent`: a player's hand, pieces, score or routes changed
//! - `MapEvent`: a route gained an owner
//! - `GameEvent`: turns starting and ending, the game ending
//!
//! Payloads are immutable snapshots. `PlayerSnapshot` shares its route
//! list with the player through `im::Vector`, so taking one is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Baron, DealtPair, Hand};
use crate::map::RouteId;

/// A point-in-time copy of one player's public and private state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub baron: Baron,
    pub hand: Hand,
    pub pieces: u32,
    pub score: u32,
    pub claimed_routes: Vector<RouteId>,
    pub last_dealt: DealtPair,
    pub west_east_bonus: bool,
    pub north_south_bonus: bool,
}

/// Player channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    Changed(PlayerSnapshot),
}

/// Map channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapEvent {
    RouteClaimed { route: RouteId, owner: Baron },
}

/// Final result of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// First baron in seating order holding the highest score; `None` if
    /// nobody scored.
    pub winner: Option<Baron>,
    /// Final scores in seating order.
    pub scores: Vec<(Baron, u32)>,
}

impl GameOutcome {
    /// Pick the winner from final scores in seating order.
    ///
    /// ```
    /// use railroad_barons::core::Baron;
    /// use railroad_barons::events::GameOutcome;
    ///
    /// let outcome = GameOutcome::from_scores(vec![(Baron::Red, 9), (Baron::Blue, 9)]);
    /// assert_eq!(outcome.winner, Some(Baron::Red));
    /// ```
    #[must_use]
    pub fn from_scores(scores: Vec<(Baron, u32)>) -> Self {
        let mut winner = None;
        let mut best = 0;
        for &(baron, score) in &scores {
            if score > best {
                winner = Some(baron);
                best = score;
            }
        }
        Self { winner, scores }
    }

    /// Check if a baron won.
    #[must_use]
    pub fn is_winner(&self, baron: Baron) -> bool {
        self.winner == Some(baron)
    }
}

/// Game channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted { baron: Baron, turn: u32 },
    TurnEnded { baron: Baron, turn: u32 },
    GameOver(GameOutcome),
}
