//! Playing a game.
//!
//! ## Key Types
//!
//! - `Deck`: card source; `StandardDeck` (seeded) and `StackedDeck` (scripted)
//! - `Player`: one baron's hand, pieces, score and claimed routes
//! - `RailroadBarons`: the turn engine tying players, map and deck together

pub mod deck;
pub mod engine;
pub mod player;

pub use deck::{Deck, StackedDeck, StandardDeck};
pub use engine::RailroadBarons;
pub use player::{ClaimReceipt, Player};
