//! # railroad-barons
//!
//! Rules engine for Railroad Barons, a route-claiming train game for up to
//! four barons on a grid map.
//!
//! ## Design Principles
//!
//! 1. **Check, then act**: a claim is fully validated before anything
//!    changes, so a rejected claim leaves no trace.
//!
//! 2. **Deterministic**: card selection is a fixed policy and the standard
//!    deck draws from a seeded ChaCha8 RNG, so games replay exactly.
//!
//! 3. **Observable**: players, the map and the engine each publish events
//!    to registered callbacks. Listeners never influence the game.
//!
//! ## Modules
//!
//! - `core`: barons, cards and hands, RNG, configuration, errors
//! - `map`: stations, routes, the grid, map text format
//! - `graph`: per-player route connectivity and shortest paths
//! - `rules`: claim legality and card selection
//! - `events`: observer registries and event payloads
//! - `game`: decks, player state, the turn engine

pub mod core;
pub mod events;
pub mod game;
pub mod graph;
pub mod map;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Baron, BaronsError, Card, DealtPair, GameConfig, GameRng, Hand};

pub use crate::map::{parse_map, write_map, MapBuilder, RailroadMap, Route, RouteId, Station, StationId};

pub use crate::graph::RouteGraph;

pub use crate::rules::{CardSpend, ClaimRejection};

pub use crate::events::{GameEvent, GameOutcome, ListenerId, MapEvent, PlayerEvent, PlayerSnapshot};

pub use crate::game::{ClaimReceipt, Deck, Player, RailroadBarons, StackedDeck, StandardDeck};
