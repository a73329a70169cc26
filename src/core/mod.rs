//! Core types: barons, cards, RNG, configuration, errors.
//!
//! Everything here is independent of any particular map.

pub mod baron;
pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use baron::Baron;
pub use card::{Card, DealtPair, Hand};
pub use config::GameConfig;
pub use error::BaronsError;
pub use rng::GameRng;
