//! Observer notifications.
//!
//! Three independent one-way channels, each an `Observers<E>` over its own
//! event enum. The engine notifies after every state change; listeners
//! never influence the game.

pub mod event;
pub mod observer;

pub use event::{GameEvent, GameOutcome, MapEvent, PlayerEvent, PlayerSnapshot};
pub use observer::{ListenerId, Observers};
