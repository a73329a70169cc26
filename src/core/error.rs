//! Error types.
//!
//! Every fallible operation returns `Result<_, BaronsError>`. Claim
//! rejections are ordinary, recoverable outcomes; `EmptyMap` means no game
//! can be played at all and the caller should end the session.

use thiserror::Error;

use crate::map::RouteId;
use crate::rules::ClaimRejection;

/// Errors raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BaronsError {
    /// The claim was refused. Nothing changed.
    #[error("cannot claim {route}: {reason}")]
    IllegalClaim {
        route: RouteId,
        reason: ClaimRejection,
    },

    /// A game cannot start on a map without routes.
    #[error("map has no routes, no game can be played")]
    EmptyMap,

    /// A turn operation was attempted before `start_game`.
    #[error("no game in progress")]
    NoGameInProgress,

    /// The map being built is inconsistent.
    #[error("invalid map: {reason}")]
    Map { reason: String },

    /// The map text could not be parsed.
    #[error("map line {line}: {reason}")]
    MapFormat { line: usize, reason: String },

    /// The game configuration is unusable.
    #[error("invalid config: {reason}")]
    Config { reason: String },
}

impl BaronsError {
    pub(crate) fn map(reason: impl Into<String>) -> Self {
        Self::Map {
            reason: reason.into(),
        }
    }

    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::MapFormat {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is a rejected claim.
    #[must_use]
    pub fn is_illegal_claim(&self) -> bool {
        matches!(self, Self::IllegalClaim { .. })
    }
}
