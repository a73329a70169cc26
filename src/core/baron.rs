//! Baron identities.
//!
//! ## Baron
//!
//! Each player plays as one railroad baron. Barons double as route owners:
//! a route is either unclaimed (`None`) or owned by exactly one `Baron`.
//!
//! The seating order of a game is configured via `GameConfig::barons`,
//! not by the order of the enum variants.

use serde::{Deserialize, Serialize};

/// A railroad baron (player identity and route claimant).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Baron {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Baron {
    /// All barons in the default seating order.
    pub const ALL: [Baron; 4] = [Baron::Red, Baron::Green, Baron::Yellow, Baron::Blue];

    /// Upper-case name used by the map text format.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Baron::Red => "RED",
            Baron::Green => "GREEN",
            Baron::Yellow => "YELLOW",
            Baron::Blue => "BLUE",
        }
    }

    /// Parse an upper-case baron name.
    ///
    /// ```
    /// use railroad_barons::core::Baron;
    ///
    /// assert_eq!(Baron::from_code("GREEN"), Some(Baron::Green));
    /// assert_eq!(Baron::from_code("UNCLAIMED"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    /// Iterate over the first `count` barons of the default seating order.
    pub fn all(count: usize) -> impl Iterator<Item = Baron> {
        Self::ALL.into_iter().take(count)
    }
}

impl std::fmt::Display for Baron {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Baron::Red => "Red",
            Baron::Green => "Green",
            Baron::Yellow => "Yellow",
            Baron::Blue => "Blue",
        };
        write!(f, "{name} Baron")
    }
}
