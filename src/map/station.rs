//! Stations.

use serde::{Deserialize, Serialize};

use super::space::Coord;

/// Station identifier, dense from 0 in map order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    /// Create a new station ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the map's station list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// A named station at a fixed grid cell. Immutable once the map is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    coord: Coord,
    name: String,
}

impl Station {
    pub(crate) fn new(id: StationId, coord: Coord, name: impl Into<String>) -> Self {
        Self {
            id,
            coord,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StationId {
        self.id
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.coord.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.coord.col
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
