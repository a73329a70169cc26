//! Map cells.
//!
//! Every cell of the grid is a `Space`: a coordinate plus what occupies it.
//! Stations and track segments are the only occupants; everything else is
//! plain ground.

use serde::{Deserialize, Serialize};

use super::route::RouteId;
use super::station::StationId;

/// A grid coordinate. Rows grow southward, columns eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Plain,
    Station(StationId),
    /// A track segment belonging to the given route.
    Track(RouteId),
}

/// One cell of the map grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub coord: Coord,
    pub kind: SpaceKind,
}

impl Space {
    #[must_use]
    pub const fn plain(coord: Coord) -> Self {
        Self {
            coord,
            kind: SpaceKind::Plain,
        }
    }

    /// Check if two spaces occupy the same cell.
    #[must_use]
    pub fn collocated(&self, other: &Space) -> bool {
        self.coord == other.coord
    }

    /// The route whose track runs through this cell, if any.
    #[must_use]
    pub fn route(&self) -> Option<RouteId> {
        match self.kind {
            SpaceKind::Track(route) => Some(route),
            _ => None,
        }
    }

    /// The station at this cell, if any.
    #[must_use]
    pub fn station(&self) -> Option<StationId> {
        match self.kind {
            SpaceKind::Station(station) => Some(station),
            _ => None,
        }
    }
}
