//! Routes: claimable runs of track between two stations.
//!
//! A route's length is its number of track cells, not counting the two
//! stations. Ownership moves from unclaimed to one baron exactly once.

use serde::{Deserialize, Serialize};

use super::space::Coord;
use super::station::{Station, StationId};
use crate::core::{Baron, BaronsError};
use crate::rules::ClaimRejection;

/// Route identifier, dense from 0 in map order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteId(pub u32);

impl RouteId {
    /// Create a new route ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the map's route list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route({})", self.0)
    }
}

/// Direction a route runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Points scored for claiming a route of the given length.
///
/// 1, 2, 4, 7, 10, 15 for lengths 1 through 6, then 5 more per extra cell.
///
/// ```
/// use railroad_barons::map::point_value;
///
/// assert_eq!(point_value(3), 4);
/// assert_eq!(point_value(8), 25);
/// ```
#[must_use]
pub const fn point_value(length: u32) -> u32 {
    match length {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 4,
        4 => 7,
        5 => 10,
        6 => 15,
        n => 5 * (n - 3),
    }
}

/// A route between two aligned stations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    id: RouteId,
    origin: StationId,
    destination: StationId,
    orientation: Orientation,
    /// Track cells from the origin side to the destination side.
    tracks: Vec<Coord>,
    owner: Option<Baron>,
}

impl Route {
    /// Lay track between two stations sharing a row or a column.
    pub(crate) fn between(
        id: RouteId,
        origin: &Station,
        destination: &Station,
        owner: Option<Baron>,
    ) -> Result<Self, BaronsError> {
        let (from, to) = (origin.coord(), destination.coord());

        let (orientation, mut tracks): (Orientation, Vec<Coord>) = if from.row == to.row {
            let cols = between_exclusive(from.col, to.col);
            (Orientation::Horizontal, cols.map(|col| Coord::new(from.row, col)).collect())
        } else if from.col == to.col {
            let rows = between_exclusive(from.row, to.row);
            (Orientation::Vertical, rows.map(|row| Coord::new(row, from.col)).collect())
        } else {
            return Err(BaronsError::map(format!(
                "stations {} at {from} and {} at {to} share neither a row nor a column",
                origin.id(),
                destination.id()
            )));
        };

        if from > to {
            tracks.reverse();
        }

        if tracks.is_empty() {
            return Err(BaronsError::map(format!(
                "no track cells between {} at {from} and {} at {to}",
                origin.id(),
                destination.id()
            )));
        }

        Ok(Self {
            id,
            origin: origin.id(),
            destination: destination.id(),
            orientation,
            tracks,
            owner,
        })
    }

    #[must_use]
    pub fn id(&self) -> RouteId {
        self.id
    }

    #[must_use]
    pub fn origin(&self) -> StationId {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> StationId {
        self.destination
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Track cells, listed from the origin toward the destination.
    #[must_use]
    pub fn tracks(&self) -> &[Coord] {
        &self.tracks
    }

    /// Number of track cells.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.tracks.len() as u32
    }

    /// Points awarded for claiming this route.
    #[must_use]
    pub fn point_value(&self) -> u32 {
        point_value(self.length())
    }

    /// Current owner, `None` while unclaimed.
    #[must_use]
    pub fn owner(&self) -> Option<Baron> {
        self.owner
    }

    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.owner.is_some()
    }

    /// Check if a track cell of this route lies at `coord`.
    #[must_use]
    pub fn includes(&self, coord: Coord) -> bool {
        self.tracks.contains(&coord)
    }

    /// Hand the route to `claimant`. Succeeds only once per route.
    pub fn claim(&mut self, claimant: Baron) -> Result<(), ClaimRejection> {
        match self.owner {
            Some(owner) => Err(ClaimRejection::AlreadyOwned(owner)),
            None => {
                self.owner = Some(claimant);
                Ok(())
            }
        }
    }
}

fn between_exclusive(a: usize, b: usize) -> std::ops::Range<usize> {
    a.min(b) + 1..a.max(b)
}
