//! The railroad map.
//!
//! ## Key Types
//!
//! - `Space`/`Coord`: grid cells, tagged as plain, station or track
//! - `Station`: named endpoint at a fixed cell
//! - `Route`: claimable run of track between two stations
//! - `RailroadMap`: the finished grid, built by `MapBuilder`
//! - `BoundaryStations`: endpoints for the spanning bonuses
//!
//! `format` reads and writes the plain-text map layout.

pub mod format;
pub mod railroad;
pub mod route;
pub mod space;
pub mod station;

pub use format::{parse_map, write_map};
pub use railroad::{BoundaryStations, MapBuilder, RailroadMap, MAX_GRID_CELLS};
pub use route::{point_value, Orientation, Route, RouteId};
pub use space::{Coord, Space, SpaceKind};
pub use station::{Station, StationId};
