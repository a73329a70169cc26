//! The railroad map: grid, stations, routes.
//!
//! Maps are assembled with `MapBuilder` (directly or through the text
//! format in `map::format`). Once built, the only mutation is route
//! ownership, which goes through `Route::claim`.

use smallvec::SmallVec;

use super::route::{Route, RouteId};
use super::space::{Coord, Space, SpaceKind};
use super::station::{Station, StationId};
use crate::core::{Baron, BaronsError};
use crate::events::{ListenerId, MapEvent, Observers};

/// A finished map.
#[derive(Debug)]
pub struct RailroadMap {
    rows: usize,
    cols: usize,
    /// Row-major cells, `rows * cols` long.
    spaces: Vec<Space>,
    stations: Vec<Station>,
    routes: Vec<Route>,
    observers: Observers<MapEvent>,
}

impl RailroadMap {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cell at (`row`, `col`), `None` off the grid.
    #[must_use]
    pub fn space(&self, row: usize, col: usize) -> Option<&Space> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.spaces.get(row * self.cols + col)
    }

    /// Get a station by ID.
    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Get a route by ID.
    #[must_use]
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index())
    }

    pub(crate) fn route_mut(&mut self, id: RouteId) -> Option<&mut Route> {
        self.routes.get_mut(id.index())
    }

    /// The route with a track cell at (`row`, `col`), if any.
    ///
    /// Station cells belong to no route.
    #[must_use]
    pub fn route_at(&self, row: usize, col: usize) -> Option<&Route> {
        let id = self.space(row, col)?.route()?;
        self.route(id)
    }

    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Length of the shortest route nobody owns yet.
    ///
    /// `None` once every route is claimed.
    #[must_use]
    pub fn shortest_unclaimed_route_length(&self) -> Option<u32> {
        self.routes
            .iter()
            .filter(|r| !r.is_claimed())
            .map(Route::length)
            .min()
    }

    #[must_use]
    pub fn all_routes_claimed(&self) -> bool {
        self.routes.iter().all(Route::is_claimed)
    }

    /// Stations used as endpoints for the spanning bonuses.
    #[must_use]
    pub fn boundary_stations(&self) -> BoundaryStations {
        BoundaryStations::from_map(self)
    }

    // === Observers ===

    /// Register a listener for route claims.
    pub fn add_observer(&mut self, listener: impl FnMut(&MapEvent) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Tell listeners that `route` now has an owner.
    pub(crate) fn route_claimed(&mut self, id: RouteId) {
        if let Some(owner) = self.route(id).and_then(Route::owner) {
            self.observers.notify(&MapEvent::RouteClaimed { route: id, owner });
        }
    }
}

/// Largest grid, in cells, a map may span.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// One past the largest coordinate, or an error if that overflows.
fn grid_extent(mut coords: impl Iterator<Item = usize>, axis: &str) -> Result<usize, BaronsError> {
    coords.try_fold(0, |extent: usize, coord| {
        coord
            .checked_add(1)
            .map(|end| extent.max(end))
            .ok_or_else(|| BaronsError::map(format!("{axis} {coord} is out of range")))
    })
}

/// Incremental map construction with validation.
///
/// ```
/// use railroad_barons::map::MapBuilder;
///
/// let mut builder = MapBuilder::new();
/// let a = builder.add_station(0, 0, "Albany");
/// let b = builder.add_station(0, 3, "Boston");
/// builder.add_route(a, b);
///
/// let map = builder.build().unwrap();
/// assert_eq!(map.routes()[0].length(), 2);
/// assert_eq!((map.rows(), map.cols()), (1, 4));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MapBuilder {
    stations: Vec<Station>,
    routes: Vec<(StationId, StationId, Option<Baron>)>,
}

impl MapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station. IDs are handed out in insertion order.
    pub fn add_station(&mut self, row: usize, col: usize, name: impl Into<String>) -> StationId {
        let id = StationId::new(self.stations.len() as u32);
        self.stations.push(Station::new(id, Coord::new(row, col), name));
        id
    }

    /// Add an unclaimed route between two stations.
    pub fn add_route(&mut self, origin: StationId, destination: StationId) -> RouteId {
        self.add_owned_route(origin, destination, None)
    }

    /// Add a route that may already have an owner.
    pub fn add_owned_route(
        &mut self,
        origin: StationId,
        destination: StationId,
        owner: Option<Baron>,
    ) -> RouteId {
        let id = RouteId::new(self.routes.len() as u32);
        self.routes.push((origin, destination, owner));
        id
    }

    /// Lay out the grid and validate every station and route.
    pub fn build(self) -> Result<RailroadMap, BaronsError> {
        let rows = grid_extent(self.stations.iter().map(Station::row), "row")?;
        let cols = grid_extent(self.stations.iter().map(Station::col), "column")?;
        let area = rows
            .checked_mul(cols)
            .filter(|&area| area <= MAX_GRID_CELLS)
            .ok_or_else(|| {
                BaronsError::map(format!("{rows}x{cols} grid exceeds {MAX_GRID_CELLS} cells"))
            })?;

        let mut spaces: Vec<Space> = (0..area)
            .map(|i| Space::plain(Coord::new(i / cols.max(1), i % cols.max(1))))
            .collect();

        for station in &self.stations {
            let cell = &mut spaces[station.row() * cols + station.col()];
            if let SpaceKind::Station(other) = cell.kind {
                return Err(BaronsError::map(format!(
                    "{} and {} both sit at {}",
                    other,
                    station.id(),
                    station.coord()
                )));
            }
            cell.kind = SpaceKind::Station(station.id());
        }

        let mut routes = Vec::with_capacity(self.routes.len());
        for (i, &(origin, destination, owner)) in self.routes.iter().enumerate() {
            let id = RouteId::new(i as u32);
            let lookup = |s: StationId| {
                self.stations
                    .get(s.index())
                    .ok_or_else(|| BaronsError::map(format!("{id} references unknown {s}")))
            };
            let route = Route::between(id, lookup(origin)?, lookup(destination)?, owner)?;

            for &coord in route.tracks() {
                let cell = &mut spaces[coord.row * cols + coord.col];
                match cell.kind {
                    SpaceKind::Plain => cell.kind = SpaceKind::Track(id),
                    SpaceKind::Station(s) => {
                        return Err(BaronsError::map(format!("{id} runs through {s} at {coord}")))
                    }
                    SpaceKind::Track(r) => {
                        return Err(BaronsError::map(format!("{id} crosses {r} at {coord}")))
                    }
                }
            }
            routes.push(route);
        }

        Ok(RailroadMap {
            rows,
            cols,
            spaces,
            stations: self.stations,
            routes,
            observers: Observers::new(),
        })
    }
}

/// Stations on the outermost occupied column or row in each direction.
///
/// Only route endpoints count. Each set is the first non-empty column/row
/// found scanning inward from that edge of the grid, which need not be the
/// grid's literal edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryStations {
    pub west: SmallVec<[StationId; 4]>,
    pub east: SmallVec<[StationId; 4]>,
    pub north: SmallVec<[StationId; 4]>,
    pub south: SmallVec<[StationId; 4]>,
}

impl BoundaryStations {
    /// Scan the map for its boundary stations.
    #[must_use]
    pub fn from_map(map: &RailroadMap) -> Self {
        let mut endpoints: Vec<&Station> = Vec::new();
        for route in map.routes() {
            for id in [route.origin(), route.destination()] {
                if let Some(station) = map.station(id) {
                    if !endpoints.iter().any(|s| s.id() == id) {
                        endpoints.push(station);
                    }
                }
            }
        }

        Self {
            west: first_occupied(&endpoints, 0..map.cols(), Station::col),
            east: first_occupied(&endpoints, (0..map.cols()).rev(), Station::col),
            north: first_occupied(&endpoints, 0..map.rows(), Station::row),
            south: first_occupied(&endpoints, (0..map.rows()).rev(), Station::row),
        }
    }

    /// Check if no route exists to define a boundary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.west.is_empty()
    }
}

fn first_occupied(
    endpoints: &[&Station],
    lines: impl Iterator<Item = usize>,
    line_of: impl Fn(&Station) -> usize,
) -> SmallVec<[StationId; 4]> {
    for line in lines {
        let found: SmallVec<[StationId; 4]> = endpoints
            .iter()
            .filter(|s| line_of(**s) == line)
            .map(|s| s.id())
            .collect();
        if !found.is_empty() {
            return found;
        }
    }
    SmallVec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Three stations in an L: A(1,1) - B(1,4) - C(5,4), plus a loose
    /// station D at (0,0) that no route touches.
    fn l_map() -> RailroadMap {
        let mut builder = MapBuilder::new();
        let a = builder.add_station(1, 1, "A");
        let b = builder.add_station(1, 4, "B");
        let c = builder.add_station(5, 4, "C");
        builder.add_station(0, 0, "D");
        builder.add_route(a, b);
        builder.add_route(b, c);
        builder.build().unwrap()
    }

    #[test]
    fn test_dimensions_from_stations() {
        let map = l_map();
        assert_eq!(map.rows(), 6);
        assert_eq!(map.cols(), 5);
        assert_eq!(map.stations().len(), 4);
    }

    #[test]
    fn test_space_lookup() {
        let map = l_map();

        assert_eq!(map.space(1, 1).unwrap().station(), Some(StationId::new(0)));
        assert_eq!(map.space(1, 2).unwrap().route(), Some(RouteId::new(0)));
        assert_eq!(map.space(3, 4).unwrap().route(), Some(RouteId::new(1)));
        assert_eq!(map.space(2, 2).unwrap().kind, SpaceKind::Plain);
        assert!(map.space(6, 0).is_none());
        assert!(map.space(0, 5).is_none());
    }

    #[test]
    fn test_route_at() {
        let map = l_map();

        assert_eq!(map.route_at(1, 3).map(Route::id), Some(RouteId::new(0)));
        assert_eq!(map.route_at(4, 4).map(Route::id), Some(RouteId::new(1)));
        // Station cells and plain cells have no route.
        assert!(map.route_at(1, 4).is_none());
        assert!(map.route_at(0, 2).is_none());
        assert!(map.route_at(40, 40).is_none());
    }

    #[test]
    fn test_shortest_unclaimed_route_length() {
        let mut map = l_map();
        assert_eq!(map.shortest_unclaimed_route_length(), Some(2));

        map.route_mut(RouteId::new(0)).unwrap().claim(Baron::Red).unwrap();
        assert_eq!(map.shortest_unclaimed_route_length(), Some(3));
        assert!(!map.all_routes_claimed());

        map.route_mut(RouteId::new(1)).unwrap().claim(Baron::Blue).unwrap();
        assert_eq!(map.shortest_unclaimed_route_length(), None);
        assert!(map.all_routes_claimed());
    }

    #[test]
    fn test_boundary_stations_scan_inward() {
        let map = l_map();
        let boundary = map.boundary_stations();

        // D sits on the literal edge but is no route endpoint.
        assert_eq!(boundary.west.as_slice(), &[StationId::new(0)]);
        assert_eq!(boundary.east.as_slice(), &[StationId::new(1), StationId::new(2)]);
        assert_eq!(boundary.north.as_slice(), &[StationId::new(0), StationId::new(1)]);
        assert_eq!(boundary.south.as_slice(), &[StationId::new(2)]);
    }

    #[test]
    fn test_boundary_stations_without_routes() {
        let mut builder = MapBuilder::new();
        builder.add_station(0, 0, "Lonely");
        let map = builder.build().unwrap();

        assert!(map.boundary_stations().is_empty());
    }

    #[test]
    fn test_build_rejects_overlaps() {
        let mut builder = MapBuilder::new();
        builder.add_station(0, 0, "A");
        builder.add_station(0, 0, "B");
        assert!(matches!(builder.build(), Err(BaronsError::Map { .. })));

        let mut builder = MapBuilder::new();
        let a = builder.add_station(0, 0, "A");
        let b = builder.add_station(0, 4, "B");
        builder.add_station(0, 2, "Middle");
        builder.add_route(a, b);
        assert!(matches!(builder.build(), Err(BaronsError::Map { .. })));

        let mut builder = MapBuilder::new();
        let a = builder.add_station(2, 0, "A");
        let b = builder.add_station(2, 4, "B");
        let c = builder.add_station(0, 2, "C");
        let d = builder.add_station(4, 2, "D");
        builder.add_route(a, b);
        builder.add_route(c, d);
        let err = builder.build().unwrap_err();
        assert_eq!(err.to_string(), "invalid map: Route(1) crosses Route(0) at (2, 2)");
    }

    #[test]
    fn test_build_rejects_unknown_station() {
        let mut builder = MapBuilder::new();
        let a = builder.add_station(0, 0, "A");
        builder.add_route(a, StationId::new(9));
        assert!(matches!(builder.build(), Err(BaronsError::Map { .. })));
    }

    #[test]
    fn test_route_claimed_notifies_observers() {
        let mut map = l_map();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        map.add_observer(move |event| sink.borrow_mut().push(event.clone()));

        // Unclaimed routes produce no notification.
        map.route_claimed(RouteId::new(1));
        assert!(seen.borrow().is_empty());

        map.route_mut(RouteId::new(1)).unwrap().claim(Baron::Yellow).unwrap();
        map.route_claimed(RouteId::new(1));
        assert_eq!(
            seen.borrow().as_slice(),
            &[MapEvent::RouteClaimed {
                route: RouteId::new(1),
                owner: Baron::Yellow
            }]
        );
    }
}
