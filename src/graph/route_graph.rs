//! Arena-based graph of one player's claimed routes.
//!
//! Stations are stored in a flat `Vec` and referenced by dense node
//! indices; adjacency lists hold neighbor indices. Every route contributes
//! exactly one undirected edge of weight 1, whatever its track length.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::map::{Route, StationId};

/// Undirected graph over the stations a player has connected.
#[derive(Clone, Debug, Default)]
pub struct RouteGraph {
    /// Station -> node index.
    index: FxHashMap<StationId, usize>,

    /// Node index -> station.
    stations: Vec<StationId>,

    /// Node index -> neighbor node indices (one entry per edge).
    adjacency: Vec<SmallVec<[usize; 4]>>,

    edge_count: usize,
}

impl RouteGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a claimed route as an edge between its endpoints.
    pub fn add_route(&mut self, route: &Route) {
        self.add_edge(route.origin(), route.destination());
    }

    /// Add an undirected edge, inserting either station if absent.
    pub fn add_edge(&mut self, a: StationId, b: StationId) {
        let a = self.node(a);
        let b = self.node(b);
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        self.edge_count += 1;
    }

    fn node(&mut self, station: StationId) -> usize {
        if let Some(&i) = self.index.get(&station) {
            return i;
        }
        let i = self.stations.len();
        self.index.insert(station, i);
        self.stations.push(station);
        self.adjacency.push(SmallVec::new());
        i
    }

    /// Check if a station is an endpoint of any edge.
    #[must_use]
    pub fn contains_station(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    /// Number of stations in the graph.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of edges (claimed routes).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations directly connected to `station`.
    pub fn neighbors(&self, station: StationId) -> impl Iterator<Item = StationId> + '_ {
        self.index
            .get(&station)
            .into_iter()
            .flat_map(move |&i| self.adjacency[i].iter().map(move |&j| self.stations[j]))
    }

    /// Fewest routes needed to travel from `start` to `finish`.
    ///
    /// Dijkstra over unit weights. Returns `None` when either station is
    /// missing or no chain of claimed routes connects them.
    ///
    /// ```
    /// use railroad_barons::graph::RouteGraph;
    /// use railroad_barons::map::StationId;
    ///
    /// let (a, b, c) = (StationId::new(0), StationId::new(1), StationId::new(2));
    /// let mut graph = RouteGraph::new();
    /// graph.add_edge(a, b);
    /// graph.add_edge(b, c);
    ///
    /// assert_eq!(graph.shortest_path_length(a, c), Some(2));
    /// assert_eq!(graph.shortest_path_length(c, c), Some(0));
    /// assert_eq!(graph.shortest_path_length(a, StationId::new(9)), None);
    /// ```
    #[must_use]
    pub fn shortest_path_length(&self, start: StationId, finish: StationId) -> Option<u32> {
        let &source = self.index.get(&start)?;
        let &target = self.index.get(&finish)?;

        let mut distance = vec![u32::MAX; self.stations.len()];
        let mut visited = vec![false; self.stations.len()];
        let mut queue = BinaryHeap::new();

        distance[source] = 0;
        queue.push(Reverse((0u32, source)));

        // Only reachable nodes ever enter the queue, so the search stops
        // as soon as the reachable component is exhausted.
        while let Some(Reverse((dist, u))) = queue.pop() {
            if visited[u] {
                continue;
            }
            if u == target {
                return Some(dist);
            }
            visited[u] = true;

            for &v in &self.adjacency[u] {
                let via_u = dist + 1;
                if via_u < distance[v] {
                    distance[v] = via_u;
                    queue.push(Reverse((via_u, v)));
                }
            }
        }

        None
    }

    /// Remove every station and edge.
    pub fn clear(&mut self) {
        self.index.clear();
        self.stations.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }
}
