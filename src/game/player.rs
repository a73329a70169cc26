//! Per-player state.
//!
//! A `Player` owns its hand, pieces, score, claimed routes and the graph
//! those routes form. It applies claims decided by `rules` and awards the
//! spanning bonuses:
//!
//! - **West–east**: any westmost and eastmost boundary station joined by a
//!   path of at least two routes, worth `bonus_per_cell × cols`.
//! - **North–south**: likewise for the northmost/southmost stations, worth
//!   `bonus_per_cell × rows`.
//!
//! Each bonus is awarded at most once per game.

use im::Vector;
use log::{debug, info, warn};

use crate::core::{Baron, BaronsError, Card, DealtPair, GameConfig, Hand};
use crate::events::{ListenerId, Observers, PlayerEvent, PlayerSnapshot};
use crate::graph::RouteGraph;
use crate::map::{BoundaryStations, RailroadMap, Route, RouteId, StationId};
use crate::rules::{self, ClaimRejection};

/// Minimum number of routes a bonus path must span.
const BONUS_MIN_PATH: u32 = 2;

/// What a successful claim changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub route: RouteId,
    pub spend: rules::CardSpend,
    /// Points from the route itself.
    pub route_points: u32,
    /// Spanning bonus points awarded by this claim.
    pub bonus_points: u32,
}

impl ClaimReceipt {
    /// Total score gained.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.route_points + self.bonus_points
    }
}

/// One seat at the table.
#[derive(Debug)]
pub struct Player {
    baron: Baron,
    starting_pieces: u32,
    bonus_per_cell: u32,

    hand: Hand,
    pieces: u32,
    score: u32,
    claimed_routes: Vector<RouteId>,
    graph: RouteGraph,
    last_dealt: DealtPair,
    claimed_this_turn: bool,
    west_east_bonus: bool,
    north_south_bonus: bool,

    boundary: BoundaryStations,
    map_rows: u32,
    map_cols: u32,

    observers: Observers<PlayerEvent>,
}

impl Player {
    /// Create a player with no cards and no map.
    ///
    /// Only the turn engine deals, starts turns and claims:
    ///
    /// ```compile_fail
    /// use railroad_barons::core::{Baron, DealtPair, GameConfig};
    /// use railroad_barons::game::Player;
    ///
    /// let mut player = Player::new(Baron::Red, &GameConfig::default());
    /// player.start_turn(DealtPair::default());
    /// ```
    #[must_use]
    pub fn new(baron: Baron, config: &GameConfig) -> Self {
        Self {
            baron,
            starting_pieces: config.starting_pieces,
            bonus_per_cell: config.bonus_per_cell,
            hand: Hand::new(),
            pieces: config.starting_pieces,
            score: 0,
            claimed_routes: Vector::new(),
            graph: RouteGraph::new(),
            last_dealt: DealtPair::default(),
            claimed_this_turn: true,
            west_east_bonus: false,
            north_south_bonus: false,
            boundary: BoundaryStations::default(),
            map_rows: 0,
            map_cols: 0,
            observers: Observers::new(),
        }
    }

    /// Return to the starting state for a new game on `map`.
    ///
    /// Observers stay registered. The player cannot claim until its first
    /// `start_turn`.
    pub(crate) fn reset(&mut self, map: &RailroadMap, dealt: impl IntoIterator<Item = Card>) {
        self.hand = dealt.into_iter().collect();
        self.pieces = self.starting_pieces;
        self.score = 0;
        self.claimed_routes = Vector::new();
        self.graph.clear();
        self.last_dealt = DealtPair::default();
        self.claimed_this_turn = true;
        self.west_east_bonus = false;
        self.north_south_bonus = false;
        self.boundary = map.boundary_stations();
        self.map_rows = map.rows() as u32;
        self.map_cols = map.cols() as u32;
        self.notify_changed();
    }

    /// Begin this player's turn with a freshly dealt pair.
    pub(crate) fn start_turn(&mut self, dealt: DealtPair) {
        self.hand.extend(dealt.cards());
        self.last_dealt = dealt;
        self.claimed_this_turn = false;
        debug!("{} starts turn with {:?}", self.baron, dealt);
        self.notify_changed();
    }

    // === Queries ===

    #[must_use]
    pub fn baron(&self) -> Baron {
        self.baron
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Number of cards of one kind in hand.
    #[must_use]
    pub fn count_cards_in_hand(&self, card: Card) -> u32 {
        self.hand.count(card)
    }

    #[must_use]
    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Routes claimed this game, in claim order.
    #[must_use]
    pub fn claimed_routes(&self) -> &Vector<RouteId> {
        &self.claimed_routes
    }

    /// The pair dealt at the start of the latest turn.
    #[must_use]
    pub fn last_dealt(&self) -> DealtPair {
        self.last_dealt
    }

    #[must_use]
    pub fn has_claimed_this_turn(&self) -> bool {
        self.claimed_this_turn
    }

    #[must_use]
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    #[must_use]
    pub fn has_west_east_bonus(&self) -> bool {
        self.west_east_bonus
    }

    #[must_use]
    pub fn has_north_south_bonus(&self) -> bool {
        self.north_south_bonus
    }

    /// Check if a route of `required_length` could still be claimed.
    #[must_use]
    pub fn can_continue_playing(&self, required_length: u32) -> bool {
        rules::can_continue_playing(&self.hand, self.pieces, required_length)
    }

    /// Check if `route` may be claimed right now.
    #[must_use]
    pub fn can_claim_route(&self, route: &Route) -> bool {
        rules::can_claim(&self.hand, self.pieces, self.claimed_this_turn, route)
    }

    /// Copy of the current state for observers.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            baron: self.baron,
            hand: self.hand.clone(),
            pieces: self.pieces,
            score: self.score,
            claimed_routes: self.claimed_routes.clone(),
            last_dealt: self.last_dealt,
            west_east_bonus: self.west_east_bonus,
            north_south_bonus: self.north_south_bonus,
        }
    }

    // === Claiming ===

    /// Claim `route` for this player's baron.
    ///
    /// Every check happens before anything changes: on error neither the
    /// player nor the route is modified.
    pub(crate) fn claim_route(&mut self, route: &mut Route) -> Result<ClaimReceipt, BaronsError> {
        let id = route.id();
        let reject = |reason| BaronsError::IllegalClaim { route: id, reason };

        rules::check_claim(&self.hand, self.pieces, self.claimed_this_turn, route).map_err(reject)?;

        let length = route.length();
        let Some(spend) = rules::select_cards_to_spend(&self.hand, length) else {
            warn!("{} passed claim checks for {id} but no payment exists", self.baron);
            return Err(reject(ClaimRejection::InsufficientCards {
                required: length,
                available: rules::max_payable_length(&self.hand),
            }));
        };

        route.claim(self.baron).map_err(reject)?;

        let paid = spend.take_from(&mut self.hand);
        debug_assert!(paid, "selected cards must be in hand");
        self.pieces -= length;
        let route_points = route.point_value();
        self.score += route_points;
        self.claimed_routes.push_back(id);
        self.graph.add_route(route);
        self.claimed_this_turn = true;

        debug!(
            "{} claimed {id} (length {length}) paying {:?}, {} pieces left",
            self.baron,
            spend.cards(),
            self.pieces
        );

        let bonus_points = self.award_bonuses();

        self.notify_changed();

        Ok(ClaimReceipt {
            route: id,
            spend,
            route_points,
            bonus_points,
        })
    }

    fn award_bonuses(&mut self) -> u32 {
        let mut awarded = 0;

        if !self.west_east_bonus && self.spans(&self.boundary.west, &self.boundary.east) {
            let bonus = self.bonus_per_cell * self.map_cols;
            self.west_east_bonus = true;
            self.score += bonus;
            awarded += bonus;
            info!("{} connected west to east for {bonus} points", self.baron);
        }

        if !self.north_south_bonus && self.spans(&self.boundary.north, &self.boundary.south) {
            let bonus = self.bonus_per_cell * self.map_rows;
            self.north_south_bonus = true;
            self.score += bonus;
            awarded += bonus;
            info!("{} connected north to south for {bonus} points", self.baron);
        }

        awarded
    }

    /// Check if any pair of stations from the two sides is joined by a
    /// path of at least `BONUS_MIN_PATH` claimed routes.
    fn spans(&self, side_a: &[StationId], side_b: &[StationId]) -> bool {
        side_a
            .iter()
            .filter(|&&a| self.graph.contains_station(a))
            .any(|&a| {
                side_b
                    .iter()
                    .filter(|&&b| self.graph.contains_station(b))
                    .any(|&b| {
                        self.graph
                            .shortest_path_length(a, b)
                            .is_some_and(|len| len >= BONUS_MIN_PATH)
                    })
            })
    }

    // === Observers ===

    fn notify_changed(&mut self) {
        if !self.observers.is_empty() {
            let snapshot = self.snapshot();
            self.observers.notify(&PlayerEvent::Changed(snapshot));
        }
    }

    /// Register a listener for changes to this player.
    pub fn add_observer(&mut self, listener: impl FnMut(&PlayerEvent) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.baron)
    }
}
