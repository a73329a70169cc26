//! The turn engine.
//!
//! `RailroadBarons` seats the players, deals cards, routes claims to the
//! current player and decides when the game is over. There is a single
//! state between `start_game` and game over: the current player may claim
//! at most one route, then the caller ends the turn explicitly.
//!
//! ## Usage
//!
//! ```
//! use railroad_barons::core::{Card, GameConfig};
//! use railroad_barons::game::{RailroadBarons, StackedDeck};
//! use railroad_barons::map::MapBuilder;
//!
//! let mut builder = MapBuilder::new();
//! let a = builder.add_station(0, 0, "Albany");
//! let b = builder.add_station(0, 3, "Boston");
//! builder.add_route(a, b);
//! let map = builder.build().unwrap();
//!
//! let mut game = RailroadBarons::new(GameConfig::default()).unwrap();
//! game.start_game(map, StackedDeck::new([Card::Red; 20])).unwrap();
//!
//! let receipt = game.claim_route_at(0, 1).unwrap().unwrap();
//! assert_eq!(receipt.route_points, 2);
//! assert!(game.game_is_over());
//! ```

use log::{debug, info};

use crate::core::{Baron, BaronsError, Card, DealtPair, GameConfig};
use crate::events::{GameEvent, GameOutcome, ListenerId, Observers, PlayerEvent};
use crate::map::{RailroadMap, Route};

use super::deck::{Deck, StandardDeck};
use super::player::{ClaimReceipt, Player};

/// Everything that exists only while a game is being played.
#[derive(Debug)]
struct Session<D> {
    map: RailroadMap,
    deck: D,
    /// Index into `players` of the player taking the turn.
    current: usize,
    /// 1-based, counts every started turn.
    turn_number: u32,
    outcome: Option<GameOutcome>,
}

/// A table of players and, once started, the game they are playing.
#[derive(Debug)]
pub struct RailroadBarons<D: Deck> {
    config: GameConfig,
    players: Vec<Player>,
    session: Option<Session<D>>,
    observers: Observers<GameEvent>,
}

impl<D: Deck> RailroadBarons<D> {
    /// Seat one player per baron in `config`.
    pub fn new(config: GameConfig) -> Result<Self, BaronsError> {
        config.validate()?;
        let players = config
            .barons
            .iter()
            .map(|&baron| Player::new(baron, &config))
            .collect();
        Ok(Self {
            config,
            players,
            session: None,
            observers: Observers::new(),
        })
    }

    /// Start a new game on `map`, dealing from `deck`.
    ///
    /// Fails with `EmptyMap` if the map has no routes; no game is in
    /// progress afterwards. Starting again abandons any game in progress.
    pub fn start_game(&mut self, map: RailroadMap, mut deck: D) -> Result<(), BaronsError> {
        self.session = None;
        if map.routes().is_empty() {
            return Err(BaronsError::EmptyMap);
        }

        for player in &mut self.players {
            let dealt: Vec<Card> = (0..self.config.opening_hand_size)
                .filter_map(|_| deck.draw())
                .collect();
            debug!("{player} dealt {dealt:?}");
            player.reset(&map, dealt);
        }

        info!(
            "starting game for {} players on a {}x{} map with {} routes",
            self.players.len(),
            map.rows(),
            map.cols(),
            map.routes().len()
        );

        self.session = Some(Session {
            map,
            deck,
            current: 0,
            turn_number: 0,
            outcome: None,
        });
        self.begin_turn()
    }

    fn begin_turn(&mut self) -> Result<(), BaronsError> {
        let session = self.session.as_mut().ok_or(BaronsError::NoGameInProgress)?;
        let dealt = DealtPair::new(session.deck.draw(), session.deck.draw());
        session.turn_number += 1;

        let player = &mut self.players[session.current];
        player.start_turn(dealt);

        self.observers.notify(&GameEvent::TurnStarted {
            baron: player.baron(),
            turn: session.turn_number,
        });
        Ok(())
    }

    // === Turn actions ===

    /// Check if the current player may claim the route covering a cell.
    ///
    /// False when no game is in progress or no route covers the cell.
    #[must_use]
    pub fn can_current_player_claim_route(&self, row: usize, col: usize) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        session
            .map
            .route_at(row, col)
            .is_some_and(|route| self.players[session.current].can_claim_route(route))
    }

    /// Claim the route covering (`row`, `col`) for the current player.
    ///
    /// Returns `Ok(None)` when no route covers the cell, and
    /// `IllegalClaim` (with nothing changed) when the claim is refused.
    pub fn claim_route_at(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<Option<ClaimReceipt>, BaronsError> {
        let session = self.session.as_mut().ok_or(BaronsError::NoGameInProgress)?;
        let Some(id) = session.map.route_at(row, col).map(Route::id) else {
            return Ok(None);
        };
        let Some(route) = session.map.route_mut(id) else {
            return Ok(None);
        };

        let receipt = self.players[session.current].claim_route(route)?;
        session.map.route_claimed(id);
        Ok(Some(receipt))
    }

    /// End the current turn and, unless the game is over, start the next
    /// player's.
    pub fn end_turn(&mut self) -> Result<(), BaronsError> {
        let session = self.session.as_ref().ok_or(BaronsError::NoGameInProgress)?;
        self.observers.notify(&GameEvent::TurnEnded {
            baron: self.players[session.current].baron(),
            turn: session.turn_number,
        });

        if self.game_is_over() {
            return Ok(());
        }

        let count = self.players.len();
        let session = self.session.as_mut().ok_or(BaronsError::NoGameInProgress)?;
        session.current = (session.current + 1) % count;
        debug!("turn passes to {}", self.players[session.current]);
        self.begin_turn()
    }

    /// Check if no more plays can be made.
    ///
    /// The game is over when nobody can pay for the shortest unclaimed
    /// route and either the deck is exhausted or every route is claimed.
    /// The first time this is true the outcome is recorded and observers
    /// are told; later calls just return true.
    pub fn game_is_over(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.outcome.is_some() {
            return true;
        }

        let anyone_can_play = session
            .map
            .shortest_unclaimed_route_length()
            .is_some_and(|len| self.players.iter().any(|p| p.can_continue_playing(len)));
        if anyone_can_play || !(session.deck.is_exhausted() || session.map.all_routes_claimed()) {
            return false;
        }

        let outcome =
            GameOutcome::from_scores(self.players.iter().map(|p| (p.baron(), p.score())).collect());
        match outcome.winner {
            Some(winner) => info!("game over after {} turns, {winner} wins", session.turn_number),
            None => info!("game over after {} turns, nobody scored", session.turn_number),
        }
        session.outcome = Some(outcome.clone());
        self.observers.notify(&GameEvent::GameOver(outcome));
        true
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All players in seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player seated as `baron`.
    #[must_use]
    pub fn player(&self, baron: Baron) -> Option<&Player> {
        self.players.iter().find(|p| p.baron() == baron)
    }


    /// The player taking the turn, `None` before the first game.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        let session = self.session.as_ref()?;
        self.players.get(session.current)
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.session.is_some()
    }

    /// The map being played on.
    #[must_use]
    pub fn map(&self) -> Option<&RailroadMap> {
        self.session.as_ref().map(|s| &s.map)
    }

    /// Mutable access for map observer registration.
    pub fn map_mut(&mut self) -> Option<&mut RailroadMap> {
        self.session.as_mut().map(|s| &mut s.map)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.deck.remaining())
    }

    /// Turns started so far this game, 0 when no game is in progress.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.turn_number)
    }

    /// The final result, once `game_is_over` has returned true.
    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.session.as_ref()?.outcome.as_ref()
    }

    // === Observers ===

    /// Register a listener for turn and game-over events.
    pub fn add_observer(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.observers.subscribe(listener)
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_observer(&mut self, id: ListenerId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Register a listener for changes to the player seated as `baron`.
    ///
    /// `None` if no such player is seated.
    pub fn add_player_observer(
        &mut self,
        baron: Baron,
        listener: impl FnMut(&PlayerEvent) + 'static,
    ) -> Option<ListenerId> {
        let player = self.players.iter_mut().find(|p| p.baron() == baron)?;
        Some(player.add_observer(listener))
    }

    /// Unregister a player listener. Returns false if it was not registered.
    pub fn remove_player_observer(&mut self, baron: Baron, id: ListenerId) -> bool {
        self.players
            .iter_mut()
            .find(|p| p.baron() == baron)
            .is_some_and(|p| p.remove_observer(id))
    }
}

impl RailroadBarons<StandardDeck> {
    /// Start a game with a fresh standard deck seeded by `seed`.
    pub fn start_standard_game(&mut self, map: RailroadMap, seed: u64) -> Result<(), BaronsError> {
        let deck = StandardDeck::with_cards_per_kind(self.config.cards_per_kind, seed);
        self.start_game(map, deck)
    }
}
