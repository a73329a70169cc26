//! Turn protocol tests.
//!
//! Full games driven through `RailroadBarons` with scripted decks, checking
//! dealing, claiming, rotation, bonuses and game over.

use std::cell::RefCell;
use std::rc::Rc;

use railroad_barons::core::{Baron, BaronsError, Card, DealtPair, GameConfig};
use railroad_barons::events::{GameEvent, MapEvent, PlayerEvent};
use railroad_barons::game::{Deck, RailroadBarons, StackedDeck, StandardDeck};
use railroad_barons::map::{MapBuilder, RailroadMap, RouteId};
use railroad_barons::rules::ClaimRejection;

/// A(0,0) --2-- B(0,3) --3-- C(4,3)
fn two_route_map() -> RailroadMap {
    let mut builder = MapBuilder::new();
    let a = builder.add_station(0, 0, "A");
    let b = builder.add_station(0, 3, "B");
    let c = builder.add_station(4, 3, "C");
    builder.add_route(a, b);
    builder.add_route(b, c);
    builder.build().unwrap()
}

/// Four players; only the Red Baron holds blue cards.
fn scripted_deck() -> StackedDeck {
    StackedDeck::new([
        // Opening hands
        Card::Blue, Card::Blue, Card::Blue, Card::Blue,
        Card::Red, Card::Red, Card::Green, Card::Green,
        Card::Yellow, Card::Yellow, Card::Pink, Card::Pink,
        Card::Black, Card::Black, Card::White, Card::White,
        // Red's first pair
        Card::Blue, Card::Orange,
        // Green, Yellow and Blue pairs
        Card::Red, Card::Orange,
        Card::Yellow, Card::Orange,
        Card::Black, Card::Orange,
        // Red's second pair
        Card::Green, Card::Pink,
    ])
}

/// Walk the turn round the table back to the first player.
fn full_rotation(game: &mut RailroadBarons<StackedDeck>) {
    for _ in 0..game.players().len() {
        game.end_turn().unwrap();
    }
}

/// The two-route scenario: claim, same-turn rejection, rotation, claim.
#[test]
fn test_two_route_game() {
    let mut game = RailroadBarons::new(GameConfig::default()).unwrap();
    game.start_game(two_route_map(), scripted_deck()).unwrap();

    let red = game.current_player().unwrap();
    assert_eq!(red.baron(), Baron::Red);
    assert_eq!(red.count_cards_in_hand(Card::Blue), 5);
    assert_eq!(red.count_cards_in_hand(Card::Wild), 0);
    assert_eq!(red.last_dealt(), DealtPair::new(Some(Card::Blue), Some(Card::Orange)));

    // A–B
    let receipt = game.claim_route_at(0, 1).unwrap().unwrap();
    assert_eq!(receipt.route, RouteId::new(0));
    assert_eq!(receipt.spend.color, Card::Blue);
    assert_eq!(receipt.spend.len(), 2);

    let red = game.player(Baron::Red).unwrap();
    assert_eq!(red.pieces(), 43);
    assert_eq!(red.score(), 2);
    assert_eq!(red.count_cards_in_hand(Card::Blue), 3);

    // B–C in the same turn
    let err = game.claim_route_at(2, 3).unwrap_err();
    assert_eq!(
        err,
        BaronsError::IllegalClaim {
            route: RouteId::new(1),
            reason: ClaimRejection::AlreadyClaimedThisTurn,
        }
    );
    assert_eq!(game.player(Baron::Red).unwrap().score(), 2);
    assert_eq!(game.map().unwrap().route(RouteId::new(1)).unwrap().owner(), None);

    full_rotation(&mut game);
    assert_eq!(game.current_player().unwrap().baron(), Baron::Red);
    assert_eq!(game.turn_number(), 5);

    // B–C after the rotation
    let receipt = game.claim_route_at(2, 3).unwrap().unwrap();
    assert_eq!(receipt.route_points, 4);

    let map = game.map().unwrap();
    let (rows, cols) = (map.rows() as u32, map.cols() as u32);
    let red = game.player(Baron::Red).unwrap();
    assert_eq!(red.pieces(), 40);
    assert_eq!(red.count_cards_in_hand(Card::Blue), 0);
    // A and C sit on opposite boundaries both ways, two routes apart.
    assert_eq!(receipt.bonus_points, 5 * cols + 5 * rows);
    assert_eq!(red.score(), 2 + 4 + 5 * cols + 5 * rows);
    assert!(red.has_west_east_bonus());
    assert!(red.has_north_south_bonus());
}

/// Claiming the last route ends the game at the next check.
#[test]
fn test_all_routes_claimed_ends_game() {
    let mut game = RailroadBarons::new(GameConfig::default()).unwrap();
    game.start_game(two_route_map(), scripted_deck()).unwrap();

    game.claim_route_at(0, 2).unwrap();
    assert!(!game.game_is_over());
    full_rotation(&mut game);
    game.claim_route_at(3, 3).unwrap();

    assert!(game.map().unwrap().all_routes_claimed());
    assert!(game.game_is_over());

    let outcome = game.outcome().unwrap();
    assert_eq!(outcome.winner, Some(Baron::Red));
    assert!(outcome.is_winner(Baron::Red));
    assert_eq!(outcome.scores.len(), 4);
    assert_eq!(outcome.scores[1], (Baron::Green, 0));
}

/// Another baron cannot take a route that is already owned.
#[test]
fn test_owned_route_rejected_for_next_player() {
    let mut game = RailroadBarons::new(GameConfig::default()).unwrap();
    game.start_game(two_route_map(), scripted_deck()).unwrap();

    game.claim_route_at(0, 1).unwrap();
    game.end_turn().unwrap();
    assert_eq!(game.current_player().unwrap().baron(), Baron::Green);

    assert!(!game.can_current_player_claim_route(0, 1));
    let err = game.claim_route_at(0, 1).unwrap_err();
    assert_eq!(
        err,
        BaronsError::IllegalClaim {
            route: RouteId::new(0),
            reason: ClaimRejection::AlreadyOwned(Baron::Red),
        }
    );
    assert_eq!(game.player(Baron::Green).unwrap().hand().len(), 6);
}

/// A routeless map never starts a game.
#[test]
fn test_empty_map_rejected() {
    let mut builder = MapBuilder::new();
    builder.add_station(0, 0, "A");
    builder.add_station(0, 4, "B");
    let map = builder.build().unwrap();

    let mut game = RailroadBarons::new(GameConfig::default()).unwrap();
    let err = game.start_game(map, StackedDeck::new([Card::Wild; 10])).unwrap_err();

    assert_eq!(err, BaronsError::EmptyMap);
    assert!(!game.is_in_progress());
    assert!(game.current_player().is_none());
    assert_eq!(game.end_turn(), Err(BaronsError::NoGameInProgress));
}

/// An exhausted deck deals nothing, and that is not an error.
#[test]
fn test_deck_exhaustion_deals_nothing() {
    let config = GameConfig::default().with_barons([Baron::Yellow, Baron::Blue]);
    let mut game = RailroadBarons::new(config).unwrap();
    game.start_game(
        two_route_map(),
        StackedDeck::new([Card::Red, Card::Red, Card::Red, Card::Red, Card::Red]),
    )
    .unwrap();

    assert_eq!(game.player(Baron::Yellow).unwrap().hand().len(), 4);
    assert_eq!(game.player(Baron::Blue).unwrap().hand().len(), 1);
    assert_eq!(game.cards_remaining(), Some(0));
    assert_eq!(game.current_player().unwrap().last_dealt(), DealtPair::default());

    // Yellow can still pay for A–B, so the game goes on.
    assert!(!game.game_is_over());
    game.claim_route_at(0, 1).unwrap();
    game.end_turn().unwrap();

    // Nobody can pay for B–C and nothing is left to draw.
    assert!(game.game_is_over());
    assert_eq!(game.outcome().unwrap().winner, Some(Baron::Yellow));
}

/// Each spanning bonus is paid once even when later claims qualify again.
#[test]
fn test_bonuses_paid_once() {
    // A(0,0) --2-- B(0,3) --2-- C(0,6)
    //                            |
    //                            2
    //                            |
    //                           D(3,6)
    let mut builder = MapBuilder::new();
    let a = builder.add_station(0, 0, "A");
    let b = builder.add_station(0, 3, "B");
    let c = builder.add_station(0, 6, "C");
    let d = builder.add_station(3, 6, "D");
    builder.add_route(a, b);
    builder.add_route(b, c);
    builder.add_route(c, d);
    let map = builder.build().unwrap();
    assert_eq!((map.rows(), map.cols()), (4, 7));

    let config = GameConfig::default().with_barons([Baron::Red, Baron::Green]);
    let mut game = RailroadBarons::new(config).unwrap();
    let deck = StackedDeck::new([
        Card::Blue, Card::Blue, Card::Blue, Card::Blue,
        Card::Red, Card::Red, Card::Red, Card::Red,
        Card::Blue, Card::Blue,
        Card::White, Card::White,
        Card::Pink, Card::Pink,
        Card::White, Card::White,
        Card::Pink, Card::Black,
    ]);
    game.start_game(map, deck).unwrap();

    let first = game.claim_route_at(0, 1).unwrap().unwrap();
    assert_eq!(first.bonus_points, 0);
    game.end_turn().unwrap();
    game.end_turn().unwrap();

    // A to C spans west to east.
    let second = game.claim_route_at(0, 4).unwrap().unwrap();
    assert_eq!(second.bonus_points, 5 * 7);
    game.end_turn().unwrap();
    game.end_turn().unwrap();

    // A to D spans north to south, and west to east a second time.
    let third = game.claim_route_at(1, 6).unwrap().unwrap();
    assert_eq!(third.bonus_points, 5 * 4);
    assert_eq!(third.spend.color, Card::Blue);

    let red = game.player(Baron::Red).unwrap();
    assert_eq!(red.score(), 2 + 2 + 2 + 35 + 20);
    assert_eq!(red.claimed_routes().len(), 3);
}

/// All three observer channels report what happened, in order.
#[test]
fn test_observer_channels() {
    let config = GameConfig::default().with_barons([Baron::Red, Baron::Green]);
    let mut game = RailroadBarons::new(config).unwrap();

    let game_events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&game_events);
    game.add_observer(move |e| sink.borrow_mut().push(e.clone()));

    let red_scores = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&red_scores);
    game.add_player_observer(Baron::Red, move |PlayerEvent::Changed(s)| {
        sink.borrow_mut().push(s.score)
    })
    .unwrap();

    let deck = StackedDeck::new(
        [Card::Wild, Card::Green, Card::Green, Card::Green]
            .into_iter()
            .chain([Card::Red; 10]),
    );
    game.start_game(two_route_map(), deck).unwrap();

    let map_events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&map_events);
    game.map_mut()
        .unwrap()
        .add_observer(move |e| sink.borrow_mut().push(e.clone()));

    // Three greens pay for B–C; the wild is kept.
    game.claim_route_at(1, 3).unwrap().unwrap();
    game.end_turn().unwrap();

    assert_eq!(
        map_events.borrow().as_slice(),
        &[MapEvent::RouteClaimed { route: RouteId::new(1), owner: Baron::Red }]
    );
    // Reset, first turn, claim.
    assert_eq!(red_scores.borrow().as_slice(), &[0, 0, 4]);
    assert_eq!(
        game_events.borrow().as_slice(),
        &[
            GameEvent::TurnStarted { baron: Baron::Red, turn: 1 },
            GameEvent::TurnEnded { baron: Baron::Red, turn: 1 },
            GameEvent::TurnStarted { baron: Baron::Green, turn: 2 },
        ]
    );
}

/// A seeded standard deck replays the same game.
#[test]
fn test_standard_deck_game_replays() {
    fn opening_hands(seed: u64) -> Vec<Vec<(Card, u32)>> {
        let mut game: RailroadBarons<StandardDeck> =
            RailroadBarons::new(GameConfig::default()).unwrap();
        game.start_standard_game(two_route_map(), seed).unwrap();
        game.players().iter().map(|p| p.hand().iter().collect()).collect()
    }

    assert_eq!(opening_hands(2024), opening_hands(2024));

    let deck = StandardDeck::new(2024);
    assert_eq!(deck.remaining(), 180);
}
