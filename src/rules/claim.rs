//! Claim evaluation.
//!
//! Pure functions deciding whether a player may claim a route and exactly
//! which cards pay for it. A route is paid for with cards of a single
//! color, topped up by at most one wild card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Baron, Card, Hand};
use crate::map::Route;

/// Why a claim was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ClaimRejection {
    #[error("route is already owned by the {0}")]
    AlreadyOwned(Baron),

    #[error("a route was already claimed this turn")]
    AlreadyClaimedThisTurn,

    #[error("not enough cards of one color (need {required}, can pay {available})")]
    InsufficientCards { required: u32, available: u32 },

    #[error("not enough train pieces (need {required}, have {available})")]
    InsufficientPieces { required: u32, available: u32 },
}

/// The cards chosen to pay for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpend {
    /// The single color paid with.
    pub color: Card,
    /// How many cards of `color` are spent.
    pub color_count: u32,
    /// Whether one wild card tops up the payment.
    pub wild: bool,
}

impl CardSpend {
    /// Total cards spent.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.color_count + u32::from(self.wild)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The spent cards, one entry per card.
    #[must_use]
    pub fn cards(&self) -> SmallVec<[Card; 8]> {
        let mut cards: SmallVec<[Card; 8]> = (0..self.color_count).map(|_| self.color).collect();
        if self.wild {
            cards.push(Card::Wild);
        }
        cards
    }

    /// Take the cards out of `hand`.
    ///
    /// Returns false (hand untouched) if the hand cannot cover the spend.
    pub fn take_from(&self, hand: &mut Hand) -> bool {
        if hand.count(self.color) < self.color_count || (self.wild && hand.count(Card::Wild) == 0) {
            return false;
        }
        hand.remove(self.color, self.color_count);
        if self.wild {
            hand.remove(Card::Wild, 1);
        }
        true
    }
}

/// Longest route the hand can pay for: the best single color, plus one if
/// a wild is held and that color count is non-zero.
#[must_use]
pub fn max_payable_length(hand: &Hand) -> u32 {
    let max_color = hand.max_color_count();
    if max_color > 0 && hand.count(Card::Wild) > 0 {
        max_color + 1
    } else {
        max_color
    }
}

/// Check that a route of `required_length` could be paid for in cards and
/// pieces, without looking at ownership or turn state.
pub fn check_resources(hand: &Hand, pieces: u32, required_length: u32) -> Result<(), ClaimRejection> {
    let payable = max_payable_length(hand);
    if required_length > payable {
        return Err(ClaimRejection::InsufficientCards {
            required: required_length,
            available: payable,
        });
    }
    if required_length > pieces {
        return Err(ClaimRejection::InsufficientPieces {
            required: required_length,
            available: pieces,
        });
    }
    Ok(())
}

/// Check if a route of `required_length` could still be claimed.
///
/// ```
/// use railroad_barons::core::{Card, Hand};
/// use railroad_barons::rules::can_continue_playing;
///
/// let hand: Hand = [Card::Red, Card::Red, Card::Wild].into_iter().collect();
/// assert!(can_continue_playing(&hand, 45, 3));
/// assert!(!can_continue_playing(&hand, 45, 4));
/// assert!(!can_continue_playing(&hand, 2, 3));
/// ```
#[must_use]
pub fn can_continue_playing(hand: &Hand, pieces: u32, required_length: u32) -> bool {
    check_resources(hand, pieces, required_length).is_ok()
}

/// Full legality check for claiming `route`.
pub fn check_claim(
    hand: &Hand,
    pieces: u32,
    claimed_this_turn: bool,
    route: &Route,
) -> Result<(), ClaimRejection> {
    if let Some(owner) = route.owner() {
        return Err(ClaimRejection::AlreadyOwned(owner));
    }
    if claimed_this_turn {
        return Err(ClaimRejection::AlreadyClaimedThisTurn);
    }
    check_resources(hand, pieces, route.length())
}

/// Check if `route` may be claimed right now.
#[must_use]
pub fn can_claim(hand: &Hand, pieces: u32, claimed_this_turn: bool, route: &Route) -> bool {
    check_claim(hand, pieces, claimed_this_turn, route).is_ok()
}

/// Pick the cards to pay for a route of `route_length`.
///
/// Pays with the color held in the *smallest* quantity that still covers
/// the route, so plentiful colors stay available for longer routes. Only
/// if no color suffices on its own is a wild card used, again with the
/// scarcest color covering `route_length - 1`. Ties go to the earlier
/// color in `Card::COLORS`.
///
/// ```
/// use railroad_barons::core::{Card, Hand};
/// use railroad_barons::rules::select_cards_to_spend;
///
/// let hand: Hand = [Card::Red; 5].into_iter().chain([Card::Blue; 3]).collect();
/// let spend = select_cards_to_spend(&hand, 3).unwrap();
/// assert_eq!((spend.color, spend.color_count, spend.wild), (Card::Blue, 3, false));
/// ```
#[must_use]
pub fn select_cards_to_spend(hand: &Hand, route_length: u32) -> Option<CardSpend> {
    if let Some(color) = scarcest_color_covering(hand, route_length) {
        return Some(CardSpend {
            color,
            color_count: route_length,
            wild: false,
        });
    }

    if route_length == 0 || hand.count(Card::Wild) == 0 {
        return None;
    }
    let color = scarcest_color_covering(hand, route_length - 1)?;
    Some(CardSpend {
        color,
        color_count: route_length - 1,
        wild: true,
    })
}

fn scarcest_color_covering(hand: &Hand, needed: u32) -> Option<Card> {
    let mut best: Option<(Card, u32)> = None;
    for color in Card::COLORS {
        let held = hand.count(color);
        if held == 0 || held < needed {
            continue;
        }
        if best.map_or(true, |(_, best_held)| held < best_held) {
            best = Some((color, held));
        }
    }
    best.map(|(color, _)| color)
}
