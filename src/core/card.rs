//! Train cards and hands.
//!
//! ## Card
//!
//! Nine kinds: eight colors plus `Wild`. A wild card stands in for exactly
//! one unit of any single color within one claim.
//!
//! ## Hand
//!
//! A multiset of cards stored as per-kind counts. Order never matters for
//! claiming, so counts are all a hand needs.

use serde::{Deserialize, Serialize};

/// A train card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
    Wild,
}

impl Card {
    /// Number of card kinds (colors plus wild).
    pub const COUNT: usize = 9;

    /// The eight colors in scan order.
    ///
    /// Card selection breaks ties by position in this array.
    pub const COLORS: [Card; 8] = [
        Card::Black,
        Card::Blue,
        Card::Green,
        Card::Orange,
        Card::Pink,
        Card::Red,
        Card::White,
        Card::Yellow,
    ];

    /// Every kind, colors first.
    pub const ALL: [Card; 9] = [
        Card::Black,
        Card::Blue,
        Card::Green,
        Card::Orange,
        Card::Pink,
        Card::Red,
        Card::White,
        Card::Yellow,
        Card::Wild,
    ];

    /// Dense index of this kind (`0..Card::COUNT`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Check if this is the wild kind.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, Card::Wild)
    }
}

/// A player's cards, stored as counts per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    counts: [u32; Card::COUNT],
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one card.
    pub fn add(&mut self, card: Card) {
        self.counts[card.index()] += 1;
    }

    /// Remove `n` cards of one kind.
    ///
    /// Returns false (and leaves the hand untouched) if fewer than `n` are held.
    pub fn remove(&mut self, card: Card, n: u32) -> bool {
        let held = &mut self.counts[card.index()];
        if *held < n {
            return false;
        }
        *held -= n;
        true
    }

    /// Number of cards of the given kind.
    #[must_use]
    pub fn count(&self, card: Card) -> u32 {
        self.counts[card.index()]
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Check if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest count held of any single color (wilds excluded).
    #[must_use]
    pub fn max_color_count(&self) -> u32 {
        Card::COLORS
            .iter()
            .map(|&c| self.count(c))
            .max()
            .unwrap_or(0)
    }

    /// Iterate over (kind, count) pairs for kinds actually held.
    pub fn iter(&self) -> impl Iterator<Item = (Card, u32)> + '_ {
        Card::ALL
            .into_iter()
            .map(|c| (c, self.count(c)))
            .filter(|&(_, n)| n > 0)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Hand::new();
        hand.extend(iter);
        hand
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.add(card);
        }
    }
}

/// The two cards dealt at the start of a turn.
///
/// Either card is `None` once the deck runs dry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealtPair {
    pub first: Option<Card>,
    pub second: Option<Card>,
}

impl DealtPair {
    #[must_use]
    pub const fn new(first: Option<Card>, second: Option<Card>) -> Self {
        Self { first, second }
    }

    /// The cards actually received, skipping exhausted draws.
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        self.first.into_iter().chain(self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index_dense() {
        for (i, card) in Card::ALL.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
        assert!(Card::Wild.is_wild());
        assert!(!Card::COLORS.iter().any(|c| c.is_wild()));
    }

    #[test]
    fn test_hand_add_remove() {
        let mut hand = Hand::new();
        hand.add(Card::Blue);
        hand.add(Card::Blue);
        hand.add(Card::Wild);

        assert_eq!(hand.count(Card::Blue), 2);
        assert_eq!(hand.len(), 3);

        assert!(!hand.remove(Card::Blue, 3));
        assert_eq!(hand.count(Card::Blue), 2);

        assert!(hand.remove(Card::Blue, 2));
        assert_eq!(hand.count(Card::Blue), 0);
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn test_hand_max_color_ignores_wild() {
        let hand: Hand = [Card::Wild, Card::Wild, Card::Wild, Card::Red, Card::Red]
            .into_iter()
            .collect();
        assert_eq!(hand.max_color_count(), 2);
        assert_eq!(Hand::new().max_color_count(), 0);
    }

    #[test]
    fn test_hand_iter_skips_missing() {
        let hand: Hand = [Card::Pink, Card::Wild, Card::Pink].into_iter().collect();
        let held: Vec<_> = hand.iter().collect();
        assert_eq!(held, vec![(Card::Pink, 2), (Card::Wild, 1)]);
    }

    #[test]
    fn test_dealt_pair_skips_none() {
        let pair = DealtPair::new(None, Some(Card::Green));
        assert_eq!(pair.cards().collect::<Vec<_>>(), vec![Card::Green]);
        assert_eq!(DealtPair::default().cards().count(), 0);
    }
}
