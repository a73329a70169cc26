//! Card decks.
//!
//! The engine only needs `Deck`: draw a card, or learn that none are left.
//! Running out is normal and shows up as `None`, never as an error.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::core::{Card, GameRng};

/// Source of train cards.
pub trait Deck {
    /// Draw the next card, `None` once the deck is exhausted.
    fn draw(&mut self) -> Option<Card>;

    /// Cards not yet drawn.
    fn remaining(&self) -> usize;

    /// Check if every card has been drawn.
    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

/// The standard deck: an equal number of each of the nine kinds.
///
/// Each draw picks uniformly among the kinds that still have cards left,
/// using a seeded `GameRng` so a deal can be reproduced.
#[derive(Clone, Debug)]
pub struct StandardDeck {
    counts: [u32; Card::COUNT],
    cards_per_kind: u32,
    rng: GameRng,
}

impl StandardDeck {
    /// A full 180-card deck (20 of each kind).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_cards_per_kind(crate::core::config::DEFAULT_CARDS_PER_KIND, seed)
    }

    /// A full deck with `cards_per_kind` of each kind.
    #[must_use]
    pub fn with_cards_per_kind(cards_per_kind: u32, seed: u64) -> Self {
        Self {
            counts: [cards_per_kind; Card::COUNT],
            cards_per_kind,
            rng: GameRng::new(seed),
        }
    }

    /// Restore every drawn card. The RNG keeps its position.
    pub fn reset(&mut self) {
        self.counts = [self.cards_per_kind; Card::COUNT];
    }

    /// Cards of one kind not yet drawn.
    #[must_use]
    pub fn remaining_of(&self, card: Card) -> u32 {
        self.counts[card.index()]
    }

    /// Seed the draw order was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Deck for StandardDeck {
    fn draw(&mut self) -> Option<Card> {
        let available: SmallVec<[Card; Card::COUNT]> = Card::ALL
            .into_iter()
            .filter(|c| self.counts[c.index()] > 0)
            .collect();
        let &card = self.rng.choose(&available)?;
        self.counts[card.index()] -= 1;
        Some(card)
    }

    fn remaining(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }
}

/// A deck that deals a fixed sequence, front first.
///
/// ```
/// use railroad_barons::core::Card;
/// use railroad_barons::game::{Deck, StackedDeck};
///
/// let mut deck = StackedDeck::new([Card::Red, Card::Wild]);
/// assert_eq!(deck.draw(), Some(Card::Red));
/// assert_eq!(deck.draw(), Some(Card::Wild));
/// assert_eq!(deck.draw(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StackedDeck {
    cards: VecDeque<Card>,
}

impl StackedDeck {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Put a card at the bottom.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }
}

impl Deck for StackedDeck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
