//! The shoe cards are drawn from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single shuffled deck that refills itself when it runs low.
///
/// Before every draw the shoe checks whether fewer than `refill_threshold`
/// cards remain; if so it is replaced by a freshly shuffled full deck and the
/// draw is served from that deck. A threshold of 0 disables refilling.
///
/// ```
/// use blackjack_round::{DECK_SIZE, Shoe};
///
/// let mut shoe = Shoe::new(20, 7);
/// assert_eq!(shoe.remaining(), DECK_SIZE);
/// assert!(shoe.draw().is_some());
/// assert_eq!(shoe.remaining(), DECK_SIZE - 1);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in draw order; the next card is at the end.
    cards: Vec<Card>,
    refill_threshold: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shuffled shoe seeded from `seed`.
    #[must_use]
    pub fn new(refill_threshold: usize, seed: u64) -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            refill_threshold,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reinitialize();
        shoe
    }

    /// Replaces the contents with one full standard deck in shuffled order.
    fn reinitialize(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(suit, rank));
            }
        }
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "shoe reinitialized");
    }

    /// Returns whether the next draw will reinitialize the shoe first.
    #[must_use]
    pub fn needs_refill(&self) -> bool {
        self.cards.len() < self.refill_threshold
    }

    /// Draws the top card, refilling first when the shoe is below its threshold.
    ///
    /// Returns `None` only when the shoe is empty and refilling is disabled.
    pub fn draw(&mut self) -> Option<Card> {
        if self.needs_refill() {
            self.reinitialize();
        }
        let card = self.cards.pop()?;
        trace!(%card, remaining = self.cards.len(), "card drawn");
        Some(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the low-card refill threshold.
    #[must_use]
    pub const fn refill_threshold(&self) -> usize {
        self.refill_threshold
    }

    /// Places `draws` on top of the shoe so they come out first, in order.
    ///
    /// Intended for scripted drivers and tests that need a known deal.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.extend(draws.iter().rev());
    }
}
