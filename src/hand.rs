//! Hand evaluation and the player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;

/// The best total of a hand and whether it is soft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Best total not exceeding 21 when one exists, otherwise the lowest total.
    pub total: u8,
    /// Whether an ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    /// Returns whether the total exceeds 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }
}

/// Computes the total and softness of a sequence of cards.
///
/// Aces start at 11 and are demoted to 1, one at a time, while the total
/// exceeds 21.
///
/// ```
/// use blackjack_round::{Card, Rank, Suit, evaluate};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// let value = evaluate(&cards);
/// assert_eq!(value.total, 21);
/// assert!(value.soft);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        soft: aces > 0 && total <= 21,
    }
}

/// Returns whether the cards are exactly two totalling 21.
///
/// This says nothing about where the cards came from; a split hand that
/// reaches 21 on two cards passes this check but is not paid as a natural.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate(cards).total == 21
}

/// A player's hand and its wager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: usize,
    from_split: bool,
    doubled: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            from_split: false,
            doubled: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            bet,
            from_split: true,
            doubled: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the bet on this hand has been doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Marks the hand as part of a split, which rules out a natural.
    pub(crate) const fn mark_split(&mut self) {
        self.from_split = true;
    }

    /// Returns whether this hand is from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the best total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.evaluate().soft
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns whether the hand is a natural: the original two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Returns whether the hand holds a pair of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [first, second] if first.rank == second.rank)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card.
    ///
    /// The dealer's first card is the hole card; the second is dealt face up.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the cards a player may see: everything once revealed, else all
    /// but the hole card.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            self.cards.get(1..).unwrap_or_default()
        }
    }

    /// Calculates the value of the visible cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        evaluate(self.visible_cards()).total
    }

    /// Evaluates the full hand, hole card included.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().total
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.evaluate().is_bust()
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.evaluate().soft
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
