//! Read-only view data handed to the presentation sink.

use alloc::vec::Vec;

use crate::card::Card;
use crate::game::{GameState, Stats};
use crate::hand::Hand;

/// View of one player hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Wager on the hand.
    pub bet: usize,
    /// Best total.
    pub total: u8,
    /// Whether an ace is counted as 11.
    pub soft: bool,
    /// Whether the wager was doubled.
    pub doubled: bool,
}

impl From<&Hand> for HandView {
    fn from(hand: &Hand) -> Self {
        let value = hand.evaluate();
        Self {
            cards: hand.cards().to_vec(),
            bet: hand.bet(),
            total: value.total,
            soft: value.soft,
            doubled: hand.is_doubled(),
        }
    }
}

/// Which controls the input source may offer right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Chips can be placed or removed.
    pub can_bet: bool,
    /// A round can be started.
    pub can_deal: bool,
    /// The active hand can hit.
    pub can_hit: bool,
    /// The active hand can stand.
    pub can_stand: bool,
    /// The active hand can double down.
    pub can_double: bool,
    /// The active hand can be split.
    pub can_split: bool,
}

/// Snapshot of the round taken at notification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Current state.
    pub state: GameState,
    /// Player balance.
    pub balance: usize,
    /// Chips placed in the current betting phase.
    pub current_bet: usize,
    /// Player hands in play order.
    pub hands: Vec<HandView>,
    /// Index of the hand being played.
    pub current_hand_index: usize,
    /// Dealer cards the player may see.
    pub dealer_cards: Vec<Card>,
    /// Number of dealer cards including the hidden one.
    pub dealer_card_count: usize,
    /// Whether the hole card is face up.
    pub dealer_revealed: bool,
    /// Total of the visible dealer cards.
    pub dealer_visible_total: u8,
    /// Session statistics.
    pub stats: Stats,
    /// Available controls.
    pub controls: Controls,
}
