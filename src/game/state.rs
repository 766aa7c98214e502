//! Round state types.

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::result::Natural;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting chips for the next round.
    Betting,
    /// Dealing initial cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled and is waiting to reset.
    RoundOver,
}

/// Session statistics kept across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Rounds settled.
    pub rounds_played: usize,
    /// Hands that won, counted separately for split hands.
    pub hands_won: usize,
}

impl Stats {
    /// Percentage of hands won per round played, or 0 before the first round.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for round counts"
    )]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.hands_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

/// The round aggregate: hands, wagers and balance.
///
/// A single `Round` lives for the whole session. Balance and statistics
/// persist; everything else is reset between rounds. Each player hand carries
/// its own wager, so the bets always line up one-to-one with the hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) hands: Vec<Hand>,
    pub(crate) current_hand_index: usize,
    pub(crate) dealer: DealerHand,
    pub(crate) balance: usize,
    pub(crate) current_bet: usize,
    pub(crate) state: GameState,
    pub(crate) natural: Option<Natural>,
    pub(crate) stats: Stats,
}

impl Round {
    /// Creates an empty round in the betting state.
    #[must_use]
    pub const fn new(balance: usize) -> Self {
        Self {
            hands: Vec::new(),
            current_hand_index: 0,
            dealer: DealerHand::new(),
            balance,
            current_bet: 0,
            state: GameState::Betting,
            natural: None,
            stats: Stats {
                rounds_played: 0,
                hands_won: 0,
            },
        }
    }

    /// Moves the pending wager onto a fresh single hand and enters dealing.
    pub(crate) fn begin(&mut self) {
        let bet = core::mem::take(&mut self.current_bet);
        self.hands.clear();
        self.hands.push(Hand::new(bet));
        self.current_hand_index = 0;
        self.dealer.clear();
        self.natural = None;
        self.state = GameState::Dealing;
    }

    /// Clears hands and wagers and returns to betting. Balance and stats are kept.
    pub(crate) fn reset(&mut self) {
        self.hands.clear();
        self.current_hand_index = 0;
        self.dealer.clear();
        self.current_bet = 0;
        self.natural = None;
        self.state = GameState::Betting;
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player hands in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the wager of each hand, aligned with [`Round::hands`].
    #[must_use]
    pub fn bets(&self) -> Vec<usize> {
        self.hands.iter().map(Hand::bet).collect()
    }

    /// Returns the index of the hand being played.
    ///
    /// Equals the number of hands once every hand has been played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand_index
    }

    /// Returns the hand being played, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.current_hand_index)
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns whether the dealer's hole card is face up.
    #[must_use]
    pub const fn dealer_hand_revealed(&self) -> bool {
        self.dealer.is_hole_revealed()
    }

    /// Returns the player balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the chips placed in the current betting phase.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the natural found on the initial deal, if any.
    #[must_use]
    pub const fn natural(&self) -> Option<Natural> {
        self.natural
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Returns whether every player hand is bust.
    #[must_use]
    pub fn all_hands_bust(&self) -> bool {
        !self.hands.is_empty() && self.hands.iter().all(Hand::is_bust)
    }
}
