//! Round result types for settlement.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Dealer has the higher value.
    Lose,
    /// Push (tie).
    Push,
    /// Player went over 21.
    Bust,
}

/// How a natural on the initial deal decided the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Natural {
    /// Player and dealer both hold blackjack.
    Both,
    /// Only the player holds blackjack.
    Player,
    /// Only the dealer holds blackjack.
    Dealer,
}

impl Natural {
    /// Classifies the initial deal, returning `None` when neither side has blackjack.
    #[must_use]
    pub const fn from_deal(player: bool, dealer: bool) -> Option<Self> {
        match (player, dealer) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Player),
            (false, true) => Some(Self::Dealer),
            (false, false) => None,
        }
    }

    /// Announcement shown when the natural is revealed.
    #[must_use]
    pub const fn announcement(self) -> &'static str {
        match self {
            Self::Both => "Both have Blackjack! It's a push.",
            Self::Player => "Blackjack! You win!",
            Self::Dealer => "Dealer has Blackjack. Dealer wins.",
        }
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount for this hand.
    pub bet: usize,
    /// The amount credited back to the balance.
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
}

impl HandResult {
    /// Settles one hand against the dealer total.
    #[must_use]
    pub const fn settle(hand_index: usize, bet: usize, player_value: u8, dealer_value: u8) -> Self {
        let outcome = if player_value > 21 {
            HandOutcome::Bust
        } else if dealer_value > 21 || player_value > dealer_value {
            HandOutcome::Win
        } else if player_value < dealer_value {
            HandOutcome::Lose
        } else {
            HandOutcome::Push
        };

        let payout = match outcome {
            HandOutcome::Win => bet * 2,
            HandOutcome::Push => bet,
            HandOutcome::Lose | HandOutcome::Bust => 0,
        };

        Self {
            hand_index,
            outcome,
            bet,
            payout,
            player_value,
            dealer_value,
        }
    }

    /// Formats the result line shown to the player.
    ///
    /// `numbered` adds the hand number, used when more than one hand was played.
    #[must_use]
    pub fn message(&self, numbered: bool) -> String {
        let label = if numbered {
            format!(" (Hand {})", self.hand_index + 1)
        } else {
            String::new()
        };

        match self.outcome {
            HandOutcome::Win => format!("You win{label}! +${}", self.bet),
            HandOutcome::Lose => format!("You lose{label}. -${}", self.bet),
            HandOutcome::Push => format!("Push{label}. Your bet is returned."),
            HandOutcome::Bust => format!("Bust{label}. -${}", self.bet),
        }
    }
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each hand, in play order.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The natural that decided the round, if any.
    pub natural: Option<Natural>,
    /// Total credited back to the balance.
    pub total_payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
}

impl RoundResult {
    /// Returns whether every hand busted.
    #[must_use]
    pub fn all_bust(&self) -> bool {
        !self.hands.is_empty()
            && self
                .hands
                .iter()
                .all(|hand| hand.outcome == HandOutcome::Bust)
    }

    /// Returns the result line for each hand.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let numbered = self.hands.len() > 1;
        self.hands
            .iter()
            .map(|hand| hand.message(numbered))
            .collect()
    }
}
