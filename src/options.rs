//! Table configuration.

use core::time::Duration;

/// Presentation pauses attached to each automatic step.
///
/// These are hints for whoever drives [`Game::step`](crate::Game::step); the
/// engine never sleeps and the rules do not depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pacing {
    /// Pause before each card of the initial deal.
    pub deal_card: Duration,
    /// Pause between revealing a natural and announcing it.
    pub natural_reveal: Duration,
    /// Pause between announcing a natural and settling the round.
    pub natural_settle: Duration,
    /// Pause before a busted or finished hand hands over to the next one.
    pub hand_advance: Duration,
    /// Pause before each dealer decision.
    pub dealer_draw: Duration,
    /// Pause between the results and the next betting phase.
    pub round_reset: Duration,
}

impl Pacing {
    /// Pacing with every pause set to zero.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            deal_card: Duration::ZERO,
            natural_reveal: Duration::ZERO,
            natural_settle: Duration::ZERO,
            hand_advance: Duration::ZERO,
            dealer_draw: Duration::ZERO,
            round_reset: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            deal_card: Duration::from_millis(500),
            natural_reveal: Duration::from_millis(1000),
            natural_settle: Duration::from_millis(2000),
            hand_advance: Duration::from_millis(1000),
            dealer_draw: Duration::from_millis(1000),
            round_reset: Duration::from_millis(3000),
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Options are fixed once the game is constructed. Use the builder pattern to
/// customize them:
///
/// ```
/// use blackjack_round::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_bet(1000)
///     .with_starting_balance(5000)
///     .with_stand_on_soft_17(true);
/// assert_eq!(options.max_bet, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stand: u8,
    /// Whether dealer stands on soft 17. When false the dealer hits soft 17.
    pub stand_on_soft_17: bool,
    /// The shoe is reshuffled before a draw when fewer cards than this remain.
    /// 0 to disable refilling.
    pub refill_threshold: usize,
    /// Maximum total wager in one betting phase.
    pub max_bet: usize,
    /// Maximum number of player hands after splits.
    pub max_hands: usize,
    /// Balance the player starts the session with.
    pub starting_balance: usize,
    /// Presentation pauses.
    pub pacing: Pacing,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stand: 17,
            stand_on_soft_17: false,
            refill_threshold: 20,
            max_bet: 500,
            max_hands: 4,
            starting_balance: 2000,
            pacing: Pacing::default(),
        }
    }
}

impl GameOptions {
    /// Sets the dealer stand total.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stand(18);
    /// assert_eq!(options.dealer_stand, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stand(mut self, total: u8) -> Self {
        self.dealer_stand = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(true);
    /// assert!(options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the shoe refill threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_refill_threshold(0);
    /// assert_eq!(options.refill_threshold, 0);
    /// ```
    #[must_use]
    pub const fn with_refill_threshold(mut self, threshold: usize) -> Self {
        self.refill_threshold = threshold;
        self
    }

    /// Sets the maximum bet per betting phase.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bet(100);
    /// assert_eq!(options.max_bet, 100);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the maximum number of hands after splits.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hands(2);
    /// assert_eq!(options.max_hands, 2);
    /// ```
    #[must_use]
    pub const fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(300);
    /// assert_eq!(options.starting_balance, 300);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the presentation pacing.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{GameOptions, Pacing};
    ///
    /// let options = GameOptions::default().with_pacing(Pacing::instant());
    /// assert_eq!(options.pacing, Pacing::instant());
    /// ```
    #[must_use]
    pub const fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }
}
