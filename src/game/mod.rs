//! Round state machine.

use alloc::vec::Vec;
use core::time::Duration;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::shoe::Shoe;
use crate::sink::{NullSink, Sink};
use crate::view::{Controls, HandView, RoundSnapshot};

mod actions;
mod bet;
mod dealer;
pub mod state;
pub mod step;

pub use state::{GameState, Round, Stats};
pub use step::Step;

/// A single-player blackjack table.
///
/// The game owns the shoe and the [`Round`] aggregate and notifies a [`Sink`]
/// as the round progresses. Player intent enters through the action methods;
/// automatic sequences (the initial deal, dealer play, the pause before the
/// next round) are broken into [`Step`]s that the caller runs with
/// [`Game::step`] or [`Game::run_pending`], pausing between them as long as
/// [`Game::pending_delay`] suggests.
///
/// ```
/// use blackjack_round::{Game, GameOptions, GameState};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.place_bet(100).unwrap();
/// game.start_round().unwrap();
/// game.run_pending();
/// assert_ne!(game.state(), GameState::Dealing);
/// ```
#[derive(Debug)]
pub struct Game<S: Sink = NullSink> {
    options: GameOptions,
    shoe: Shoe,
    round: Round,
    pending: Option<Step>,
    sink: S,
}

impl Game {
    /// Creates a new game with the given seed and no presentation.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_sink(options, seed, NullSink)
    }
}

impl<S: Sink> Game<S> {
    /// Creates a new game with the given seed that notifies `sink`.
    #[must_use]
    pub fn with_sink(options: GameOptions, seed: u64, sink: S) -> Self {
        let shoe = Shoe::new(options.refill_threshold, seed);
        let round = Round::new(options.starting_balance);

        Self {
            options,
            shoe,
            round,
            pending: None,
            sink,
        }
    }

    /// Returns the options the game was created with.
    ///
    /// Options are fixed for the lifetime of the game; there is no way to
    /// change them once play has started.
    ///
    /// ```compile_fail
    /// use blackjack_round::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 1);
    /// game.options.max_hands = 10;
    /// ```
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the round aggregate.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.round.state
    }

    /// Returns the player balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.round.balance
    }

    /// Returns the chips placed in the current betting phase.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.round.current_bet
    }

    /// Returns the player hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.round.hands
    }

    /// Returns the wager of each hand.
    #[must_use]
    pub fn bets(&self) -> Vec<usize> {
        self.round.bets()
    }

    /// Returns the index of the hand being played.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.round.current_hand_index
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.round.dealer
    }

    /// Returns the session statistics.
    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.round.stats
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, for scripted drivers that stack a known deal.
    ///
    /// Meant for use in the betting state only, before the round starts.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the sink mutably.
    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the game and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns whether the player has nothing left to wager.
    ///
    /// The engine only reports this; deciding to end or restart the session
    /// is up to the caller.
    #[must_use]
    pub const fn is_out_of_money(&self) -> bool {
        matches!(self.round.state, GameState::Betting)
            && self.round.balance == 0
            && self.round.current_bet == 0
    }

    /// Returns the next automatic step, if one is scheduled.
    #[must_use]
    pub const fn pending_step(&self) -> Option<Step> {
        self.pending
    }

    /// Returns how long the presentation should pause before the next step.
    #[must_use]
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(|step| step.delay(&self.options.pacing))
    }

    /// Returns which controls the input source may offer right now.
    #[must_use]
    pub fn controls(&self) -> Controls {
        let idle = self.pending.is_none();
        let can_bet = idle && self.round.state == GameState::Betting;
        let can_play = self.ensure_player_turn().is_ok();

        Controls {
            can_bet,
            can_deal: can_bet && self.round.current_bet > 0,
            can_hit: can_play,
            can_stand: can_play,
            can_double: self.check_double().is_ok(),
            can_split: self.check_split().is_ok(),
        }
    }

    /// Returns whether the active hand can be split right now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.check_split().is_ok()
    }

    /// Returns whether the active hand can double down right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.check_double().is_ok()
    }

    /// Builds the view data passed to the sink.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let dealer = &self.round.dealer;
        RoundSnapshot {
            state: self.round.state,
            balance: self.round.balance,
            current_bet: self.round.current_bet,
            hands: self.round.hands.iter().map(HandView::from).collect(),
            current_hand_index: self.round.current_hand_index,
            dealer_cards: dealer.visible_cards().to_vec(),
            dealer_card_count: dealer.len(),
            dealer_revealed: dealer.is_hole_revealed(),
            dealer_visible_total: dealer.visible_value(),
            stats: self.round.stats,
            controls: self.controls(),
        }
    }

    /// Checks that a player action may run on the active hand.
    fn ensure_player_turn(&self) -> Result<&Hand, ActionError> {
        if self.round.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if self.pending.is_some() {
            return Err(ActionError::StepPending);
        }
        self.round.current_hand().ok_or(ActionError::InvalidState)
    }

    fn check_double(&self) -> Result<(), ActionError> {
        let hand = self.ensure_player_turn()?;
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.round.balance < hand.bet() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    fn check_split(&self) -> Result<(), ActionError> {
        let hand = self.ensure_player_turn()?;
        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }
        if self.round.hands.len() >= self.options.max_hands {
            return Err(ActionError::MaxHandsReached);
        }
        if self.round.balance < hand.bet() {
            return Err(ActionError::InsufficientFunds);
        }
        Ok(())
    }

    /// Draws a card from the shoe.
    ///
    /// The shoe refills itself before it can run dry, so an empty shoe here
    /// means refilling was disabled in the options.
    fn draw(&mut self) -> Card {
        self.shoe
            .draw()
            .expect("shoe ran out of cards with refilling disabled")
    }

    fn schedule(&mut self, step: Step) {
        debug!(?step, "step scheduled");
        self.pending = Some(step);
    }

    fn notify_state(&mut self) {
        let snapshot = self.snapshot();
        self.sink.state_changed(&snapshot);
    }

    fn announce(&mut self, text: &str, display: Duration) {
        debug!(text, "message");
        self.sink.message(text, display);
    }
}
