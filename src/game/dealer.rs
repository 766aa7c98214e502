//! Dealer play, settlement and reset.

use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::result::{HandOutcome, HandResult, RoundResult};
use crate::sink::{HandOwner, Sink};

use super::step::{LONG_MESSAGE, MESSAGE};
use super::{Game, GameState, Step};

impl<S: Sink> Game<S> {
    /// Hands play to the dealer: the hole card is turned over and the first
    /// dealer decision is scheduled.
    pub(super) fn dealer_turn(&mut self) {
        self.round.state = GameState::DealerTurn;
        self.round.dealer.reveal_hole();
        debug!(total = self.round.dealer.value(), "dealer reveals");
        self.notify_state();
        self.schedule(Step::DealerDraw);
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer draws below the stand total and, unless configured to stand
    /// on soft 17, on a soft total equal to it.
    #[must_use]
    pub fn dealer_should_hit(&self) -> bool {
        let value = self.round.dealer.evaluate();
        let stand = self.options.dealer_stand;

        value.total < stand || (value.total == stand && value.soft && !self.options.stand_on_soft_17)
    }

    /// One dealer decision: draw a card and come back, or settle the round.
    pub(super) fn dealer_draw(&mut self) {
        if !self.dealer_should_hit() {
            debug!(total = self.round.dealer.value(), "dealer stands");
            self.end_round();
            return;
        }

        let card = self.draw();
        self.round.dealer.add_card(card);
        let value = self.round.dealer.evaluate();
        debug!(%card, total = value.total, soft = value.soft, "dealer draws");

        self.sink
            .card_dealt(card, HandOwner::Dealer { face_down: false });
        self.notify_state();

        if value.is_bust() {
            self.end_round();
        } else {
            self.schedule(Step::DealerDraw);
        }
    }

    /// Settles every hand against the dealer and schedules the reset.
    ///
    /// Does nothing once the round is already over.
    pub(super) fn end_round(&mut self) {
        if self.round.state == GameState::RoundOver {
            debug!("round already settled");
            return;
        }

        self.round.state = GameState::RoundOver;
        self.round.dealer.reveal_hole();

        let result = self.settle();
        self.notify_state();

        if result.all_bust() {
            self.announce("All hands busted. Dealer wins!", MESSAGE);
        }
        self.sink.round_result(&result);

        self.schedule(Step::Reset);
    }

    fn settle(&mut self) -> RoundResult {
        let dealer = self.round.dealer.evaluate();

        let hands: Vec<HandResult> = self
            .round
            .hands
            .iter()
            .enumerate()
            .map(|(index, hand)| HandResult::settle(index, hand.bet(), hand.value(), dealer.total))
            .collect();

        let total_bet: usize = hands.iter().map(|hand| hand.bet).sum();
        let total_payout: usize = hands.iter().map(|hand| hand.payout).sum();
        let won = hands
            .iter()
            .filter(|hand| hand.outcome == HandOutcome::Win)
            .count();

        self.round.balance += total_payout;
        self.round.stats.rounds_played += 1;
        self.round.stats.hands_won += won;

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = total_payout as isize - total_bet as isize;

        info!(
            dealer = dealer.total,
            hands = hands.len(),
            won,
            net,
            balance = self.round.balance,
            "round settled"
        );

        RoundResult {
            hands,
            dealer_value: dealer.total,
            dealer_bust: dealer.is_bust(),
            natural: self.round.natural,
            total_payout,
            net,
        }
    }

    /// Clears the table and returns to betting.
    pub(super) fn reset_round(&mut self) {
        self.round.reset();
        debug!(balance = self.round.balance, "round reset");
        self.notify_state();

        if self.round.balance == 0 {
            warn!("player is out of money");
            self.announce("You're out of money. Game over.", LONG_MESSAGE);
        }
    }
}
