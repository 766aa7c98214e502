//! Player actions and hand advance.

use alloc::format;

use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::sink::{HandOwner, Sink};

use super::step::{MESSAGE, SHORT_MESSAGE};
use super::{Game, Step};

impl<S: Sink> Game<S> {
    /// Player action: Hit (draw a card into the active hand).
    ///
    /// A hand that goes over 21 or reaches 21 resolves on its own: the next
    /// hand (or the dealer) takes over through a scheduled [`Step::FinishHand`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action.
    ///
    /// # Panics
    ///
    /// Panics if the shoe is empty with refilling disabled.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if let Err(err) = self.ensure_player_turn() {
            debug!(%err, "hit rejected");
            return Err(err);
        }

        let card = self.deal_to_current_hand();
        let value = self.active_hand().evaluate();
        debug!(%card, total = value.total, soft = value.soft, "hit");

        if value.is_bust() {
            self.announce("Bust!", SHORT_MESSAGE);
            self.schedule(Step::FinishHand);
        } else if value.total == 21 {
            self.schedule(Step::FinishHand);
        }

        Ok(card)
    }

    /// Player action: Stand (keep the active hand and move on).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if let Err(err) = self.ensure_player_turn() {
            debug!(%err, "stand rejected");
            return Err(err);
        }

        debug!(hand = self.round.current_hand_index, "stand");
        self.finish_hand();

        Ok(())
    }

    /// Player action: Double down (double the wager, take exactly one card).
    ///
    /// The hand is finished after the card whatever its total.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action, the
    /// active hand does not hold exactly two cards, or the balance cannot
    /// cover the extra wager.
    ///
    /// # Panics
    ///
    /// Panics if the shoe is empty with refilling disabled.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        if let Err(err) = self.check_double() {
            debug!(%err, "double down rejected");
            return Err(err);
        }

        let index = self.round.current_hand_index;
        let bet = self.round.hands[index].bet();
        self.round.balance -= bet;
        self.round.hands[index].double_bet();

        let card = self.deal_to_current_hand();
        let value = self.active_hand().evaluate();
        debug!(%card, total = value.total, bet = bet * 2, "double down");

        if value.is_bust() {
            self.announce("Bust!", SHORT_MESSAGE);
        }
        self.schedule(Step::FinishHand);

        Ok(card)
    }

    /// Player action: Split (turn a pair into two hands with equal wagers).
    ///
    /// The second card starts a new hand appended after the existing ones,
    /// each of the two hands receives one fresh card, and play resumes on the
    /// active hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a player action, the
    /// active hand is not a two-card pair, the hand limit is reached, or the
    /// balance cannot cover the duplicated wager.
    ///
    /// # Panics
    ///
    /// Panics if the shoe is empty with refilling disabled.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if let Err(err) = self.check_split() {
            debug!(%err, "split rejected");
            return Err(err);
        }

        let index = self.round.current_hand_index;
        let hand = &mut self.round.hands[index];
        let bet = hand.bet();
        let Some(split_card) = hand.take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        hand.mark_split();

        self.round.balance -= bet;
        self.round.hands.push(Hand::from_split(split_card, bet));
        let new_index = self.round.hands.len() - 1;

        self.deal_to_current_hand();
        let card = self.draw();
        self.round.hands[new_index].add_card(card);
        self.sink.card_dealt(card, HandOwner::Player(new_index));

        debug!(
            hands = self.round.hands.len(),
            balance = self.round.balance,
            "split"
        );
        self.notify_state();
        self.begin_hand();

        Ok(())
    }

    fn active_hand(&self) -> &Hand {
        &self.round.hands[self.round.current_hand_index]
    }

    fn deal_to_current_hand(&mut self) -> Card {
        let index = self.round.current_hand_index;
        let card = self.draw();
        self.round.hands[index].add_card(card);
        self.sink.card_dealt(card, HandOwner::Player(index));
        self.notify_state();
        card
    }

    /// Starts play on the active hand, resolving it at once when it already
    /// totals 21 or more.
    pub(super) fn begin_hand(&mut self) {
        let index = self.round.current_hand_index;
        let Some(hand) = self.round.hands.get(index) else {
            return;
        };
        let total = hand.value();

        self.announce(&format!("Playing Hand {}", index + 1), MESSAGE);
        if total >= 21 {
            debug!(hand = index, total, "hand resolves without input");
            self.schedule(Step::FinishHand);
        }
    }

    /// Moves play past the active hand.
    pub(super) fn finish_hand(&mut self) {
        self.round.current_hand_index += 1;

        if self.round.current_hand_index < self.round.hands.len() {
            self.notify_state();
            self.begin_hand();
        } else if self.round.all_hands_bust() {
            self.end_round();
        } else {
            self.dealer_turn();
        }
    }
}
