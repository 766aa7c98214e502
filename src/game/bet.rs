//! Betting and the initial deal.

use tracing::debug;

use crate::error::{BetError, DealError};
use crate::result::Natural;
use crate::sink::{HandOwner, Sink};

use super::step::MESSAGE;
use super::{Game, GameState, Step};

impl<S: Sink> Game<S> {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.round.state != GameState::Betting || self.pending.is_some() {
            return Err(BetError::InvalidState);
        }
        Ok(())
    }

    /// Moves `amount` from the balance onto the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// zero, the balance cannot cover it, or the table maximum would be
    /// exceeded.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let result = self.check_place_bet(amount);
        if let Err(err) = result {
            debug!(amount, %err, "bet rejected");
            return result;
        }

        self.round.balance -= amount;
        self.round.current_bet += amount;
        debug!(
            amount,
            current_bet = self.round.current_bet,
            balance = self.round.balance,
            "bet placed"
        );
        self.notify_state();

        Ok(())
    }

    fn check_place_bet(&self, amount: usize) -> Result<(), BetError> {
        self.ensure_betting()?;

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.round.balance < amount {
            return Err(BetError::InsufficientFunds);
        }
        if self.round.current_bet + amount > self.options.max_bet {
            return Err(BetError::AboveMaximum);
        }

        Ok(())
    }

    /// Moves `amount` from the table back to the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the amount is
    /// zero, or fewer chips than `amount` are on the table.
    pub fn remove_bet(&mut self, amount: usize) -> Result<(), BetError> {
        let result = self.check_remove_bet(amount);
        if let Err(err) = result {
            debug!(amount, %err, "bet removal rejected");
            return result;
        }

        self.round.current_bet -= amount;
        self.round.balance += amount;
        debug!(
            amount,
            current_bet = self.round.current_bet,
            balance = self.round.balance,
            "bet removed"
        );
        self.notify_state();

        Ok(())
    }

    fn check_remove_bet(&self, amount: usize) -> Result<(), BetError> {
        self.ensure_betting()?;

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.round.current_bet < amount {
            return Err(BetError::NotEnoughOnTable);
        }

        Ok(())
    }

    /// Starts the round: the chips on the table become the wager on a single
    /// hand and the initial deal is scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or no chips have
    /// been placed.
    pub fn start_round(&mut self) -> Result<(), DealError> {
        if self.ensure_betting().is_err() {
            debug!(state = ?self.round.state, "deal rejected");
            return Err(DealError::InvalidState);
        }
        if self.round.current_bet == 0 {
            debug!("deal rejected without a bet");
            return Err(DealError::NoBet);
        }

        self.round.begin();
        debug!(
            bet = self.round.hands[0].bet(),
            balance = self.round.balance,
            "round started"
        );
        self.notify_state();
        self.schedule(Step::Deal { index: 0 });

        Ok(())
    }

    /// Deals card `index` of the player, dealer, player, dealer sequence.
    pub(super) fn deal_initial_card(&mut self, index: u8) {
        let card = self.draw();

        let owner = if index % 2 == 0 {
            self.round.hands[0].add_card(card);
            HandOwner::Player(0)
        } else {
            self.round.dealer.add_card(card);
            HandOwner::Dealer {
                face_down: index == 1,
            }
        };
        self.sink.card_dealt(card, owner);

        if index < 3 {
            self.schedule(Step::Deal { index: index + 1 });
        } else {
            self.check_naturals();
        }
    }

    /// Checks both two-card hands for blackjack after the initial deal.
    fn check_naturals(&mut self) {
        let player = self.round.hands[0].is_natural();
        let dealer = self.round.dealer.is_blackjack();

        if let Some(natural) = Natural::from_deal(player, dealer) {
            debug!(?natural, "natural on the initial deal");
            self.round.natural = Some(natural);
            self.round.dealer.reveal_hole();
            self.notify_state();
            self.schedule(Step::AnnounceNatural);
        } else {
            self.round.state = GameState::PlayerTurn;
            self.notify_state();
            self.begin_hand();
        }
    }

    pub(super) fn announce_natural(&mut self) {
        if let Some(natural) = self.round.natural {
            self.announce(natural.announcement(), MESSAGE);
        }
        self.schedule(Step::EndRound);
    }
}
