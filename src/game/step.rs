//! Automatic steps between player decisions.

use core::time::Duration;

use tracing::trace;

use crate::options::Pacing;
use crate::sink::Sink;

use super::Game;

pub(super) const SHORT_MESSAGE: Duration = Duration::from_millis(1000);
pub(super) const MESSAGE: Duration = Duration::from_millis(2000);
pub(super) const LONG_MESSAGE: Duration = Duration::from_millis(3000);

/// A suspension point in an automatic sequence.
///
/// At most one step is pending at a time and each step schedules at most one
/// successor, so a sequence always runs to its natural end one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Deal card `index` (0 to 3) of the initial player, dealer, player, dealer sequence.
    Deal {
        /// Position in the initial deal.
        index: u8,
    },
    /// Announce the natural found on the initial deal.
    AnnounceNatural,
    /// Settle the round.
    EndRound,
    /// Move on from the active hand after it resolved on its own.
    FinishHand,
    /// Let the dealer make one draw-or-stand decision.
    DealerDraw,
    /// Clear the table and return to betting.
    Reset,
}

impl Step {
    /// Returns the presentation pause that should precede this step.
    #[must_use]
    pub const fn delay(&self, pacing: &Pacing) -> Duration {
        match self {
            Self::Deal { .. } => pacing.deal_card,
            Self::AnnounceNatural => pacing.natural_reveal,
            Self::EndRound => pacing.natural_settle,
            Self::FinishHand => pacing.hand_advance,
            Self::DealerDraw => pacing.dealer_draw,
            Self::Reset => pacing.round_reset,
        }
    }
}

impl<S: Sink> Game<S> {
    /// Runs the pending step, if any, and returns it.
    ///
    /// # Panics
    ///
    /// Panics if the step has to draw from an empty shoe, which can only
    /// happen when refilling is disabled.
    pub fn step(&mut self) -> Option<Step> {
        let step = self.pending.take()?;
        trace!(?step, state = ?self.round.state, "running step");

        match step {
            Step::Deal { index } => self.deal_initial_card(index),
            Step::AnnounceNatural => self.announce_natural(),
            Step::EndRound => self.end_round(),
            Step::FinishHand => self.finish_hand(),
            Step::DealerDraw => self.dealer_draw(),
            Step::Reset => self.reset_round(),
        }

        Some(step)
    }

    /// Runs steps until the game waits for player input, ignoring pacing.
    ///
    /// Returns the number of steps run.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Game::step`].
    pub fn run_pending(&mut self) -> usize {
        let mut count = 0;
        while self.step().is_some() {
            count += 1;
        }
        count
    }
}
