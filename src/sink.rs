//! Presentation sink notified by the engine.

use core::time::Duration;

use crate::card::Card;
use crate::result::RoundResult;
use crate::view::RoundSnapshot;

/// Whose hand a card was dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOwner {
    /// The player hand at this index.
    Player(usize),
    /// The dealer. `face_down` is set for the hole card while it is hidden.
    Dealer {
        /// Whether the card is dealt face down.
        face_down: bool,
    },
}

/// Receives notifications as the round progresses.
///
/// All methods default to doing nothing, so an implementation only overrides
/// what it renders. The sink sees borrowed or owned view data and can never
/// reach back into the round.
pub trait Sink {
    /// A card left the shoe for `owner`.
    fn card_dealt(&mut self, card: Card, owner: HandOwner) {
        let _ = (card, owner);
    }

    /// The round changed in a way worth redrawing.
    fn state_changed(&mut self, snapshot: &RoundSnapshot) {
        let _ = snapshot;
    }

    /// A message to show for roughly `display`.
    fn message(&mut self, text: &str, display: Duration) {
        let _ = (text, display);
    }

    /// The round was settled.
    fn round_result(&mut self, result: &RoundResult) {
        let _ = result;
    }
}

/// A sink that ignores every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSink;

impl Sink for NullSink {}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn card_dealt(&mut self, card: Card, owner: HandOwner) {
        (**self).card_dealt(card, owner);
    }

    fn state_changed(&mut self, snapshot: &RoundSnapshot) {
        (**self).state_changed(snapshot);
    }

    fn message(&mut self, text: &str, display: Duration) {
        (**self).message(text, display);
    }

    fn round_result(&mut self, result: &RoundResult) {
        (**self).round_result(result);
    }
}
