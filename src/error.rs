//! Error types for game operations.
//!
//! Every error is returned before anything is mutated, so a rejected call
//! leaves the round exactly as it was and emits no notification.

use thiserror::Error;

/// Errors that can occur while placing or removing chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The bet would exceed the table maximum.
    #[error("bet would exceed the table maximum")]
    AboveMaximum,
    /// More chips removed than are on the table.
    #[error("not enough chips on the table")]
    NotEnoughOnTable,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No chips have been placed.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// An automatic step has to run before the next action.
    #[error("an automatic step is still pending")]
    StepPending,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum number of hands reached.
    #[error("maximum number of hands reached")]
    MaxHandsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}
