//! Error types for game operations.

use thiserror::Error;

use crate::event::Event;

/// Reasons a proposed bid does not supersede the standing bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    /// Face is not between 1 and 6.
    #[error("face is out of range")]
    FaceOutOfRange,
    /// Count is zero.
    #[error("bid count is zero")]
    ZeroCount,
    /// A round cannot be opened on the wild face.
    #[error("a round cannot open on the wild face")]
    WildOpening,
    /// Proposal repeats the standing bid.
    #[error("bid repeats the standing bid")]
    SameBid,
    /// Proposal does not raise the standing bid.
    #[error("bid does not raise the standing bid")]
    NotHigher,
}

/// Errors that can occur when a player acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Not this player's turn, or the game is over.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Bid rejected by the legality check.
    #[error("invalid bid: {0}")]
    InvalidBid(#[from] BidError),
    /// Challenge attempted before any bid was placed this round.
    #[error("no standing bid to challenge")]
    NoStandingBid,
}

impl MoveError {
    /// Returns the notice sent to the offending player.
    #[must_use]
    pub const fn notice(&self) -> Event {
        match self {
            Self::NotYourTurn => Event::UnauthorizedMove,
            Self::InvalidBid(_) => Event::InvalidBid,
            Self::NoStandingBid => Event::IllegalMove,
        }
    }
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The roster is empty.
    #[error("no players")]
    NoPlayers,
    /// Players would start with zero dice.
    #[error("players must start with at least one die")]
    NoDice,
    /// The same player id appears twice in the roster.
    #[error("duplicate player id")]
    DuplicatePlayer,
}
