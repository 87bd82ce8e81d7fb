//! Actions a player can take on their turn.

use crate::bid::Bid;

/// A player's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Raise the standing bid.
    Outbid(Bid),
    /// Claim the standing bid is exactly right.
    Calza,
    /// Claim the standing bid is too high.
    Dudo,
}

impl Action {
    /// Shorthand for [`Action::Outbid`].
    #[must_use]
    pub const fn outbid(count: u8, face: u8) -> Self {
        Self::Outbid(Bid::new(count, face))
    }

    /// Returns whether the action challenges the standing bid.
    #[must_use]
    pub const fn is_challenge(&self) -> bool {
        matches!(self, Self::Calza | Self::Dudo)
    }
}
