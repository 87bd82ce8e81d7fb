//! Game state types.

/// Opaque player identifier supplied by the caller.
pub type PlayerId = u32;

/// Phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// A fresh round with no bid yet; only an opening bid is accepted.
    RoundOpen,
    /// A bid stands; it can be raised or challenged.
    Bidding,
    /// One player is left and the game is over.
    Finished,
}
