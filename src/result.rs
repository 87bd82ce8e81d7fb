//! Move outcomes announced to the table.

use crate::bid::Bid;

/// What happened when a player acted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The player raised to this bid.
    Outbid(Bid),
    /// The player called calza.
    Calza {
        /// Whether the bid matched the true count exactly.
        success: bool,
    },
    /// The player called dudo.
    Dudo {
        /// Whether the bid overstated the true count.
        success: bool,
    },
}
