//! Notifications produced by the engine and the buffer that collects them.

extern crate alloc;

use alloc::vec::Vec;

use crate::game::PlayerId;
use crate::hand::Hand;
use crate::result::MoveOutcome;

/// A notification for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The game has started with this roster.
    GameStarted(Vec<PlayerId>),
    /// The recipient's hand for the new round.
    NewHand(Hand),
    /// It is the recipient's turn.
    Move,
    /// A player acted.
    LastMove {
        /// Who acted.
        actor: PlayerId,
        /// What they did.
        outcome: MoveOutcome,
    },
    /// Every hand still in play, in rotation order.
    RevealPlayersHands(Vec<(PlayerId, Hand)>),
    /// A player ran out of dice.
    Loser(PlayerId),
    /// A player won the game.
    Winner(PlayerId),
    /// The recipient acted out of turn.
    UnauthorizedMove,
    /// The recipient's bid did not raise the standing bid.
    InvalidBid,
    /// The recipient challenged with no bid standing.
    IllegalMove,
}

/// An event addressed to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delivery {
    /// The player the event is for.
    pub recipient: PlayerId,
    /// The event.
    pub event: Event,
}

/// Collects deliveries for a single engine call, in the order they happen.
#[derive(Debug, Default)]
pub(crate) struct Outbox {
    deliveries: Vec<Delivery>,
}

impl Outbox {
    pub(crate) const fn new() -> Self {
        Self {
            deliveries: Vec::new(),
        }
    }

    /// Queues `event` for `recipient`.
    pub(crate) fn send(&mut self, recipient: PlayerId, event: Event) {
        self.deliveries.push(Delivery { recipient, event });
    }

    /// Queues a copy of `event` for every player in `roster`, in roster order.
    pub(crate) fn broadcast(&mut self, roster: &[PlayerId], event: &Event) {
        self.deliveries
            .extend(roster.iter().map(|&recipient| Delivery {
                recipient,
                event: event.clone(),
            }));
    }

    pub(crate) fn into_deliveries(self) -> Vec<Delivery> {
        self.deliveries
    }
}
