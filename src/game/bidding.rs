use crate::bid::{Bid, check_raise};
use crate::error::MoveError;
use crate::event::{Event, Outbox};
use crate::result::MoveOutcome;

use super::{Game, PlayerId, turn};

impl Game {
    /// Replaces the standing bid and passes the turn on.
    pub(super) fn outbid(
        &mut self,
        actor: PlayerId,
        bid: Bid,
        outbox: &mut Outbox,
    ) -> Result<(), MoveError> {
        check_raise(self.standing_bid, bid)?;

        self.standing_bid = Some(bid);
        tracing::debug!(actor, count = bid.count, face = bid.face, "bid raised");

        outbox.broadcast(
            &self.players,
            &Event::LastMove {
                actor,
                outcome: MoveOutcome::Outbid(bid),
            },
        );

        if let Some(next) = turn::next(&self.remaining, actor) {
            self.active = Some(next);
            outbox.send(next, Event::Move);
        }

        Ok(())
    }
}
