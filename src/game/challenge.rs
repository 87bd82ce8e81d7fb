use crate::error::MoveError;
use crate::event::{Event, Outbox};
use crate::hand::HandDealer;
use crate::options::GrowthLimit;
use crate::result::MoveOutcome;

use super::{Game, PlayerId, turn};

/// How a challenge changes the affected player's dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DieChange {
    Lose,
    Gain,
}

/// A resolved challenge, before it is applied.
#[derive(Debug, Clone, Copy)]
struct Resolution {
    outcome: MoveOutcome,
    affected: PlayerId,
    change: DieChange,
    /// Opens the next round, if still in the game.
    next_actor: PlayerId,
}

impl Game {
    /// Resolves a dudo: the bid is too high if fewer dice match than claimed.
    ///
    /// On success the bidder (the player before `actor`) loses a die and
    /// opens the next round; otherwise `actor` loses a die and opens it.
    pub(super) fn dudo<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        actor: PlayerId,
        outbox: &mut Outbox,
    ) -> Result<(), MoveError> {
        let bid = self.standing_bid.ok_or(MoveError::NoStandingBid)?;
        let actual = self.face_frequency(bid.face);
        let success = actual < usize::from(bid.count);

        let bidder = turn::previous(&self.remaining, actor).unwrap_or(actor);
        let loser = if success { bidder } else { actor };
        tracing::debug!(actor, actual, count = bid.count, success, "dudo called");

        self.resolve(
            dealer,
            actor,
            Resolution {
                outcome: MoveOutcome::Dudo { success },
                affected: loser,
                change: DieChange::Lose,
                next_actor: loser,
            },
            outbox,
        );
        Ok(())
    }

    /// Resolves a calza: `actor` gains a die on an exact count and loses one
    /// otherwise. `actor` opens the next round either way.
    pub(super) fn calza<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        actor: PlayerId,
        outbox: &mut Outbox,
    ) -> Result<(), MoveError> {
        let bid = self.standing_bid.ok_or(MoveError::NoStandingBid)?;
        let actual = self.face_frequency(bid.face);
        let success = actual == usize::from(bid.count);
        tracing::debug!(actor, actual, count = bid.count, success, "calza called");

        self.resolve(
            dealer,
            actor,
            Resolution {
                outcome: MoveOutcome::Calza { success },
                affected: actor,
                change: if success {
                    DieChange::Gain
                } else {
                    DieChange::Lose
                },
                next_actor: actor,
            },
            outbox,
        );
        Ok(())
    }

    fn resolve<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        actor: PlayerId,
        resolution: Resolution,
        outbox: &mut Outbox,
    ) {
        // Hands are shown as they were when the challenge was made.
        let revealed = self.revealed_hands();

        self.change_dice(dealer, resolution.affected, resolution.change);

        outbox.broadcast(
            &self.players,
            &Event::LastMove {
                actor,
                outcome: resolution.outcome,
            },
        );

        self.end_round(dealer, resolution.next_actor, revealed, outbox);
    }

    fn change_dice<D: HandDealer>(&mut self, dealer: &mut D, player: PlayerId, change: DieChange) {
        let Some(hand) = self.hands.get(&player) else {
            return;
        };

        let capped = self.options.growth == GrowthLimit::CapAtMax
            && hand.remaining() >= self.options.max_dice;
        let updated = match change {
            DieChange::Lose => dealer.reduce(hand),
            DieChange::Gain if capped => dealer.deal(hand.remaining()),
            DieChange::Gain => dealer.grow(hand),
        };

        tracing::debug!(
            player,
            from = hand.remaining(),
            to = updated.remaining(),
            "dice changed"
        );
        self.hands.insert(player, updated);
    }
}
