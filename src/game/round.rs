use alloc::vec::Vec;

use crate::event::{Event, Outbox};
use crate::hand::{Hand, HandDealer};

use super::{Game, HashMap, PlayerId, turn};

impl Game {
    /// Returns every hand still in play, in turn order.
    pub(super) fn revealed_hands(&self) -> Vec<(PlayerId, Hand)> {
        self.remaining
            .iter()
            .filter_map(|&id| self.hands.get(&id).map(|hand| (id, hand.clone())))
            .collect()
    }

    /// Closes a round after a challenge: reveal, knock out empty hands, then
    /// either crown the last player standing or deal the next round.
    pub(super) fn end_round<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        next_actor: PlayerId,
        revealed: Vec<(PlayerId, Hand)>,
        outbox: &mut Outbox,
    ) {
        outbox.broadcast(&self.players, &Event::RevealPlayersHands(revealed));

        let seating = self.remaining.clone();
        self.eliminate(outbox);

        if let [winner] = self.remaining[..] {
            self.finish(winner, outbox);
            return;
        }

        let opener = turn::successor_in(&seating, next_actor, |id| self.remaining.contains(&id))
            .or_else(|| self.remaining.first().copied());
        if let Some(opener) = opener {
            self.open_round(dealer, opener, outbox);
        }
    }

    /// Removes every player with no dice left.
    fn eliminate(&mut self, outbox: &mut Outbox) {
        let knocked_out: Vec<PlayerId> = self
            .remaining
            .iter()
            .copied()
            .filter(|id| self.hands.get(id).is_none_or(Hand::is_empty))
            .collect();

        for id in knocked_out {
            self.remaining.retain(|&player| player != id);
            self.hands.remove(&id);
            tracing::debug!(player = id, "player eliminated");
            outbox.broadcast(&self.players, &Event::Loser(id));
        }
    }

    /// Deals fresh hands at each player's current size, clears the bid and
    /// prompts `opener`.
    pub(super) fn open_round<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        opener: PlayerId,
        outbox: &mut Outbox,
    ) {
        let mut hands = HashMap::with_capacity(self.remaining.len());

        for &player in &self.remaining {
            let size = self
                .hands
                .get(&player)
                .map_or(self.options.max_dice, Hand::remaining);
            let hand = dealer.deal(size);
            outbox.send(player, Event::NewHand(hand.clone()));
            hands.insert(player, hand);
        }

        self.hands = hands;
        self.standing_bid = None;
        self.active = Some(opener);
        tracing::debug!(opener, players = self.remaining.len(), "round opened");

        outbox.send(opener, Event::Move);
    }

    /// Ends the game with `winner` as the last player standing.
    pub(super) fn finish(&mut self, winner: PlayerId, outbox: &mut Outbox) {
        self.active = None;
        self.standing_bid = None;
        self.hands.clear();
        tracing::debug!(winner, "game finished");

        outbox.broadcast(&self.players, &Event::Winner(winner));
    }
}
