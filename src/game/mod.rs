//! Game engine and state management.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::action::Action;
use crate::bid::{self, Bid, check_raise};
use crate::error::{MoveError, StartError};
use crate::event::{Delivery, Event, Outbox};
use crate::hand::{Hand, HandDealer};
use crate::options::GameOptions;

mod bidding;
mod challenge;
mod round;
pub mod state;
mod turn;

pub use state::{GamePhase, PlayerId};

/// A dice-bidding game between a fixed roster of players.
///
/// `Game` holds only durable state. Every call that changes it returns the
/// notifications it produced, in the order they happened; delivering them is
/// up to the caller. Dice come from the [`HandDealer`] passed to each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Full roster, in seating order. Never changes after start.
    players: Vec<PlayerId>,
    /// Players still holding dice, in seating order.
    remaining: Vec<PlayerId>,
    /// Player whose move is expected. `None` once the game is over.
    active: Option<PlayerId>,
    /// Bid to beat. `None` until someone opens the round.
    standing_bid: Option<Bid>,
    /// Hands of the remaining players.
    hands: HashMap<PlayerId, Hand>,
}

impl Game {
    /// Starts a game: deals every player `max_dice` dice and prompts the
    /// first player in `players` to open the round.
    ///
    /// A single-player roster finishes at once with that player as winner.
    ///
    /// # Errors
    ///
    /// Returns an error if `players` is empty or repeats an id, or if
    /// `options.max_dice` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dudo::{Event, Game, GameOptions, RandomDealer};
    ///
    /// let mut dealer = RandomDealer::new(7);
    /// let (game, deliveries) = Game::start(GameOptions::default(), &[1, 2], &mut dealer).unwrap();
    /// assert_eq!(game.active_player(), Some(1));
    /// assert_eq!(deliveries.last().map(|d| &d.event), Some(&Event::Move));
    /// ```
    pub fn start<D: HandDealer>(
        options: GameOptions,
        players: &[PlayerId],
        dealer: &mut D,
    ) -> Result<(Self, Vec<Delivery>), StartError> {
        let Some(&first) = players.first() else {
            return Err(StartError::NoPlayers);
        };
        if options.max_dice == 0 {
            return Err(StartError::NoDice);
        }
        if players
            .iter()
            .enumerate()
            .any(|(index, id)| players[..index].contains(id))
        {
            return Err(StartError::DuplicatePlayer);
        }

        let mut game = Self {
            options,
            players: players.to_vec(),
            remaining: players.to_vec(),
            active: None,
            standing_bid: None,
            hands: HashMap::new(),
        };

        let mut outbox = Outbox::new();
        outbox.broadcast(&game.players, &Event::GameStarted(game.players.clone()));
        tracing::debug!(
            players = players.len(),
            max_dice = options.max_dice,
            "game started"
        );

        if game.remaining.len() == 1 {
            game.finish(first, &mut outbox);
        } else {
            game.open_round(dealer, first, &mut outbox);
        }

        Ok((game, outbox.into_deliveries()))
    }

    /// Applies `action` on behalf of `actor`.
    ///
    /// A rejected move leaves the game untouched and produces a single
    /// notice for `actor`: [`Event::UnauthorizedMove`] when it is not their
    /// turn (or the game is over), [`Event::InvalidBid`] for a bid that does
    /// not raise the standing one, and [`Event::IllegalMove`] for a
    /// challenge with no bid standing.
    pub fn play_move<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        actor: PlayerId,
        action: Action,
    ) -> Vec<Delivery> {
        let mut outbox = Outbox::new();

        if let Err(err) = self.apply(dealer, actor, action, &mut outbox) {
            tracing::trace!(actor, %err, "move rejected");
            outbox.send(actor, err.notice());
        }

        outbox.into_deliveries()
    }

    fn apply<D: HandDealer>(
        &mut self,
        dealer: &mut D,
        actor: PlayerId,
        action: Action,
        outbox: &mut Outbox,
    ) -> Result<(), MoveError> {
        self.ensure_turn(actor)?;

        match action {
            Action::Outbid(bid) => self.outbid(actor, bid, outbox),
            Action::Calza => self.calza(dealer, actor, outbox),
            Action::Dudo => self.dudo(dealer, actor, outbox),
        }
    }

    fn ensure_turn(&self, actor: PlayerId) -> Result<(), MoveError> {
        if self.active == Some(actor) {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn)
        }
    }

    /// Checks whether `actor` may play `action` right now, without playing it.
    ///
    /// # Errors
    ///
    /// Returns the same error [`Game::play_move`] would turn into a notice.
    pub fn check_move(&self, actor: PlayerId, action: &Action) -> Result<(), MoveError> {
        self.ensure_turn(actor)?;

        match action {
            Action::Outbid(bid) => check_raise(self.standing_bid, *bid)?,
            Action::Calza | Action::Dudo => {
                if self.standing_bid.is_none() {
                    return Err(MoveError::NoStandingBid);
                }
            }
        }

        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the full roster in seating order.
    #[must_use]
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Returns the players still in the game, in turn order.
    #[must_use]
    pub fn remaining_players(&self) -> &[PlayerId] {
        &self.remaining
    }

    /// Returns the player whose move is expected.
    ///
    /// Returns `None` once the game is over.
    #[must_use]
    pub const fn active_player(&self) -> Option<PlayerId> {
        self.active
    }

    /// Returns the bid to beat, if one has been placed this round.
    #[must_use]
    pub const fn standing_bid(&self) -> Option<Bid> {
        self.standing_bid
    }

    /// Returns the hand of a player still in the game.
    #[must_use]
    pub fn hand(&self, player_id: PlayerId) -> Option<&Hand> {
        self.hands.get(&player_id)
    }

    /// Returns the number of dice in play across all hands.
    #[must_use]
    pub fn total_dice(&self) -> usize {
        self.hands.values().map(|hand| hand.dice().len()).sum()
    }

    /// Returns the true count of dice satisfying a bid on `face`.
    ///
    /// This is hidden information; players only learn it from a reveal.
    #[must_use]
    pub fn face_frequency(&self, face: u8) -> usize {
        bid::face_frequency(
            self.remaining.iter().filter_map(|id| self.hands.get(id)),
            face,
            self.options.wilds,
        )
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        match (self.active, self.standing_bid) {
            (None, _) => GamePhase::Finished,
            (Some(_), None) => GamePhase::RoundOpen,
            (Some(_), Some(_)) => GamePhase::Bidding,
        }
    }

    /// Returns whether the game is over.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.active.is_none()
    }

    /// Returns the winner once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.remaining.as_slice() {
            [winner] if self.is_finished() => Some(*winner),
            _ => None,
        }
    }
}
