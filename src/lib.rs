//! A Perudo/Dudo dice-bidding rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that enforces the full rule set: bid
//! legality, turn rotation, dudo and calza challenges, elimination and win
//! detection. It performs no I/O. Each call returns the [`Delivery`] list the
//! caller should forward to players, and dice are rolled by a [`HandDealer`]
//! the caller supplies.
//!
//! # Example
//!
//! ```
//! use dudo::{Action, Game, GameOptions, RandomDealer};
//!
//! let mut dealer = RandomDealer::new(42);
//! let (mut game, _) = Game::start(GameOptions::default(), &[1, 2, 3], &mut dealer).unwrap();
//! let deliveries = game.play_move(&mut dealer, 1, Action::outbid(2, 4));
//! assert!(!deliveries.is_empty());
//! assert_eq!(game.active_player(), Some(2));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod bid;
pub mod dice;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use action::Action;
pub use bid::{Bid, check_raise, face_frequency};
pub use dice::{Face, MAX_FACE, MIN_FACE, WILD_FACE};
pub use error::{BidError, MoveError, StartError};
pub use event::{Delivery, Event};
pub use game::{Game, GamePhase, PlayerId};
pub use hand::{Hand, HandDealer, RandomDealer};
pub use options::{GameOptions, GrowthLimit, WildRule};
pub use result::MoveOutcome;
