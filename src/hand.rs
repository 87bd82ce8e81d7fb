//! Player hands and the dealer that rolls them.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dice::{Face, MAX_FACE, MIN_FACE};

/// A player's concealed dice.
///
/// The number of dice a player still holds is the length of the hand, so a
/// hand with no dice is a player who has been knocked out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Face values, in the order they were rolled.
    dice: Vec<Face>,
}

impl Hand {
    /// Creates a hand holding the given dice.
    ///
    /// Note: This function does not validate the faces. Values outside 1..=6
    /// are accepted but will never match a legal bid.
    #[must_use]
    pub const fn new(dice: Vec<Face>) -> Self {
        Self { dice }
    }

    /// Creates a hand with no dice.
    #[must_use]
    pub const fn empty() -> Self {
        Self { dice: Vec::new() }
    }

    /// Returns the dice in the hand.
    #[must_use]
    pub fn dice(&self) -> &[Face] {
        &self.dice
    }

    /// Returns the number of dice the player still holds.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.dice.len() as u8
    }

    /// Returns whether the hand has no dice left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Counts the dice showing exactly `face`.
    #[must_use]
    pub fn count_face(&self, face: Face) -> usize {
        self.dice.iter().filter(|&&die| die == face).count()
    }
}

/// Source of freshly rolled hands.
///
/// The engine never rolls dice itself; every new hand comes from one of
/// these three calls. Swap in a scripted implementation to replay a game
/// deterministically.
pub trait HandDealer {
    /// Rolls a hand of `size` dice.
    fn deal(&mut self, size: u8) -> Hand;

    /// Takes one die away from `hand` and rolls the rest again.
    ///
    /// An empty hand stays empty.
    fn reduce(&mut self, hand: &Hand) -> Hand {
        self.deal(hand.remaining().saturating_sub(1))
    }

    /// Gives `hand` one more die and rolls them all again.
    fn grow(&mut self, hand: &Hand) -> Hand {
        self.deal(hand.remaining().saturating_add(1))
    }
}

impl<D: HandDealer + ?Sized> HandDealer for &mut D {
    fn deal(&mut self, size: u8) -> Hand {
        (**self).deal(size)
    }

    fn reduce(&mut self, hand: &Hand) -> Hand {
        (**self).reduce(hand)
    }

    fn grow(&mut self, hand: &Hand) -> Hand {
        (**self).grow(hand)
    }
}

/// A [`HandDealer`] backed by a seeded `ChaCha8` generator.
///
/// Two dealers created from the same seed roll the same sequence of hands.
#[derive(Debug, Clone)]
pub struct RandomDealer {
    rng: ChaCha8Rng,
}

impl RandomDealer {
    /// Creates a dealer with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use dudo::{HandDealer, RandomDealer};
    ///
    /// let mut dealer = RandomDealer::new(42);
    /// let hand = dealer.deal(5);
    /// assert_eq!(hand.remaining(), 5);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl HandDealer for RandomDealer {
    fn deal(&mut self, size: u8) -> Hand {
        let dice = (0..size)
            .map(|_| self.rng.random_range(MIN_FACE..=MAX_FACE))
            .collect();
        Hand::new(dice)
    }
}
