//! Bids, the raise rules between them, and ground-truth face counts.

use crate::dice::{Face, WILD_FACE, is_valid_face, is_wild};
use crate::error::BidError;
use crate::hand::Hand;
use crate::options::WildRule;

/// A claim that at least `count` dice showing `face` are in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bid {
    /// Number of dice claimed.
    pub count: u8,
    /// Face value claimed.
    pub face: Face,
}

impl Bid {
    /// Creates a new bid.
    ///
    /// Note: This function does not validate the bid; see [`check_raise`].
    #[must_use]
    pub const fn new(count: u8, face: Face) -> Self {
        Self { count, face }
    }
}

/// Checks whether `proposed` may replace `standing`.
///
/// `standing` is `None` when no bid has been placed yet this round.
///
/// # Errors
///
/// Returns the first rule the proposal breaks:
/// 1. the face must be 1..=6 and the count at least 1;
/// 2. a round may not open on the wild face;
/// 3. the proposal must differ from the standing bid;
/// 4. it must raise the standing bid under the rule for its face switch.
///
/// # Example
///
/// ```
/// use dudo::{Bid, BidError, check_raise};
///
/// assert!(check_raise(None, Bid::new(1, 3)).is_ok());
/// assert_eq!(check_raise(None, Bid::new(1, 1)), Err(BidError::WildOpening));
/// // five threes can drop to three wilds
/// assert!(check_raise(Some(Bid::new(5, 3)), Bid::new(3, 1)).is_ok());
/// ```
pub fn check_raise(standing: Option<Bid>, proposed: Bid) -> Result<(), BidError> {
    if !is_valid_face(proposed.face) {
        return Err(BidError::FaceOutOfRange);
    }
    if proposed.count < 1 {
        return Err(BidError::ZeroCount);
    }

    let Some(standing) = standing else {
        return if is_wild(proposed.face) {
            Err(BidError::WildOpening)
        } else {
            Ok(())
        };
    };

    if standing == proposed {
        return Err(BidError::SameBid);
    }

    let c0 = u16::from(standing.count);
    let c1 = u16::from(proposed.count);
    let f0 = standing.face;
    let f1 = proposed.face;

    let raises = match (is_wild(f0), is_wild(f1)) {
        (true, true) => c1 > c0,
        (false, true) => c1 >= c0.div_ceil(2),
        (true, false) => c1 > c0 * 2,
        (false, false) => (c1 >= c0 && f1 > f0) || (c1 > c0 && f1 >= f0),
    };

    if raises {
        Ok(())
    } else {
        Err(BidError::NotHigher)
    }
}

/// Counts the dice across `hands` that satisfy a bid on `face`.
///
/// Under [`WildRule::FaceOnly`] only exact matches count; wild dice are not
/// added to other faces.
pub fn face_frequency<'a, I>(hands: I, face: Face, wilds: WildRule) -> usize
where
    I: IntoIterator<Item = &'a Hand>,
{
    hands
        .into_iter()
        .map(|hand| match wilds {
            WildRule::CountTowardAll if !is_wild(face) => {
                hand.count_face(face) + hand.count_face(WILD_FACE)
            }
            _ => hand.count_face(face),
        })
        .sum()
}
