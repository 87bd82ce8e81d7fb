//! Die faces and face constants.

/// A single die face value (1..=6 for a valid die).
pub type Face = u8;

/// Lowest face on a die.
pub const MIN_FACE: Face = 1;

/// Highest face on a die.
pub const MAX_FACE: Face = 6;

/// The wild face ("aces" / "pacos").
///
/// Bids moving onto or off this face follow their own raise ratios, and a
/// round may not be opened on it.
pub const WILD_FACE: Face = 1;

/// Returns whether `face` is a face that can appear on a die.
#[must_use]
pub const fn is_valid_face(face: Face) -> bool {
    face >= MIN_FACE && face <= MAX_FACE
}

/// Returns whether `face` is the wild face.
#[must_use]
pub const fn is_wild(face: Face) -> bool {
    face == WILD_FACE
}
