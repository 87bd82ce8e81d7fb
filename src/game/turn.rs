//! Circular seat lookup over the players still in the game.

use super::PlayerId;

/// Returns the player after `current`, wrapping to the first player.
///
/// Returns `None` if `current` is not in `order`.
pub(super) fn next(order: &[PlayerId], current: PlayerId) -> Option<PlayerId> {
    let index = order.iter().position(|&id| id == current)?;
    order.get((index + 1) % order.len()).copied()
}

/// Returns the player before `current`, wrapping to the last player.
///
/// Returns `None` if `current` is not in `order`.
pub(super) fn previous(order: &[PlayerId], current: PlayerId) -> Option<PlayerId> {
    let index = order.iter().position(|&id| id == current)?;
    let len = order.len();
    order.get((index + len - 1) % len).copied()
}

/// Returns the first player at or after `from` in `order` that `survives`.
///
/// Used to find who opens a round when the player due to open it has just
/// been knocked out.
pub(super) fn successor_in(
    order: &[PlayerId],
    from: PlayerId,
    survives: impl Fn(PlayerId) -> bool,
) -> Option<PlayerId> {
    let start = order.iter().position(|&id| id == from)?;
    let len = order.len();
    (0..len)
        .map(|offset| order[(start + offset) % len])
        .find(|&id| survives(id))
}
