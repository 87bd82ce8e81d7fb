//! Game configuration options.

/// How far a successful calza may grow a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrowthLimit {
    /// A hand never grows past the starting number of dice.
    ///
    /// A player already at the cap keeps their count and is dealt a fresh
    /// hand of the same size.
    #[default]
    CapAtMax,
    /// A hand may grow without limit.
    Unbounded,
}

/// Which dice count toward a bid when a challenge is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum WildRule {
    /// Only dice showing exactly the bid face count.
    #[default]
    FaceOnly,
    /// Wild dice also count toward every other face.
    CountTowardAll,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use dudo::{GameOptions, GrowthLimit};
///
/// let options = GameOptions::default()
///     .with_max_dice(6)
///     .with_growth(GrowthLimit::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    /// Number of dice every player starts with.
    pub max_dice: u8,
    /// Cap applied when a calza succeeds.
    pub growth: GrowthLimit,
    /// Counting rule for wild dice.
    pub wilds: WildRule,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_dice: 5,
            growth: GrowthLimit::CapAtMax,
            wilds: WildRule::FaceOnly,
        }
    }
}

impl GameOptions {
    /// Sets the number of dice each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use dudo::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_dice(3);
    /// assert_eq!(options.max_dice, 3);
    /// ```
    #[must_use]
    pub const fn with_max_dice(mut self, max_dice: u8) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Sets how far a successful calza may grow a hand.
    ///
    /// # Example
    ///
    /// ```
    /// use dudo::{GameOptions, GrowthLimit};
    ///
    /// let options = GameOptions::default().with_growth(GrowthLimit::Unbounded);
    /// assert_eq!(options.growth, GrowthLimit::Unbounded);
    /// ```
    #[must_use]
    pub const fn with_growth(mut self, growth: GrowthLimit) -> Self {
        self.growth = growth;
        self
    }

    /// Sets the counting rule for wild dice.
    ///
    /// # Example
    ///
    /// ```
    /// use dudo::{GameOptions, WildRule};
    ///
    /// let options = GameOptions::default().with_wilds(WildRule::CountTowardAll);
    /// assert_eq!(options.wilds, WildRule::CountTowardAll);
    /// ```
    #[must_use]
    pub const fn with_wilds(mut self, wilds: WildRule) -> Self {
        self.wilds = wilds;
        self
    }
}
