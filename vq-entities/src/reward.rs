use crate::id::Id;

/// Rarity of a reward, `1..=10`. Lower values are more common and win
/// more often; the selection weight is `11 - rarity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RarityLevel(u8);

impl RarityLevel {
    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(10)
    }

    pub fn new(level: u8) -> Option<Self> {
        let level = Self(level);
        level.is_valid().then_some(level)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }

    pub fn clamp(self) -> Self {
        Self(self.0.clamp(Self::min().0, Self::max().0))
    }

    /// Inverse weight used for the roulette-wheel draw. Fixed formula,
    /// not configurable.
    pub const fn selection_weight(self) -> u32 {
        11 - self.0 as u32
    }
}

impl From<RarityLevel> for u8 {
    fn from(from: RarityLevel) -> Self {
        from.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    pub id: Id,
    pub wheel_id: Id,
    pub name: String,
    pub rarity: RarityLevel,
    pub active: bool,
    /// Optional redemption payload shown to the winner.
    pub code: Option<String>,
    pub link: Option<String>,
}
