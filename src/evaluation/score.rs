use super::category::Category;
use super::strength::Strength;
use crate::CATEGORY_BAND;

/// Integer packing of a [`Strength`], comparable with plain `<`.
///
/// The category index selects a band of width `CATEGORY_BAND`; inside it the
/// defining ranks followed by the kickers are packed as five base-13 digits,
/// most significant first, zero padded. The largest tiebreak (all aces) is
/// 371_292, so bands never overlap.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score(u32);

impl Score {
    const DIGITS: usize = 5;
    const BASE: u32 = 13;

    pub fn category(&self) -> Category {
        Category::from((self.0 / CATEGORY_BAND) as usize)
    }
    pub fn tiebreak(&self) -> u32 {
        self.0 % CATEGORY_BAND
    }
}

impl From<Strength> for Score {
    fn from(strength: Strength) -> Self {
        let digits = strength
            .ranking()
            .ranks()
            .into_iter()
            .chain(strength.kickers().ranks())
            .map(|r| r as u32)
            .chain(std::iter::repeat(0))
            .take(Self::DIGITS)
            .fold(0u32, |acc, d| acc * Self::BASE + d);
        Self(strength.category().index() as u32 * CATEGORY_BAND + digits)
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
