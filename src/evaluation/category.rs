/// Hand category, strictly increasing in strength.
///
/// Unlike [`Ranking`](super::ranking::Ranking) this carries no ranks, which
/// makes it the key for tallying distributions.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const COUNT: usize = 10;

    pub const fn all() -> [Category; 10] {
        [
            Category::HighCard,
            Category::Pair,
            Category::TwoPair,
            Category::ThreeOfAKind,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOfAKind,
            Category::StraightFlush,
            Category::RoyalFlush,
        ]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<usize> for Category {
    fn from(n: usize) -> Self {
        match Self::all().get(n) {
            Some(category) => *category,
            None => unreachable!("invalid category index: {}", n),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "High Card"),
            Category::Pair => write!(f, "Pair"),
            Category::TwoPair => write!(f, "Two Pair"),
            Category::ThreeOfAKind => write!(f, "Three of a Kind"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "Full House"),
            Category::FourOfAKind => write!(f, "Four of a Kind"),
            Category::StraightFlush => write!(f, "Straight Flush"),
            Category::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip_and_order() {
        for (i, category) in Category::all().into_iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from(i), category);
        }
        assert!(Category::all().windows(2).all(|w| w[0] < w[1]));
    }
}
