use super::category::Category;
use crate::cards::rank::Rank;

/// A poker hand's value together with the ranks that define it.
///
/// Kickers live next to it in [`Strength`](super::strength::Strength).
/// Variants are declared weakest first so the derived Ord is the poker
/// order, which then compares the carried ranks left to right.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, same suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
    RoyalFlush,            // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOAK(_) => 2,
            Ranking::FourOAK(_) | Ranking::TwoPair(_, _) => 1,
            _ => 0,
        }
    }

    /// ranks still eligible as kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..)
            | Ranking::StraightFlush(..)
            | Ranking::Straight(..)
            | Ranking::RoyalFlush => 0,
        }
    }

    /// the defining ranks, most significant first
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => vec![hi, lo],
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => vec![r],
            Ranking::RoyalFlush => vec![Rank::Ace],
        }
    }

    pub fn category(&self) -> Category {
        Category::from(*self)
    }
}

impl From<Ranking> for Category {
    fn from(ranking: Ranking) -> Self {
        match ranking {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::Pair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOfAKind,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOfAKind,
            Ranking::StraightFlush(_) => Category::StraightFlush,
            Ranking::RoyalFlush => Category::RoyalFlush,
        }
    }
}

/// Human readable description, e.g. "Full House, Aces over Kings".
impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "High Card, {}", r.singular()),
            Ranking::OnePair(r) => write!(f, "Pair of {}", r.plural()),
            Ranking::TwoPair(hi, lo) => write!(f, "Two Pair, {} and {}", hi.plural(), lo.plural()),
            Ranking::ThreeOAK(r) => write!(f, "Three of a Kind, {}", r.plural()),
            Ranking::Straight(r) => write!(f, "Straight, {} high", r.singular()),
            Ranking::Flush(r) => write!(f, "Flush, {} high", r.singular()),
            Ranking::FullHouse(hi, lo) => write!(f, "Full House, {} over {}", hi.plural(), lo.plural()),
            Ranking::FourOAK(r) => write!(f, "Four of a Kind, {}", r.plural()),
            Ranking::StraightFlush(r) => write!(f, "Straight Flush, {} high", r.singular()),
            Ranking::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_order_is_category_order() {
        let weakest_to_strongest = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOAK(Rank::Two),
            Ranking::Straight(Rank::Five),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOAK(Rank::Two),
            Ranking::StraightFlush(Rank::Five),
            Ranking::RoyalFlush,
        ];
        assert!(weakest_to_strongest.windows(2).all(|w| w[0] < w[1]));
        assert!(weakest_to_strongest.windows(2).all(|w| w[0].category() < w[1].category()));
    }

    #[test]
    fn descriptions() {
        assert_eq!(Ranking::FullHouse(Rank::Ace, Rank::King).to_string(), "Full House, Aces over Kings");
        assert_eq!(Ranking::OnePair(Rank::Six).to_string(), "Pair of Sixes");
        assert_eq!(Ranking::Straight(Rank::Five).to_string(), "Straight, Five high");
    }
}
