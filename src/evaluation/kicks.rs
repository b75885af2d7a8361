use crate::cards::rank::Rank;

/// A hand's kicker cards as a 13-bit rank mask.
///
/// Within one [`Ranking`](super::ranking::Ranking) every hand of five or
/// more cards carries the same number of kickers, so comparing the masks
/// as integers compares the kickers highest first.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    /// kicker ranks, highest first
    pub fn ranks(&self) -> Vec<Rank> {
        let mut ranks = Vec::<Rank>::from(*self);
        ranks.reverse();
        ranks
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, ascending
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.ranks() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
