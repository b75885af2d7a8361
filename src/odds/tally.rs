use std::ops::Add;

/// Raw showdown counts accumulated over trials or enumerated runouts.
///
/// Addition is commutative and associative, so tallies from any partition
/// of the work reduce to the same total.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    pub trials: u64,
    pub wins: u64,
    pub ties: u64,
}

impl Tally {
    pub fn win() -> Self {
        Self {
            trials: 1,
            wins: 1,
            ties: 0,
        }
    }
    pub fn tie() -> Self {
        Self {
            trials: 1,
            wins: 0,
            ties: 1,
        }
    }
    pub fn loss() -> Self {
        Self {
            trials: 1,
            wins: 0,
            ties: 0,
        }
    }
    pub fn losses(&self) -> u64 {
        self.trials - self.wins - self.ties
    }
}

impl Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            trials: self.trials + rhs.trials,
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Self::add)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} trials: {} won, {} tied, {} lost",
            self.trials,
            self.wins,
            self.ties,
            self.losses()
        )
    }
}
