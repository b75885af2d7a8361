use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use crate::error::Error;

/// The community cards revealed so far, at most five.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default)]
pub struct Board(Hand);

impl Board {
    pub const MAX: usize = 5;

    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// board cards still to come before the river is complete
    pub fn missing(&self) -> usize {
        Self::MAX - self.size()
    }
    /// None for the 1- and 2-card boards no deal ever stops at
    pub fn street(&self) -> Option<Street> {
        Street::of(self.size())
    }
}

impl TryFrom<Hand> for Board {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n > Self::MAX => Err(Error::OversizedBoard(n)),
            _ => Ok(Self(hand)),
        }
    }
}
impl TryFrom<&[Card]> for Board {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Self::try_from(Hand::from(cards))
    }
}
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
