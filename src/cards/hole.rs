use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use crate::error::Error;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        let mut hand = self.0;
        let lo = hand.next().expect("two cards");
        let hi = hand.next().expect("two cards");
        [hi, lo]
    }
    /// hole and board as one set, provided they share no card
    pub fn join(&self, board: Board) -> Result<Hand, Error> {
        match Hand::from(*self).intersect(&Hand::from(board)).next() {
            Some(card) => Err(Error::DuplicateCard(card)),
            None => Ok(Hand::add(self.0, Hand::from(board))),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [hi, lo] = self.cards();
        write!(f, "{}{}", hi, lo)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must be distinct");
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self::from((*a, *b))),
            _ => Err(Error::Parse(format!(
                "hole needs two distinct cards: {:?}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_card_first() {
        let hole = Hole::try_from("2c Ah").unwrap();
        assert_eq!(hole.to_string(), "Ah2c");
    }

    #[test]
    fn rejects_pairs_of_the_same_card() {
        assert!(Hole::try_from("Ah Ah").is_err());
        assert!(Hole::try_from("Ah Kh Qh").is_err());
    }

    #[test]
    fn join_with_board() {
        let hole = Hole::try_from("Ah Kh").unwrap();
        let board = Board::try_from("Qh Jh 2c").unwrap();
        assert_eq!(hole.join(board).unwrap(), Hand::try_from("Ah Kh Qh Jh 2c").unwrap());
        assert_eq!(hole.join(Board::empty()).unwrap(), Hand::from(hole));
    }

    #[test]
    fn join_rejects_shared_card() {
        let hole = Hole::try_from("Ah Kh").unwrap();
        let board = Board::try_from("Ah 7h 9c").unwrap();
        assert_eq!(
            hole.join(board),
            Err(Error::DuplicateCard(Card::try_from("Ah").unwrap()))
        );
    }
}
