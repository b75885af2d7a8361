use super::rank::Rank;
use super::suit::Suit;
use crate::error::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Cards sort first by rank, then by suit within each
/// rank. Equality is structural on `(rank, suit)`.
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades)
/// or `"Tc"` (ten of clubs); `"10c"` is accepted as well. Use
/// [`Card::parse`] for several cards at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub const COUNT: usize = 52;

    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a rank-sorted deck 0..52
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i]).map_err(Error::Parse)?;
                let suit = Suit::try_from(&s[i..]).map_err(Error::Parse)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::Parse(format!("invalid card str: {:?}", s))),
        }
    }
}

impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace and commas are ignored. Each card is a rank (`2`-`9`,
    /// `T` or `10`, `J`, `Q`, `K`, `A`) followed by a suit letter.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        let chars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect::<Vec<char>>();
        let mut cards = Vec::with_capacity(chars.len() / 2);
        let mut i = 0;
        while i < chars.len() {
            let width = match &chars[i..] {
                ['1', '0', _, ..] => 3,
                _ => 2,
            };
            let token = chars[i..chars.len().min(i + width)]
                .iter()
                .collect::<String>();
            cards.push(Self::try_from(token.as_str())?);
            i += width;
        }
        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn parse_display_agree() {
        let card = Card::try_from("Ts").unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::S);
        assert_eq!(card.to_string(), "Ts");
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("Ah Kh, 10h 2c").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::from((Rank::Ace, Suit::H)),
                Card::from((Rank::King, Suit::H)),
                Card::from((Rank::Ten, Suit::H)),
                Card::from((Rank::Two, Suit::C)),
            ]
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(Card::parse("Ax"), Err(Error::Parse(_))));
        assert!(matches!(Card::parse("A"), Err(Error::Parse(_))));
        assert!(matches!(Card::parse("1h"), Err(Error::Parse(_))));
    }
}
