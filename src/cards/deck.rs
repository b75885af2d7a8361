use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;
use rand::Rng;
use rand::seq::SliceRandom;

/// An ordered sequence of distinct cards.
///
/// `Deck::new()` is the canonical 52-card universe, suit-major. The
/// "live" deck of a simulation is the universe minus every card already
/// seen, obtained with [`Deck::remaining`]. Shuffling is an in-place
/// Fisher–Yates driven by whatever RNG the caller hands in; the deck never
/// reaches for a global random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates the full 52-card deck, 4 suits × 13 ranks.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .into_iter()
                .flat_map(|s| Rank::all().into_iter().map(move |r| Card::from((r, s))))
                .collect(),
        )
    }
    /// This deck without any card in `excluded`, order preserved.
    pub fn remaining(&self, excluded: &[Card]) -> Self {
        Self(remaining(&self.0, excluded))
    }
    /// Same as [`Deck::remaining`] with the exclusion set as a bitmask.
    pub fn without(&self, excluded: Hand) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|c| !excluded.contains(c))
                .collect(),
        )
    }
    /// Uniform in-place permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Removes and returns the top `n` cards, or None if fewer remain.
    pub fn deal(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.0.len() {
            None
        } else {
            Some(self.0.drain(..n).collect())
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

/// Set difference by structural equality: every card of `full` that does
/// not appear in `excluded`, in `full`'s order.
pub fn remaining(full: &[Card], excluded: &[Card]) -> Vec<Card> {
    full.iter()
        .copied()
        .filter(|card| !excluded.contains(card))
        .collect()
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<&Deck> for Hand {
    fn from(deck: &Deck) -> Self {
        deck.0.iter().copied().collect()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
