pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod kicks;
pub use kicks::*;

pub mod ranking;
pub use ranking::*;

pub mod score;
pub use score::*;

pub mod strength;
pub use strength::*;

use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::error::Error;
use crate::error::Result;

/// Rank the best five-card hand within a set of at least five cards.
///
/// Cards are collapsed into a [`Hand`] first, so order and any split into
/// hole, board or extra draws is irrelevant.
pub fn evaluate(cards: impl IntoIterator<Item = Card>) -> Result<Strength> {
    let hand = cards.into_iter().collect::<Hand>();
    match hand.size() {
        n if n < 5 => Err(Error::InsufficientCards(n)),
        _ => Ok(Strength::from(hand)),
    }
}
