use crate::cards::card::Card;
use thiserror::Error;

/// Precondition failures of the evaluator and the odds engines.
///
/// Every variant is detected before any enumeration or random sampling
/// starts, so a returned error never comes with partial work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("need at least 5 distinct cards to form a hand, got {0}")]
    InsufficientCards(usize),

    #[error("live deck has {available} cards but the simulation needs {needed}")]
    InsufficientDeck { needed: usize, available: usize },

    #[error("{0} is dealt to both the hole and the board")]
    DuplicateCard(Card),

    #[error("a board holds at most 5 cards, got {0}")]
    OversizedBoard(usize),

    #[error("at least one trial is required")]
    NoTrials,

    #[error("{0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
