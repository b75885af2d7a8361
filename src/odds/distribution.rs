use crate::Percent;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::error::Error;
use crate::error::Result;
use crate::evaluation::category::Category;
use crate::evaluation::strength::Strength;

/// One row of an improvement distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub category: Category,
    pub count: usize,
    pub probability: Percent,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}{:>7.2}%", self.category, self.probability)
    }
}

/// Exact category counts over every way to finish the board.
///
/// The current category is that of hole + board alone, ranked by the
/// partial evaluator when fewer than five cards are known. Every unordered
/// completion drawn from the live deck is evaluated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    current: Category,
    counts: [usize; Category::COUNT],
    total: usize,
}

impl Distribution {
    pub fn current(&self) -> Category {
        self.current
    }
    pub fn total(&self) -> usize {
        self.total
    }
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.index()]
    }
    pub fn probability(&self, category: Category) -> Percent {
        match self.total {
            0 => 0.,
            n => 100. * self.count(category) as Percent / n as Percent,
        }
    }

    /// Categories at or above the current one that occur, plus the current
    /// one always, most likely first. Equal probabilities keep category order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        let mut outcomes = Category::all()
            .into_iter()
            .filter(|c| *c >= self.current)
            .filter(|c| *c == self.current || self.count(*c) > 0)
            .map(|category| Outcome {
                category,
                count: self.count(category),
                probability: self.probability(category),
            })
            .collect::<Vec<_>>();
        outcomes.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        outcomes
    }
}

impl<'a> TryFrom<(Hole, Board, &'a Deck)> for Distribution {
    type Error = Error;
    fn try_from((hole, board, live): (Hole, Board, &'a Deck)) -> Result<Self> {
        let start = std::time::Instant::now();
        let known = hole.join(board)?;
        let current = Strength::from(known).category();
        let blocked = Hand::union(Hand::from(live).complement(), known);
        let mut counts = [0usize; Category::COUNT];
        let total = match board.missing() {
            0 => {
                counts[current.index()] += 1;
                1
            }
            n => HandIterator::from((n, blocked))
                .map(|draw| Hand::add(known, draw))
                .map(Strength::from)
                .map(|strength| strength.category())
                .inspect(|category| counts[category.index()] += 1)
                .count(),
        };
        log::debug!(
            "enumerated {} completions of {} on [{}] in {:?}",
            total,
            hole,
            board,
            start.elapsed()
        );
        Ok(Self {
            current,
            counts,
            total,
        })
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for outcome in self.outcomes() {
            writeln!(f, "{}", outcome)?;
        }
        Ok(())
    }
}

/// Exact improvement probabilities for hole + board given the live deck.
pub fn improvement(hole: Hole, board: Board, live: &Deck) -> Result<Vec<Outcome>> {
    Distribution::try_from((hole, board, live)).map(|d| d.outcomes())
}
