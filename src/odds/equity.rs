use super::tally::Tally;
use crate::Percent;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use crate::cards::hole::Hole;
use crate::error::Error;
use crate::error::Result;
use crate::evaluation::strength::Strength;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Win and tie percentages of one hero hand against a field of random hands.
///
/// Built from a [`Tally`] of showdowns, which it keeps so callers can see
/// the sample size behind the estimate.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equity {
    win: Percent,
    tie: Percent,
    tally: Tally,
}

impl Equity {
    pub fn win(&self) -> Percent {
        self.win
    }
    pub fn tie(&self) -> Percent {
        self.tie
    }
    /// probability of not losing
    pub fn equity(&self) -> Percent {
        self.win + self.tie
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Monte Carlo estimate over `trials` random runouts against
    /// `opponents` random hole pairs, drawing from `rng` only.
    pub fn simulate<R: Rng + ?Sized>(
        hole: Hole,
        board: Board,
        live: &Deck,
        opponents: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let ref setup = Setup::new(hole, board, live, opponents, trials)?;
        let start = std::time::Instant::now();
        let mut deck = setup.live.clone();
        let tally = (0..trials)
            .map(|_| setup.trial(&mut deck, &mut *rng))
            .sum::<Tally>();
        log::debug!(
            "simulated {} on [{}] vs {} opponents in {:?}: {}",
            hole,
            board,
            opponents,
            start.elapsed(),
            tally
        );
        Ok(Self::from(tally))
    }

    /// Same estimate spread over the rayon pool. Trial `i` owns an RNG
    /// seeded from `(seed, i)`, so the result depends on `seed` alone and
    /// not on the number of threads.
    pub fn simulate_parallel(
        hole: Hole,
        board: Board,
        live: &Deck,
        opponents: usize,
        trials: usize,
        seed: u64,
    ) -> Result<Self> {
        let ref setup = Setup::new(hole, board, live, opponents, trials)?;
        let start = std::time::Instant::now();
        let tally = (0..trials as u64)
            .into_par_iter()
            .map(|i| SmallRng::seed_from_u64(seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
            .map(|mut rng| setup.trial(&mut setup.live.clone(), &mut rng))
            .sum::<Tally>();
        log::debug!(
            "simulated {} on [{}] vs {} opponents across {} threads in {:?}: {}",
            hole,
            board,
            opponents,
            rayon::current_num_threads(),
            start.elapsed(),
            tally
        );
        Ok(Self::from(tally))
    }

    /// Exact heads-up equity: every board completion against every
    /// opponent hole pair left in the live deck.
    pub fn exhaust(hole: Hole, board: Board, live: &Deck) -> Result<Self> {
        let ref setup = Setup::new(hole, board, live, 1, 1)?;
        let start = std::time::Instant::now();
        let blocked = Hand::from(setup.live.as_slice()).complement();
        let runouts = match setup.missing {
            0 => vec![Hand::empty()],
            n => HandIterator::from((n, blocked)).collect::<Vec<Hand>>(),
        };
        let tally = runouts
            .par_iter()
            .map(|&draw| {
                let public = Hand::add(setup.board, draw);
                let hero = Strength::from(Hand::add(setup.hole, public));
                HandIterator::from((2, Hand::add(blocked, draw)))
                    .map(|villain| Strength::from(Hand::add(public, villain)))
                    .map(|villain| Tally::from(hero.cmp(&villain)))
                    .sum::<Tally>()
            })
            .sum::<Tally>();
        log::debug!(
            "enumerated {} on [{}] heads up over {} runouts in {:?}: {}",
            hole,
            board,
            runouts.len(),
            start.elapsed(),
            tally
        );
        Ok(Self::from(tally))
    }
}

impl From<Tally> for Equity {
    fn from(tally: Tally) -> Self {
        match tally.trials {
            0 => Self::default(),
            n => Self {
                win: 100. * tally.wins as Percent / n as Percent,
                tie: 100. * tally.ties as Percent / n as Percent,
                tally,
            },
        }
    }
}

impl From<Ordering> for Tally {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Tally::win(),
            Ordering::Equal => Tally::tie(),
            Ordering::Less => Tally::loss(),
        }
    }
}

impl std::fmt::Display for Equity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "win {:>6.2}%  tie {:>6.2}%", self.win, self.tie)
    }
}

/// Validated inputs shared by every trial.
struct Setup {
    hole: Hand,
    board: Hand,
    live: Vec<Card>,
    missing: usize,
    opponents: usize,
}

impl Setup {
    fn new(hole: Hole, board: Board, live: &Deck, opponents: usize, trials: usize) -> Result<Self> {
        let seen = hole.join(board)?;
        let hole = Hand::from(hole);
        let board = Hand::from(board);
        let live = live.without(seen).cards().to_vec();
        let missing = Board::MAX - board.size();
        let needed = missing + 2 * opponents;
        if live.len() < needed {
            return Err(Error::InsufficientDeck {
                needed,
                available: live.len(),
            });
        }
        if trials == 0 {
            return Err(Error::NoTrials);
        }
        Ok(Self {
            hole,
            board,
            live,
            missing,
            opponents,
        })
    }

    /// Partially shuffle `deck` just far enough to fix this trial's cards:
    /// the board completion first, then two cards per opponent.
    fn trial<R: Rng + ?Sized>(&self, deck: &mut [Card], rng: &mut R) -> Tally {
        let needed = self.missing + 2 * self.opponents;
        let (drawn, _) = deck.partial_shuffle(rng, needed);
        let (runout, villains) = drawn.split_at(self.missing);
        let public = Hand::add(self.board, Hand::from(runout));
        let hero = Strength::from(Hand::add(self.hole, public));
        villains
            .chunks_exact(2)
            .map(|pair| Strength::from(Hand::add(public, Hand::from(pair))))
            .max()
            .map(|villain| Tally::from(hero.cmp(&villain)))
            .unwrap_or_else(Tally::win)
    }
}
