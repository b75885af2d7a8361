use super::*;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::evaluation::category::Category;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn spot(hole: &str, board: &str) -> (Hole, Board, Deck) {
    let hole = Hole::try_from(hole).unwrap();
    let board = Board::try_from(board).unwrap();
    let live = Deck::new().remaining(&Vec::from(Hand::add(Hand::from(hole), Hand::from(board))));
    (hole, board, live)
}

#[test]
fn simulation_converges_to_enumeration() {
    let (hole, board, ref live) = spot("Ah Kh", "2h 7h 9c Jd");
    let exact = Equity::exhaust(hole, board, live).unwrap();
    let mut rng = SmallRng::seed_from_u64(2024);
    let estimate = Equity::simulate(hole, board, live, 1, 20_000, &mut rng).unwrap();
    assert!((estimate.equity() - exact.equity()).abs() < 2.);
    assert!((estimate.win() - exact.win()).abs() < 2.);
}

#[test]
fn parallel_converges_to_enumeration() {
    let (hole, board, ref live) = spot("8s 8d", "Kc 5h 2s Td");
    let exact = Equity::exhaust(hole, board, live).unwrap();
    let estimate = Equity::simulate_parallel(hole, board, live, 1, 20_000, 99).unwrap();
    assert!((estimate.equity() - exact.equity()).abs() < 2.);
}

#[test]
fn dominated_hand_has_low_equity() {
    let (hole, board, ref live) = spot("7c 2d", "");
    let mut rng = SmallRng::seed_from_u64(5);
    let field = Equity::simulate(hole, board, live, 5, 3000, &mut rng).unwrap();
    let heads = Equity::simulate(hole, board, live, 1, 3000, &mut rng).unwrap();
    assert!(field.win() < heads.win());
    assert!(heads.win() < 50.);
}

#[test]
fn flop_royal_agrees_everywhere() {
    let (hole, board, ref live) = spot("Ah Kh", "Qh Jh Th");
    let current = crate::evaluate(Vec::from(Hand::add(Hand::from(hole), Hand::from(board)))).unwrap();
    assert_eq!(current.category(), Category::RoyalFlush);
    let outcomes = improvement(hole, board, live).unwrap();
    assert_eq!(outcomes.iter().map(|o| o.count).sum::<usize>(), 47 * 46 / 2);
    let mut rng = SmallRng::seed_from_u64(11);
    let equity = Equity::simulate(hole, board, live, 3, 1000, &mut rng).unwrap();
    assert_eq!(equity.win(), 100.);
}

#[test]
fn win_tie_loss_partition_trials() {
    let (hole, board, ref live) = spot("Qs Qd", "Qh 4c 9d");
    let mut rng = SmallRng::seed_from_u64(8);
    let equity = Equity::simulate(hole, board, live, 2, 3000, &mut rng).unwrap();
    let tally = equity.tally();
    assert_eq!(tally.wins + tally.ties + tally.losses(), 3000);
    assert!(equity.equity() <= 100.);
    assert!(equity.win() > 80.);
}

#[test]
fn preflop_default_trials() {
    let (hole, board, ref live) = spot("2c 2d", "");
    let a = Equity::simulate_parallel(hole, board, live, 1, crate::EQUITY_TRIALS, 3).unwrap();
    let b = Equity::simulate_parallel(hole, board, live, 1, crate::EQUITY_TRIALS, 3).unwrap();
    assert_eq!(a, b);
    assert!(a.equity() > 40. && a.equity() < 60.);
}
