use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// A lazy evaluator for a hand's strength.
///
/// Construction tallies the hand once into 13 rank counts, 4 per-suit rank
/// masks and the all-ranks mask. Each `find_*` probe then answers from those
/// tables with a few bit operations, and [`Evaluator::find_ranking`] tries
/// them from the most to the least specific category, stopping at the
/// first hit. Works on any non-empty set; sets smaller than five simply
/// cannot reach the straight or flush probes.
pub struct Evaluator {
    counts: [u8; 13],
    suits: [u16; 4],
    ranks: u16,
    flush: Option<Suit>,
}

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        let mut counts = [0u8; 13];
        for card in hand {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        let suits = Suit::all().map(|suit| u16::from(hand.of(&suit)));
        let ranks = u16::from(hand);
        let flush = suits
            .iter()
            .position(|mask| mask.count_ones() >= 5)
            .map(|i| Suit::from(i as u8));
        Self {
            counts,
            suits,
            ranks,
            flush,
        }
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => {
                let pool = match ranking {
                    Ranking::Flush(_) => self.flush.map(|s| self.suits[s as usize]).unwrap_or(0),
                    _ => self.ranks,
                };
                let mut rank = pool & ranking.mask();
                while n < rank.count_ones() as usize {
                    rank &= rank - 1;
                }
                Kickers::from(rank)
            }
        }
    }

    /// per-rank card counts, deuce first
    pub fn counts(&self) -> &[u8; 13] {
        &self.counts
    }
    /// 13-bit rank mask of one suit
    pub fn suit_mask(&self, suit: Suit) -> u16 {
        self.suits[suit as usize]
    }
    /// 13-bit mask of every rank present
    pub fn rank_mask(&self) -> u16 {
        self.ranks
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        match self.ranks {
            0 => None,
            ranks => Some(Ranking::HighCard(Rank::from(ranks))),
        }
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_below(2, hi)
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|trips| {
            let second = self.find_rank_of_n_oak_below(3, trips);
            let paired = self.find_rank_of_n_oak(2);
            second.max(paired).map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.flush
            .map(|suit| self.suits[suit as usize])
            .map(Rank::from)
            .map(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.ranks).map(Ranking::Straight)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.flush
            .map(|suit| self.suits[suit as usize])
            .and_then(Self::find_rank_of_straight)
            .map(|top| match top {
                Rank::Ace => Ranking::RoyalFlush,
                top => Ranking::StraightFlush(top),
            })
    }

    /// highest card of the highest five-rank run, wheel included
    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    /// highest rank held exactly n times
    fn find_rank_of_n_oak(&self, n: u8) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .find(|r| self.counts[*r as usize] == n)
    }
    /// highest rank held exactly n times, strictly below `ceiling`
    fn find_rank_of_n_oak_below(&self, n: u8, ceiling: Rank) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| *r < ceiling)
            .find(|r| self.counts[*r as usize] == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let ranking = eval.find_ranking();
        (ranking, eval.find_kickers(ranking))
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("2h 2d 2c 5h 9s");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Two));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine, Rank::Five]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = eval("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = eval("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn flush_kickers_stay_in_suit() {
        let (ranking, kickers) = eval("Ah 9h 7h 4h 2h Kd Qc");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine, Rank::Seven, Rank::Four, Rank::Two]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = eval("9s Ts Js Qs Ks");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn royal_flush() {
        let (ranking, _) = eval("Ah Kh Qh Jh Th");
        assert_eq!(ranking, Ranking::RoyalFlush);
    }

    #[test]
    fn wheel_straight() {
        let (ranking, kickers) = eval("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, _) = eval("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, _) = eval("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, kickers) = eval("Kh Ah Ad As Ks Qs Js");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let (ranking, _) = eval("9s Ts Js Qs Ks Kh Kd Kc");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::King));
    }

    #[test]
    fn low_straight() {
        let (ranking, _) = eval("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn straight_beside_a_flush_of_another_run() {
        let (ranking, _) = eval("2h 3h 4h 5h 9h 6c 7d");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = eval("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, kickers) = eval("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn trips_over_a_lower_pair_and_a_higher_trip() {
        let (ranking, _) = eval("5s 5h 5d Qc Qs Qh 9d");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Queen, Rank::Five));
    }

    #[test]
    fn partial_hands() {
        assert_eq!(eval("Ah Ad").0, Ranking::OnePair(Rank::Ace));
        assert_eq!(eval("Ah Kd").0, Ranking::HighCard(Rank::Ace));
        assert_eq!(eval("Ah Kd").1, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn exposes_tallies() {
        let eval = Evaluator::from(Hand::try_from("Ah Ad 7h").unwrap());
        assert_eq!(eval.counts()[Rank::Ace as usize], 2);
        assert_eq!(eval.suit_mask(Suit::H), u16::from(Rank::Ace) | u16::from(Rank::Seven));
        assert_eq!(eval.rank_mask(), u16::from(Rank::Ace) | u16::from(Rank::Seven));
    }
}
