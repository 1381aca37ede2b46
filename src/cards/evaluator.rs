use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// rank mask of the ace-low straight, where the ace plays below the two
const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a five-card hand's category.
///
/// Using the compact representation of the Hand, we search for the
/// strongest category using bitwise operations, from straight flush down
/// to high card. The first category that matches is the hand's name, so
/// weaker searches never run for strong hands.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        let ranking = None
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("five cards always rank");
        log::trace!("{:<16}{}", ranking, self.0);
        ranking
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(|_| Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|_| Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(|_| Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(|_| Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        let hi = self.find_rank_of_n_oak(2)?;
        self.find_rank_of_n_oak_skip(2, Some(hi))
            .map(|_| Ranking::TwoPair)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        let trips = self.find_rank_of_n_oak(3)?;
        self.find_rank_of_n_oak_skip(2, Some(trips))
            .map(|_| Ranking::FullHouse)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(|_| Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|_| Ranking::Flush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        let suit = self.find_suit_of_flush()?;
        self.find_rank_of_straight(self.0.of(&suit))
            .map(|_| Ranking::StraightFlush)
    }

    /// the highest rank that tops a five-card run, if any.
    /// four shift-ands leave a bit standing only where the four bits
    /// below it were set too. the wheel keeps its gap at the top, so
    /// the trick cannot see it and it gets a mask check instead
    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let runs = (0..4).fold(ranks, |bits, _| bits & bits << 1);
        if runs > 0 {
            Some(Rank::from(runs))
        } else if ranks & WHEEL == WHEEL {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    /// with exactly five cards, either every card sits in the flush
    /// suit or there is no flush at all
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() == 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    /// walk the rank rows from the ace down, looking for one holding at
    /// least n cards. skipping a row is what separates the second pair
    /// from the first, and a full house's pair from its trips
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        (0..13u8)
            .rev()
            .map(Rank::from)
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.count_of(rank) >= n)
    }
    /// how many cards of this rank the hand holds
    fn count_of(&self, rank: &Rank) -> usize {
        (u64::from(self.0) & u64::from(*rank)).count_ones() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::permutation::Permutation;
    use crate::Arbitrary;

    fn ranking(hand: &str) -> Ranking {
        Evaluator::from(Hand::try_from(hand).unwrap()).find_ranking()
    }

    #[test]
    fn straight_flush() {
        assert_eq!(ranking("4♥ 5♥ 6♥ 7♥ 8♥"), Ranking::StraightFlush);
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(ranking("A♠ 4♠ 3♠ 5♠ 2♠"), Ranking::StraightFlush);
    }

    #[test]
    fn four_oak() {
        assert_eq!(ranking("4♣ 4♦ 4♥ 4♠ 10♥"), Ranking::FourOAK);
    }

    #[test]
    fn full_house() {
        assert_eq!(ranking("4♣ 4♦ 5♦ 5♠ 5♥"), Ranking::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(ranking("4♣ 5♣ 6♣ 7♣ Q♣"), Ranking::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(ranking("2♠ 3♥ 4♥ 5♥ 6♥"), Ranking::Straight);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(ranking("2♥ 4♦ 5♥ A♦ 3♠"), Ranking::Straight);
    }

    #[test]
    fn broadway_straight() {
        assert_eq!(ranking("10♠ J♥ Q♦ K♣ A♠"), Ranking::Straight);
    }

    #[test]
    fn three_oak() {
        assert_eq!(ranking("2♥ 2♠ 2♦ 7♥ A♥"), Ranking::ThreeOAK);
    }

    #[test]
    fn two_pair() {
        assert_eq!(ranking("2♥ 4♦ 4♥ A♦ A♠"), Ranking::TwoPair);
    }

    #[test]
    fn one_pair() {
        assert_eq!(ranking("3♥ 4♥ 10♥ 3♦ A♠"), Ranking::OnePair);
    }

    #[test]
    fn high_card() {
        assert_eq!(ranking("A♥ K♥ Q♥ 2♦ 3♠"), Ranking::HighCard);
    }

    #[test]
    fn almost_wheel_is_no_straight() {
        assert_eq!(ranking("A♦ 2♥ 3♠ 4♣ 6♦"), Ranking::HighCard);
    }

    #[test]
    fn order_of_cards_is_irrelevant() {
        assert_eq!(ranking("4♣ 4♦ 5♦ 5♠ 5♥"), ranking("5♥ 4♦ 5♦ 4♣ 5♠"));
    }

    #[test]
    fn suits_are_interchangeable() {
        for _ in 0..100 {
            let hand = Hand::random();
            let image = Permutation::random().image(&hand);
            assert_eq!(
                Evaluator::from(hand).find_ranking(),
                Evaluator::from(image).find_ranking(),
            );
        }
    }
}
