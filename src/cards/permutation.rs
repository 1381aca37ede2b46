use super::hand::Hand;
use super::suit::Suit;
use crate::Arbitrary;
use itertools::Itertools;

/// a suit relabeling, written as the images of (C, D, H, S) in that order.
/// there are 4! = 24 of them and they form a group under composition.
///
/// renaming suits never changes which category a hand holds, so the
/// evaluator must be constant on every orbit. the group is small enough
/// to check that exhaustively.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Permutation([Suit; 4]);

impl Permutation {
    pub const fn identity() -> Self {
        Self(Suit::all())
    }

    /// every element of the group, in lexicographic order
    pub fn exhaust() -> impl Iterator<Item = Self> {
        Suit::all()
            .into_iter()
            .permutations(4)
            .map(|suits| Self(suits.try_into().expect("4 suits drawn from 4")))
    }

    /// relabel every card at once. each suit column is masked out of
    /// the hand and slid sideways into its new column
    pub fn image(&self, hand: &Hand) -> Hand {
        Hand::from_bits(
            Suit::all()
                .into_iter()
                .map(|old| self.slide(hand, old))
                .fold(0, |union, column| union | column),
        )
    }

    fn slide(&self, hand: &Hand, old: Suit) -> u64 {
        let new = self.map(&old);
        let column = u64::from(*hand) & u64::from(old);
        match new as i8 - old as i8 {
            delta if delta < 0 => column >> delta.unsigned_abs(),
            delta => column << delta as u32,
        }
    }

    fn map(&self, suit: &Suit) -> Suit {
        self.0[*suit as usize]
    }
}

impl Arbitrary for Permutation {
    fn random() -> Self {
        use rand::prelude::IteratorRandom;
        let ref mut rng = rand::rng();
        Self::exhaust().choose(rng).expect("the group is never empty")
    }
}

impl std::fmt::Display for Permutation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for suit in Suit::all() {
            writeln!(f, "{} -> {}", suit, self.map(&suit))?;
        }
        Ok(())
    }
}
