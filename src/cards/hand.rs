use super::card::Card;
use super::deck::Deck;
use super::suit::Suit;
use crate::errors::Error;
use crate::Arbitrary;
use itertools::Itertools;

/// Hand represents an unordered set of Cards, stored as a u64 whose 52 LSBs
/// each stand for one card. A single word avoids heap allocation and makes
/// membership, union, and per-suit projection single bitwise operations.
///
/// The fallible constructors only ever hand out five-card hands. Duplicates
/// collapse in the bitmask, so a repeated card is caught as a short hand.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// the sub-Hand of cards in the given suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(u64::from(*self) & u64::from(*suit))
    }

    /// trusts the bits. for internal construction off the validated path
    pub(crate) fn from_bits(n: u64) -> Self {
        Self(n & Self::mask())
    }

    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// cards come out from low to high. the lowest set bit names the next
/// card and then drops out of the mask
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0 {
            0 => None,
            bits => {
                let card = Card::from(bits.trailing_zeros() as u8);
                self.0 = bits & (bits - 1);
                Some(card)
            }
        }
    }
}

/// one-way conversion to the u64 bitstring
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> conversion (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let hand = Self(
            cards
                .into_iter()
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        );
        match hand.size() {
            5 => Ok(hand),
            n => Err(Error::InvalidHand(n)),
        }
    }
}

/// the 13-bit rank set of a hand, one bit per rank regardless of suit.
/// suit columns collapse rightward onto the clubs bit first, then the
/// 4-bit card stride tightens to a 1-bit rank stride
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        (0..13).fold(0, |ranks, i| ranks | ((x >> (3 * i)) & (1 << i)) as u16)
    }
}

/// str isomorphism
/// whitespace-separated cards, e.g. "4♣ 4♦ 5♦ 5♠ 5♥"
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, Error>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.into_iter().map(|card| card.to_string()).join(" "))
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        let mut deck = Deck::new();
        Self(
            (0..5)
                .map(|_| deck.draw())
                .map(u64::from)
                .fold(0u64, |a, b| a | b),
        )
    }
}
