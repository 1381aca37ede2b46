use super::rank::Rank;
use super::suit::Suit;
use crate::errors::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// Cards parse from strings like `"A♠"` or `"10♣"`: a rank symbol followed
/// by a unicode suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
///
/// the suit is the last character, the rank is everything before it,
/// so the two-digit "10" needs no special casing
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or_else(|| Error::InvalidCard(s.to_string()))?;
        let suit = Suit::try_from(suit)?;
        let rank = Rank::try_from(chars.as_str())?;
        Ok(Card::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::super::deck::Deck;
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        let card = Deck::new().draw();
        let suit = card.suit();
        let rank = card.rank();
        assert!(card == Card::from((rank, suit)));
    }

    #[test]
    fn bijective_u8() {
        let card = Deck::new().draw();
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn bijective_str() {
        let card = Deck::new().draw();
        assert!(card == Card::try_from(card.to_string().as_str()).unwrap());
    }

    #[test]
    fn parse_ten() {
        let card = Card::try_from("10♥").unwrap();
        assert!(card.rank() == Rank::Ten);
        assert!(card.suit() == Suit::H);
    }

    #[test]
    fn parse_rejects_nonsense() {
        assert!(Card::try_from("") == Err(Error::InvalidCard(String::new())));
        assert!(Card::try_from("A♠x") == Err(Error::InvalidSuit('x')));
        assert!(Card::try_from("1♠") == Err(Error::InvalidRank("1".to_string())));
    }
}
