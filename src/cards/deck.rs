use super::card::Card;

/// A mutable deck of cards supporting uniform random draws.
///
/// Remaining cards live in a 52-bit mask, one bit per card, so drawing is a
/// matter of clearing bits. Used to deal the random hands behind
/// [`Arbitrary`](crate::Arbitrary) instances and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(u64);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(0x000FFFFFFFFFFFFF)
    }
    /// How many cards remain.
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        assert!(self.size() > 0);
        let i = rand::random_range(0..self.size());
        let mut bits = self.0;
        for _ in 0..i {
            bits &= bits - 1; // clear the lowest remaining card
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.remove(card);
        card
    }
    fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_is_full() {
        assert!(Deck::new().size() == 52);
    }

    #[test]
    fn draws_are_distinct() {
        let mut deck = Deck::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..52 {
            assert!(seen.insert(deck.draw()));
        }
        assert!(deck.size() == 0);
    }
}
