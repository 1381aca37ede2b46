/// The nine poker hand categories, weakest to strongest.
///
/// Carries no kicker information. The derived Ord follows
/// declaration order, so a full house beats a flush beats a straight.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Ranking {
    /// All nine categories in ascending strength.
    pub const fn all() -> [Ranking; 9] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Ranking {
    fn from(n: u8) -> Ranking {
        match n {
            0 => Ranking::HighCard,
            1 => Ranking::OnePair,
            2 => Ranking::TwoPair,
            3 => Ranking::ThreeOAK,
            4 => Ranking::Straight,
            5 => Ranking::Flush,
            6 => Ranking::FullHouse,
            7 => Ranking::FourOAK,
            8 => Ranking::StraightFlush,
            _ => panic!("Invalid ranking u8: {}", n),
        }
    }
}
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
