use crate::errors::Error;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    const fn mask() -> u16 {
        0b1111111111111
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => unreachable!("invalid rank"),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// a 13-bit rank set maps back to its highest rank
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        Rank::from((u16::BITS - 1 - (n & Self::mask()).leading_zeros()) as u8)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection
///
/// one row of the 13-rank x 4-suit card grid
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(Error::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_u8() {
        for n in 0..13 {
            assert!(u8::from(Rank::from(n)) == n);
        }
    }

    #[test]
    fn highest_bit_names_the_rank() {
        assert!(Rank::from(u16::from(Rank::Jack)) == Rank::Jack);
        assert!(Rank::from(0b_1000000000100_u16) == Rank::Ace);
    }

    #[test]
    fn nibble_rows() {
        assert!(u64::from(Rank::Two) == 0xF);
        assert!(u64::from(Rank::Five) == 0xF000);
    }

    #[test]
    fn bijective_str() {
        for n in 0..13u8 {
            let rank = Rank::from(n);
            assert!(rank == Rank::try_from(rank.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn ten_is_two_digits() {
        assert!(Rank::try_from("10") == Ok(Rank::Ten));
        assert!(Rank::try_from("T") == Err(Error::InvalidRank("T".to_string())));
    }
}
