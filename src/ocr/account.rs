use super::glyph::Glyph;
use crate::errors::Error;
use crate::Arbitrary;

/// cells per account document
const CELLS: usize = 9;
/// columns per account line
const WIDTH: usize = CELLS * 3;

/// A nine-digit account number decoded from, or rendered to, a three-line
/// OCR document.
///
/// Stored as the plain number. Leading zeros matter, so display and
/// rendering both pad to nine digits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Account(u32);

impl Account {
    /// the nine decimal digits, most significant first
    pub fn digits(&self) -> [u8; 9] {
        let mut digits = [0u8; 9];
        let mut n = self.0;
        for digit in digits.iter_mut().rev() {
            *digit = (n % 10) as u8;
            n /= 10;
        }
        digits
    }

    /// draw the account back as its three-line OCR document,
    /// each line newline-terminated
    pub fn render(&self) -> String {
        let digits = self.digits();
        let mut text = String::with_capacity(3 * (WIDTH + 1));
        for r in 0..3 {
            for digit in digits {
                let row = Glyph::from(digit).row(r);
                text.extend(row.iter().map(|&b| b as char));
            }
            text.push('\n');
        }
        text
    }
}

/// u32 isomorphism
/// panics above nine digits
impl From<u32> for Account {
    fn from(n: u32) -> Self {
        match n {
            0..=999_999_999 => Self(n),
            _ => panic!("Invalid account u32: {}", n),
        }
    }
}
impl From<Account> for u32 {
    fn from(account: Account) -> u32 {
        account.0
    }
}

/// str isomorphism
/// three lines of nine 3-column cells each
impl TryFrom<&str> for Account {
    type Error = Error;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let lines = text.lines().collect::<Vec<&str>>();
        let [top, mid, low] = lines.as_slice() else {
            return Err(Error::AccountLines(lines.len()));
        };
        let rows = [top.as_bytes(), mid.as_bytes(), low.as_bytes()];
        for row in rows {
            if row.len() != WIDTH {
                return Err(Error::AccountWidth(row.len()));
            }
        }
        let mut number = 0u32;
        for cell in 0..CELLS {
            let (from, till) = (cell * 3, cell * 3 + 3);
            let segments = [&rows[0][from..till], &rows[1][from..till], &rows[2][from..till]];
            let digit = Glyph::scan(segments)
                .and_then(|glyph| glyph.digit())
                .ok_or_else(|| Error::UnknownGlyph {
                    cell,
                    pattern: String::from_utf8_lossy(&segments.concat()).into_owned(),
                })?;
            number = number * 10 + digit as u32;
        }
        log::trace!("{:<16}{:09}", "account scanned", number);
        Ok(Self(number))
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:09}", self.0)
    }
}

impl Arbitrary for Account {
    fn random() -> Self {
        Self(rand::random_range(0..1_000_000_000))
    }
}
