/// One OCR digit cell: three rows of three columns over the alphabet
/// `' '`, `'_'`, `'|'`, packed two bits per position into a u32.
///
/// Exactly ten packings draw digits. Everything else is noise, and noise
/// is reported, never guessed at.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Glyph(u32);

/// the ten digit shapes, row-major; glyph k draws digit k
const DIGITS: [Glyph; 10] = [
    Glyph(pack(b" _ | ||_|")),
    Glyph(pack(b"     |  |")),
    Glyph(pack(b" _  _||_ ")),
    Glyph(pack(b" _  _| _|")),
    Glyph(pack(b"   |_|  |")),
    Glyph(pack(b" _ |_  _|")),
    Glyph(pack(b" _ |_ |_|")),
    Glyph(pack(b" _   |  |")),
    Glyph(pack(b" _ |_||_|")),
    Glyph(pack(b" _ |_| _|")),
];

const fn bits(cell: u8) -> u32 {
    match cell {
        b' ' => 0,
        b'_' => 1,
        b'|' => 2,
        _ => panic!("cell outside the OCR alphabet"),
    }
}

const fn pack(cells: &[u8; 9]) -> u32 {
    let mut packed = 0;
    let mut i = 0;
    while i < 9 {
        packed |= bits(cells[i]) << (2 * i);
        i += 1;
    }
    packed
}

impl Glyph {
    /// packs three 3-column row segments, or None when any byte
    /// falls outside the cell alphabet
    pub fn scan(rows: [&[u8]; 3]) -> Option<Self> {
        let mut packed = 0;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 3 {
                return None;
            }
            for (c, &cell) in row.iter().enumerate() {
                let bits = match cell {
                    b' ' => 0,
                    b'_' => 1,
                    b'|' => 2,
                    _ => return None,
                };
                packed |= bits << (2 * (r * 3 + c));
            }
        }
        Some(Self(packed))
    }

    /// which digit this glyph draws, if any
    pub fn digit(&self) -> Option<u8> {
        DIGITS.iter().position(|d| d == self).map(|i| i as u8)
    }

    /// one 3-column row of the drawing, r in 0..3
    pub fn row(&self, r: usize) -> [u8; 3] {
        let mut row = [0u8; 3];
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = match (self.0 >> (2 * (r * 3 + c))) & 0b11 {
                0 => b' ',
                1 => b'_',
                2 => b'|',
                _ => unreachable!("two-bit cell codes stop at 2"),
            };
        }
        row
    }
}

/// u8 injection: the glyph that draws a decimal digit
impl From<u8> for Glyph {
    fn from(digit: u8) -> Self {
        match DIGITS.get(digit as usize) {
            Some(glyph) => *glyph,
            None => panic!("Invalid digit u8: {}", digit),
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for r in 0..3 {
            let row = self.row(r);
            writeln!(f, "{}", String::from_utf8_lossy(&row))?;
        }
        Ok(())
    }
}
