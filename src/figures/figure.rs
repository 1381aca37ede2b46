use super::rectangles::Rectangles;
use crate::errors::Error;

/// An ASCII drawing of joined boxes: rows over `'+'`, `'-'`, `'|'` and
/// spaces. Rows may be ragged, shorter or longer than their neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    rows: Vec<Vec<u8>>,
}

impl Figure {
    /// lazily, the rectangles whose borders close within the drawing
    pub fn rectangles(&self) -> Rectangles<'_> {
        Rectangles::from(self)
    }
    /// number of rows, ragged or not
    pub(crate) fn height(&self) -> usize {
        self.rows.len()
    }
    /// the byte at (row, col): None off the grid or past a short row
    pub(crate) fn at(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }
}

/// str isomorphism
impl TryFrom<&str> for Figure {
    type Error = Error;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut rows = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (col, found) in line.chars().enumerate() {
                match found {
                    '+' | '-' | '|' | ' ' => {}
                    found => return Err(Error::InvalidFigure { row, col, found }),
                }
            }
            rows.push(line.bytes().collect());
        }
        Ok(Self { rows })
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
