use super::route::Route;
use crate::errors::Error;

/// neighbor offsets in visiting order: left, right, up, down
const SIBLINGS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular letter grid searched for words along snaking paths.
///
/// A path moves one cell sideways or vertically at a time, never
/// diagonally, and never revisits a cell. Cells hold single ASCII
/// letters, which keeps every cell one byte and the geometry honest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Puzzle {
    fn height(&self) -> usize {
        self.rows.len()
    }

    /// whether the word can be spelled along some snaking path.
    /// the empty word has nowhere to start, so it is never found
    pub fn contains(&self, word: &str) -> bool {
        let word = word.as_bytes();
        let Some(&first) = word.first() else {
            return false;
        };
        for y in 0..self.height() {
            for x in 0..self.width {
                if self.rows[y][x] == first && self.slither(x, y, word) {
                    log::debug!("{:<16}({}, {})", "snake found", x, y);
                    return true;
                }
            }
        }
        false
    }

    /// iterative backtracking from one start cell. each stack frame is a
    /// placed letter plus the next direction to try; a frame that has
    /// tried all four directions pops and frees its cell
    fn slither(&self, x: usize, y: usize, word: &[u8]) -> bool {
        let mut route = Route::from((self.width, self.height()));
        let mut stack = vec![Step { x, y, heading: 0 }];
        route.visit(x, y);
        loop {
            let depth = stack.len();
            let Some(step) = stack.last_mut() else {
                return false;
            };
            if depth == word.len() {
                return true;
            }
            if step.heading == 4 {
                route.leave(step.x, step.y);
                stack.pop();
                continue;
            }
            let (dx, dy) = SIBLINGS[step.heading as usize];
            step.heading += 1;
            let (sx, sy) = (step.x as isize + dx, step.y as isize + dy);
            if sx < 0 || sy < 0 {
                continue;
            }
            let (sx, sy) = (sx as usize, sy as usize);
            if route.available(sx, sy) && self.rows[sy][sx] == word[depth] {
                route.visit(sx, sy);
                stack.push(Step {
                    x: sx,
                    y: sy,
                    heading: 0,
                });
            }
        }
    }
}

/// one placed letter: its cell and the next direction to try
#[derive(Debug, Clone, Copy)]
struct Step {
    x: usize,
    y: usize,
    heading: u8,
}

/// str slice isomorphism
/// one row per line, all the same length
impl TryFrom<&[&str]> for Puzzle {
    type Error = Error;
    fn try_from(lines: &[&str]) -> Result<Self, Self::Error> {
        let width = lines.first().map_or(0, |line| line.len());
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            if !line.is_ascii() {
                return Err(Error::NonAsciiPuzzle { row });
            }
            if line.len() != width {
                return Err(Error::RaggedPuzzle {
                    row,
                    expected: width,
                    got: line.len(),
                });
            }
            rows.push(line.bytes().collect());
        }
        Ok(Self { rows, width })
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
