use super::figure::Figure;
use super::rectangle::Rectangle;

/// Lazy row-major scan over candidate top-left corners.
///
/// Every `'+'` is a candidate. A candidate yields a rectangle when its
/// border walks clean: right along the top until the row below turns
/// solid, down that right edge, left along the bottom, up the left edge,
/// landing back on the starting corner. Crosses that join smaller boxes
/// fail the closure check here and succeed on their own turns.
pub struct Rectangles<'a> {
    figure: &'a Figure,
    row: usize,
    col: usize,
}

impl<'a> From<&'a Figure> for Rectangles<'a> {
    fn from(figure: &'a Figure) -> Self {
        Self {
            figure,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for Rectangles<'_> {
    type Item = Rectangle;
    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.figure.height() {
            let (row, col) = (self.row, self.col);
            match self.figure.at(row, col) {
                None => {
                    self.row += 1;
                    self.col = 0;
                }
                Some(cell) => {
                    self.col += 1;
                    if cell == b'+' {
                        if let Some(rectangle) = self.trace(row, col) {
                            log::trace!("{:<16}({}, {})", "corner closes", row, col);
                            return Some(rectangle);
                        }
                    }
                }
            }
        }
        None
    }
}

impl Rectangles<'_> {
    /// walk the border clockwise from a candidate corner.
    /// reported dimensions are interior, walls excluded
    fn trace(&self, row: usize, col: usize) -> Option<Rectangle> {
        let f = self.figure;
        // right along the top border until the row below turns solid
        let mut w = col + 1;
        loop {
            match f.at(row, w) {
                None | Some(b' ') => return None,
                Some(_) => {}
            }
            if row + 1 >= f.height() {
                return None;
            }
            if !matches!(f.at(row + 1, w), Some(b' ')) {
                break;
            }
            w += 1;
        }
        // down the right edge until the column just inside turns solid
        let mut h = row + 1;
        loop {
            if h >= f.height() || f.at(h, w) == Some(b' ') {
                return None;
            }
            if !matches!(f.at(h, w - 1), Some(b' ')) {
                break;
            }
            h += 1;
        }
        // left along the bottom border, which must land on the starting column
        let mut i = w - 1;
        loop {
            match f.at(h, i) {
                None | Some(b' ') => return None,
                Some(_) => {}
            }
            if !matches!(f.at(h - 1, i), Some(b' ')) {
                break;
            }
            if i == 0 {
                return None;
            }
            i -= 1;
        }
        if i != col {
            return None;
        }
        // up the left edge, which must land on the starting row
        let mut j = h - 1;
        loop {
            if f.at(j, col) == Some(b' ') {
                return None;
            }
            if !matches!(f.at(j, col + 1), Some(b' ')) {
                break;
            }
            if j == 0 {
                return None;
            }
            j -= 1;
        }
        if j != row {
            return None;
        }
        Some(Rectangle::from((w - col - 1, h - row - 1)))
    }
}
