/// A discovered box, named by its interior dimensions. The border adds one
/// column and one row on each side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rectangle {
    width: usize,
    height: usize,
}

impl Rectangle {
    /// interior columns between the side walls
    pub fn width(&self) -> usize {
        self.width
    }
    /// interior rows between the top and bottom borders
    pub fn height(&self) -> usize {
        self.height
    }
}

/// (width, height) isomorphism
impl From<(usize, usize)> for Rectangle {
    fn from((width, height): (usize, usize)) -> Self {
        Self { width, height }
    }
}

/// draws the box: corner-and-dash borders around `height` wall rows,
/// every line newline-terminated
impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "+{}+", "-".repeat(self.width))?;
        for _ in 0..self.height {
            writeln!(f, "|{}|", " ".repeat(self.width))?;
        }
        writeln!(f, "+{}+", "-".repeat(self.width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_six_by_two() {
        assert_eq!(
            Rectangle::from((6, 2)).to_string(),
            "+------+\n|      |\n|      |\n+------+\n",
        );
    }

    #[test]
    fn render_degenerate() {
        assert_eq!(Rectangle::from((0, 0)).to_string(), "++\n++\n");
    }
}
