use thiserror::Error;

/// Everything that can go wrong at a puzzle boundary.
///
/// Each parser rejects malformed input up front with the variant naming the
/// offending piece, so a caller never has to wonder whether a clean-looking
/// answer came from garbage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An OCR document must span exactly three lines.
    #[error("account must span 3 lines, got {0}")]
    AccountLines(usize),

    /// Every OCR line must be nine cells of three columns each.
    #[error("account lines must be 27 columns wide, got {0}")]
    AccountWidth(usize),

    /// A 3x3 cell matched none of the ten digit shapes.
    #[error("unreadable digit at cell {cell}: {pattern:?}")]
    UnknownGlyph { cell: usize, pattern: String },

    /// A rank symbol outside 2-10, J, Q, K, A.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(String),

    /// A suit symbol outside the four unicode suits.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(char),

    /// A card missing its rank or suit half.
    #[error("invalid card {0:?}")]
    InvalidCard(String),

    /// A hand must hold exactly five distinct cards.
    #[error("hand must hold 5 distinct cards, got {0}")]
    InvalidHand(usize),

    /// A figure may only be drawn with '+', '-', '|' and spaces.
    #[error("illegal figure character {found:?} at row {row}, column {col}")]
    InvalidFigure { row: usize, col: usize, found: char },

    /// Word search grids must be rectangular.
    #[error("puzzle row {row} is {got} cells wide, expected {expected}")]
    RaggedPuzzle { row: usize, expected: usize, got: usize },

    /// Word search grids hold one letter per cell, so multi-byte characters
    /// would break the neighbor geometry.
    #[error("puzzle row {row} contains non-ASCII characters")]
    NonAsciiPuzzle { row: usize },

    /// A pair of code points whose packed form is not a valid `char`,
    /// or whose low half collides with the odd-length padding.
    #[error("cannot pack code points {hi:?} and {lo:?} into one")]
    UnshortenablePair { hi: char, lo: char },
}
