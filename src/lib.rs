//! A box of classic algorithm katas, one module per puzzle.
//!
//! Each module is self-contained and exposes a small typed surface:
//!
//! - [`ocr`] reads nine-digit bank account numbers drawn as 3x3 pipe-and-underscore
//!   glyphs, and renders them back.
//! - [`wrap`] breaks text into lines at word boundaries, lazily.
//! - [`cards`] parses five-card poker hands and names the best ranking they hold.
//! - [`figures`] cuts an ASCII drawing of joined boxes into the rectangles that
//!   compose it.
//! - [`snake`] searches a letter grid for words along snaking, non-crossing paths.
//! - [`permute`] steps through the distinct orderings of a string.
//! - [`stocks`] computes the most profit available from a quote tape in hindsight.
//! - [`shortener`] halves a URL by packing code points pairwise, reversibly.
//!
//! Every boundary validates its input and fails fast with a descriptive
//! [`Error`] instead of guessing at a plausible answer.
//!
//! ```
//! use puzzlebox::cards::{Evaluator, Hand, Ranking};
//! use puzzlebox::snake::Puzzle;
//!
//! let hand = Hand::try_from("4♣ 4♦ 5♦ 5♠ 5♥")?;
//! assert_eq!(Evaluator::from(hand).find_ranking(), Ranking::FullHouse);
//!
//! let puzzle = Puzzle::try_from(["ANGULAR", "REDNCAE"].as_slice())?;
//! assert!(puzzle.contains("RED"));
//! # Ok::<(), puzzlebox::Error>(())
//! ```

pub mod cards;
pub mod errors;
pub mod figures;
pub mod ocr;
pub mod permute;
pub mod shortener;
pub mod snake;
pub mod stocks;
pub mod wrap;

pub use errors::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// A stock quote in whole currency units.
pub type Price = u32;
/// Accumulated trading profit. Wider than [`Price`] so long tapes cannot overflow.
pub type Profit = u64;

/// Random instance generation for testing and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Wire the `log` facade to a terminal logger and a timestamped file under
/// `logs/`. The file keeps every per-puzzle trace; the terminal stays at INFO.
#[cfg(feature = "logger")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Trace,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
