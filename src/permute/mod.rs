pub mod permutations;
pub use permutations::*;
