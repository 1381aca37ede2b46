pub mod account;
pub use account::*;

pub mod glyph;
pub use glyph::*;
