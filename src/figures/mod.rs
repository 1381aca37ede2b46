pub mod figure;
pub use figure::*;

pub mod rectangle;
pub use rectangle::*;

pub mod rectangles;
pub use rectangles::*;
