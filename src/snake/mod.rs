pub mod puzzle;
pub use puzzle::*;

pub mod route;
pub use route::*;
