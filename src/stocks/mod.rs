pub mod profit;

pub use profit::*;
