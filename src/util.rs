mod bounds;

pub use bounds::{Max, Min};
